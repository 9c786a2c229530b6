//! Field extractors.
//!
//! Every function here is total: a missing node, missing attribute or
//! unparsable number yields the field's absent value, never a panic or an
//! error. One markup change therefore blanks one field, not the run.

use crate::parsers::bubble;
use crate::parsers::html::{self, ParsedPage, ReviewBox};
use crate::parsers::selectors;
use crate::results::{Numeric, ResponseDetails};
use regex::Regex;
use scraper::ElementRef;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static CONTRIBUTIONS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"contributions?").expect("static regex must compile"));

static HELPFUL_VOTES_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"helpful votes?").expect("static regex must compile"));

/// Appended to each rating category label to form its key
pub const CATEGORY_KEY_SUFFIX: &str = "Score";

//
// Page-level fields
//

pub fn hotel_name(page: &ParsedPage) -> Option<String> {
    html::first_text(page.root(), &selectors::page::HOTEL_NAME)
}

pub fn hotel_address(page: &ParsedPage) -> Option<String> {
    html::first_text(page.root(), &selectors::page::HOTEL_ADDRESS)
}

/// Total review count shown in the page header, e.g. `"87 reviews"`
pub fn review_count(page: &ParsedPage) -> Option<i64> {
    html::first_text(page.root(), &selectors::page::REVIEW_COUNT)
        .and_then(|t| t.replace(" reviews", "").trim().parse().ok())
}

//
// Review-level fields
//

pub fn reviewer_name(review: ReviewBox<'_>) -> String {
    html::first_text(review, &selectors::review::REVIEWER_LINK).unwrap_or_default()
}

pub fn reviewer_profile(review: ReviewBox<'_>) -> String {
    html::first_attr(review, &selectors::review::REVIEWER_LINK, "href").unwrap_or_default()
}

pub fn review_id(review: ReviewBox<'_>) -> Numeric {
    html::first_attr(review, &selectors::review::REVIEW_ID, selectors::review::REVIEW_ID_ATTR)
        .and_then(|id| id.trim().parse::<i64>().ok())
        .into()
}

/// Review date with the `"<name> wrote a review "` lead-in removed
pub fn review_date(review: ReviewBox<'_>) -> String {
    let lead_in = format!("{} wrote a review ", reviewer_name(review));
    html::first_text(review, &selectors::review::REVIEW_DATE)
        .map(|t| t.replace(&lead_in, ""))
        .unwrap_or_default()
}

pub fn reviewer_location(review: ReviewBox<'_>) -> String {
    html::first_text(review, &selectors::review::REVIEWER_LOCATION).unwrap_or_default()
}

pub fn reviewer_contributions(review: ReviewBox<'_>) -> Numeric {
    labelled_counter(review, &CONTRIBUTIONS_LABEL)
}

pub fn helpful_votes(review: ReviewBox<'_>) -> Numeric {
    labelled_counter(review, &HELPFUL_VOTES_LABEL)
}

/// Overall rating given by the reviewer
pub fn star_rating(review: ReviewBox<'_>) -> Numeric {
    bubble::star_value(review)
}

pub fn review_text(review: ReviewBox<'_>) -> Option<String> {
    html::first_text(review, &selectors::review::REVIEW_TEXT)
}

pub fn date_of_stay(review: ReviewBox<'_>) -> Option<String> {
    html::first_text(review, &selectors::review::DATE_OF_STAY)
        .map(|t| t.trim().replace("Date of stay: ", ""))
}

pub fn trip_type(review: ReviewBox<'_>) -> Option<String> {
    html::first_text(review, &selectors::review::TRIP_TYPE)
        .map(|t| t.trim().replace("Trip type: ", ""))
}

/// Per-category ratings keyed by `"<label>Score"`
///
/// Empty when the review carries no categories. A category whose bubble
/// can't be decoded is kept with a `NotANumber` value.
pub fn ratings_detail(review: ReviewBox<'_>) -> BTreeMap<String, Numeric> {
    review
        .select(&selectors::review::RATING_CATEGORY)
        .map(|category| {
            let key = format!("{}{}", html::text_of(category), CATEGORY_KEY_SUFFIX);
            (key, bubble::star_value(category))
        })
        .collect()
}

/// Hotel response; all three parts must be present or none are reported
pub fn response_details(review: ReviewBox<'_>) -> ResponseDetails {
    let responder = html::first_text(review, &selectors::review::RESPONDER_NAME);
    let date = html::first_attr(
        review,
        &selectors::review::RESPONSE_DATE,
        selectors::review::RESPONSE_DATE_ATTR,
    );
    let text = html::first_text(review, &selectors::review::RESPONSE_TEXT);

    match (responder, date, text) {
        (Some(name), Some(date), Some(text)) => ResponseDetails {
            responder_name: Some(name),
            response_date: Some(date),
            response_text: Some(text),
        },
        _ => ResponseDetails::default(),
    }
}

/// Reads a number that sits next to a label, e.g. `<span><b>12</b> contributions</span>`.
///
/// Finds the first text node matching `label`, takes its parent element's
/// full text, strips every label match and parses what is left.
fn labelled_counter(review: ReviewBox<'_>, label: &Regex) -> Numeric {
    review
        .descendants()
        .find(|node| node.value().as_text().is_some_and(|t| label.is_match(t)))
        .and_then(|node| node.parent())
        .and_then(ElementRef::wrap)
        .map(html::text_of)
        .and_then(|t| label.replace_all(&t, "").trim().parse::<i64>().ok())
        .into()
}
