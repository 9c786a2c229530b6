use crate::parsers::extract;
use crate::parsers::html::{ParsedPage, ReviewBox};
use crate::results::ReviewRecord;

/// Hotel-level fields, read once per page and shared by all its reviews
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub hotel_name: Option<String>,
    pub hotel_address: Option<String>,
    pub review_count: Option<i64>,
}

impl PageSummary {
    pub fn extract(page: &ParsedPage) -> Self {
        Self {
            hotel_name: extract::hotel_name(page),
            hotel_address: extract::hotel_address(page),
            review_count: extract::review_count(page),
        }
    }
}

/// Builds the record for one review box. No cross-field checks are made.
pub fn assemble(link: &str, summary: &PageSummary, review: ReviewBox<'_>) -> ReviewRecord {
    ReviewRecord {
        link: link.to_string(),
        hotel_name: summary.hotel_name.clone(),
        hotel_address: summary.hotel_address.clone(),
        review_count: summary.review_count,
        reviewer_name: extract::reviewer_name(review),
        reviewer_profile_url: extract::reviewer_profile(review),
        review_id: extract::review_id(review),
        review_date: extract::review_date(review),
        reviewer_location: extract::reviewer_location(review),
        reviewer_contributions: extract::reviewer_contributions(review),
        helpful_votes: extract::helpful_votes(review),
        star_rating: extract::star_rating(review),
        review_text: extract::review_text(review),
        date_of_stay: extract::date_of_stay(review),
        trip_type: extract::trip_type(review),
        ratings_detail: extract::ratings_detail(review),
        response_details: extract::response_details(review),
    }
}

/// One record per review box on the page, in document order
pub fn records_for_page(link: &str, page: &ParsedPage) -> Vec<ReviewRecord> {
    let summary = PageSummary::extract(page);
    page.review_boxes()
        .into_iter()
        .map(|review| assemble(link, &summary, review))
        .collect()
}
