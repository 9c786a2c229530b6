//! Review page completion.
//!
//! The page-number control only shows a window of pages (`1 2 3 … 7`). The
//! pages hidden behind the ellipsis are rebuilt from any known link by
//! rewriting its `Reviews-or<N>` offset token, `N` being the index of the
//! first review on that page. If the site changes the stride or the URL
//! template this quietly produces wrong URLs.

use crate::parsers::html::{self, ParsedPage};
use crate::parsers::selectors;
use regex::Regex;
use std::sync::LazyLock;

/// Reviews per page
pub const OFFSET_STRIDE: i64 = 5;

/// Upper bound on pages rebuilt for one hotel
pub const MAX_SYNTHESIZED_PAGES: i64 = 100_000;

static OFFSET_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Reviews-or\d+").expect("static regex must compile"));

/// One numbered pagination control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub url: String,
    pub page_index: i64,
}

impl PageLink {
    pub fn new(url: impl Into<String>, page_index: i64) -> Self {
        Self {
            url: url.into(),
            page_index,
        }
    }
}

/// Every review page URL for the hotel, known and synthesized.
///
/// `None` when the page carries no usable pagination controls; the caller
/// should then treat the current page as the only one.
pub fn resolve(page: &ParsedPage) -> Option<Vec<String>> {
    collect_page_links(page).map(complete)
}

/// Reads the pagination controls. Any control without an `href` or with a
/// non-numeric label invalidates the whole set.
pub fn collect_page_links(page: &ParsedPage) -> Option<Vec<PageLink>> {
    let links = page
        .root()
        .select(&selectors::page::PAGE_NUMBER)
        .map(|a| {
            let url = a.value().attr("href")?;
            let page_index = html::text_of(a).trim().parse::<i64>().ok()?;
            Some(PageLink::new(url, page_index))
        })
        .collect::<Option<Vec<_>>>()?;

    if links.is_empty() {
        ::log::debug!("No pagination controls found");
        return None;
    }
    Some(links)
}

/// Orders the known links and fills the gap after the visible window
pub fn complete(mut links: Vec<PageLink>) -> Vec<String> {
    links.sort_by_key(|l| l.page_index);

    let mut urls = links.iter().map(|l| l.url.clone()).collect::<Vec<_>>();
    if links.len() < 2 {
        return urls;
    }

    let last = links[links.len() - 1].page_index;
    let second_last = links[links.len() - 2].page_index;
    if last.saturating_sub(second_last) <= 1 {
        return urls;
    }

    let Some((start, end)) = gap_offsets(second_last, last) else {
        ::log::warn!(
            "Ignoring pagination gap between pages {} and {}",
            second_last,
            last
        );
        return urls;
    };

    let template = &links[0].url;
    let missing = synthesize(template, start, end);
    ::log::debug!(
        "Pagination gap between pages {} and {}: synthesized {} URLs",
        second_last,
        last,
        missing.len()
    );
    urls.extend(missing);
    urls
}

/// Review offsets of the hidden pages, or `None` when the labels are out of range
fn gap_offsets(second_last: i64, last: i64) -> Option<(i64, i64)> {
    let hidden = last.checked_sub(second_last)?.checked_sub(1)?;
    if hidden > MAX_SYNTHESIZED_PAGES {
        return None;
    }
    let start = second_last.checked_mul(OFFSET_STRIDE)?;
    let end = last.checked_sub(1)?.checked_mul(OFFSET_STRIDE)?;
    Some((start, end))
}

/// One URL per offset in `start..end`, stepping by the stride
fn synthesize(template: &str, start: i64, end: i64) -> Vec<String> {
    (start..end)
        .step_by(OFFSET_STRIDE as usize)
        .map(|offset| {
            OFFSET_TOKEN
                .replace_all(template, format!("Reviews-or{offset}").as_str())
                .into_owned()
        })
        .collect()
}
