pub mod assemble;
pub mod bubble;
pub mod extract;
pub mod html;
pub mod pagination;
pub mod selectors;

#[cfg(test)]
pub(crate) mod tests;

pub use html::{ParsedPage, ReviewBox};
pub use pagination::PageLink;

use crate::results::ReviewRecord;

/// Entry points the crawl drivers use on raw page source
pub struct Parser;

impl Parser {
    /// Parse a review page and build one record per review box
    pub fn parse_reviews(source: &str, link: &str) -> Vec<ReviewRecord> {
        let page = ParsedPage::parse(source);
        let records = assemble::records_for_page(link, &page);
        ::log::debug!("Extracted {} reviews from {}", records.len(), link);
        records
    }

    /// Parse a first page and list every review page of that hotel
    pub fn parse_review_pages(source: &str) -> Option<Vec<String>> {
        let page = ParsedPage::parse(source);
        pagination::resolve(&page)
    }
}
