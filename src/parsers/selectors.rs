//! CSS selectors for the hotel review pages.
//!
//! The site ships obfuscated class names that change with redesigns. When
//! a field starts coming back empty across a whole run, capture a fresh
//! page, update the selector here and add the markup to the test fixtures.

use scraper::Selector;
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Page-level selectors, evaluated once per document.
pub mod page {
    use super::*;

    pub static HOTEL_NAME: LazyLock<Selector> = LazyLock::new(|| selector("h1#HEADING"));

    pub static HOTEL_ADDRESS: LazyLock<Selector> =
        LazyLock::new(|| selector("span._3ErVArsu.jke2_wbp"));

    pub static REVIEW_COUNT: LazyLock<Selector> = LazyLock::new(|| selector("span._33O9dg0j"));

    /// One reviewer's review container
    pub static REVIEW_BOX: LazyLock<Selector> =
        LazyLock::new(|| selector("div._2wrUUKlw._3hFEdNs8"));

    /// Numbered pagination control; `href` plus the page number as its text
    pub static PAGE_NUMBER: LazyLock<Selector> = LazyLock::new(|| selector("a.pageNum"));
}

/// Selectors scoped to a single review box.
pub mod review {
    use super::*;

    /// Reviewer display name and profile link share this anchor
    pub static REVIEWER_LINK: LazyLock<Selector> =
        LazyLock::new(|| selector("a.ui_header_link._1r_My98y"));

    pub static REVIEW_ID: LazyLock<Selector> = LazyLock::new(|| selector("div.oETBfkHU"));
    pub static REVIEW_ID_ATTR: &str = "data-reviewid";

    pub static REVIEW_DATE: LazyLock<Selector> = LazyLock::new(|| selector("div._2fxQ4TOx"));

    pub static REVIEWER_LOCATION: LazyLock<Selector> =
        LazyLock::new(|| selector("span.default._3J15flPT.small"));

    pub static REVIEW_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("q.IRsGHoPm"));

    pub static DATE_OF_STAY: LazyLock<Selector> = LazyLock::new(|| selector("span._34Xs-BQm"));

    pub static TRIP_TYPE: LazyLock<Selector> = LazyLock::new(|| selector("span._2bVY3aT5"));

    /// One rating category (label text plus its own bubble)
    pub static RATING_CATEGORY: LazyLock<Selector> =
        LazyLock::new(|| selector("div._3ErKuh24._1OrVnQ-J"));

    pub static RESPONDER_NAME: LazyLock<Selector> = LazyLock::new(|| selector("div._204cKjWJ"));

    /// Response date lives in the `title` attribute, not the text
    pub static RESPONSE_DATE: LazyLock<Selector> = LazyLock::new(|| selector("div._2lY-Jowi"));
    pub static RESPONSE_DATE_ATTR: &str = "title";

    pub static RESPONSE_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("span.sT5TMxg3"));
}
