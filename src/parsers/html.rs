use crate::parsers::selectors;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document for one source item.
///
/// Review boxes borrow from it, so it must outlive every record built from
/// its boxes.
pub struct ParsedPage {
    doc: Html,
}

/// One reviewer's review inside a [`ParsedPage`].
pub type ReviewBox<'a> = ElementRef<'a>;

impl ParsedPage {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// The document's root element, used as the scope for page-level fields
    pub fn root(&self) -> ElementRef<'_> {
        self.doc.root_element()
    }

    /// Every review box on the page, in document order
    pub fn review_boxes(&self) -> Vec<ReviewBox<'_>> {
        let boxes = self
            .doc
            .select(&selectors::page::REVIEW_BOX)
            .collect::<Vec<_>>();
        ::log::debug!("Found {} review boxes", boxes.len());
        boxes
    }
}

/// Concatenated text of an element and all its descendants
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// First descendant of `scope` matching `selector`
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Full text of the first match
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first(scope, selector).map(text_of)
}

/// Attribute value of the first match. A first match without the attribute
/// counts as absent; later matches are not consulted.
pub fn first_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    first(scope, selector)
        .and_then(|e| e.value().attr(attr))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_joins_nested_text() {
        let page = ParsedPage::parse("<html><body><p>Hi <b>there</b>!</p></body></html>");
        let p = Selector::parse("p").unwrap();
        assert_eq!(first_text(page.root(), &p).as_deref(), Some("Hi there!"));
    }

    #[test]
    fn test_first_attr_only_looks_at_first_match() {
        let page = ParsedPage::parse(r#"<a>no href</a><a href="/second">second</a>"#);
        let a = Selector::parse("a").unwrap();
        assert_eq!(first_attr(page.root(), &a, "href"), None);
    }

    #[test]
    fn test_no_review_boxes_on_empty_document() {
        let page = ParsedPage::parse("");
        assert!(page.review_boxes().is_empty());
    }
}
