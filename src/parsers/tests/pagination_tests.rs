use crate::parsers::html::ParsedPage;
use crate::parsers::pagination::{self, PageLink};
use crate::parsers::tests::fixtures::paginated_page;

#[cfg(test)]
mod tests {
    use super::*;

    fn url(offset: i64) -> String {
        format!("/Hotel_Review-g186346-d192027-Reviews-or{offset}-Grand_Hotel-York.html")
    }

    #[test]
    fn test_gap_is_filled_after_known_links() {
        let page = ParsedPage::parse(&paginated_page(&[1, 2, 3, 7]));
        let urls = pagination::resolve(&page).unwrap();

        assert_eq!(
            urls,
            vec![
                url(0),
                url(5),
                url(10),
                url(30),
                // synthesized pages 4, 5 and 6
                url(15),
                url(20),
                url(25),
            ]
        );
    }

    #[test]
    fn test_consecutive_pages_are_returned_verbatim() {
        let page = ParsedPage::parse(&paginated_page(&[1, 2]));
        let urls = pagination::resolve(&page).unwrap();
        assert_eq!(urls, vec![url(0), url(5)]);
    }

    #[test]
    fn test_single_link_is_returned_as_is() {
        let page = ParsedPage::parse(&paginated_page(&[2]));
        assert_eq!(pagination::resolve(&page), Some(vec![url(5)]));
    }

    #[test]
    fn test_no_controls_is_absent() {
        let page = ParsedPage::parse("<html><body><p>Only reviews</p></body></html>");
        assert_eq!(pagination::collect_page_links(&page), None);
        assert_eq!(pagination::resolve(&page), None);
    }

    #[test]
    fn test_malformed_control_invalidates_all() {
        let page = ParsedPage::parse(
            r#"<a class="pageNum" href="/a-Reviews-or5-x.html">2</a>
               <a class="pageNum" href="/a-Reviews-or10-x.html">next</a>"#,
        );
        assert_eq!(pagination::resolve(&page), None);

        let page = ParsedPage::parse(
            r#"<a class="pageNum" href="/a-Reviews-or5-x.html">2</a>
               <a class="pageNum">3</a>"#,
        );
        assert_eq!(pagination::resolve(&page), None);
    }

    #[test]
    fn test_controls_are_sorted_by_page_index() {
        let links = vec![
            PageLink::new("/h-Reviews-or30-x.html", 7),
            PageLink::new("/h-Reviews-or5-x.html", 2),
            PageLink::new("/h-Reviews-or10-x.html", 3),
        ];
        assert_eq!(
            pagination::complete(links),
            vec![
                "/h-Reviews-or5-x.html",
                "/h-Reviews-or10-x.html",
                "/h-Reviews-or30-x.html",
                "/h-Reviews-or15-x.html",
                "/h-Reviews-or20-x.html",
                "/h-Reviews-or25-x.html",
            ]
        );
    }

    #[test]
    fn test_template_without_offset_token_is_copied() {
        // Page 1 URLs carry no offset token, so the heuristic repeats them
        let links = vec![
            PageLink::new("/h-Reviews-x.html", 1),
            PageLink::new("/h-Reviews-or5-x.html", 2),
            PageLink::new("/h-Reviews-or20-x.html", 5),
        ];
        let urls = pagination::complete(links);
        assert_eq!(urls.len(), 5);
        assert_eq!(urls[3], "/h-Reviews-x.html");
        assert_eq!(urls[4], "/h-Reviews-x.html");
    }

    #[test]
    fn test_out_of_range_labels_keep_known_links() {
        let page = ParsedPage::parse(&paginated_page(&[1, i64::MAX]));
        assert_eq!(pagination::resolve(&page).unwrap().len(), 2);

        let links = vec![
            PageLink::new("/h-Reviews-or0-x.html", i64::MIN),
            PageLink::new("/h-Reviews-or5-x.html", i64::MAX),
        ];
        assert_eq!(pagination::complete(links).len(), 2);
    }

    #[test]
    fn test_oversized_gap_is_not_synthesized() {
        let links = vec![
            PageLink::new("/h-Reviews-x.html", 1),
            PageLink::new("/h-Reviews-or5-x.html", 2),
            PageLink::new("/h-Reviews-or499999995-x.html", 100_000_000),
        ];
        assert_eq!(pagination::complete(links).len(), 3);

        let limit = pagination::MAX_SYNTHESIZED_PAGES;
        let links = vec![
            PageLink::new("/h-Reviews-or5-x.html", 2),
            PageLink::new("/h-Reviews-or10-x.html", 3 + limit),
        ];
        assert_eq!(pagination::complete(links).len() as i64, 2 + limit);
    }

    #[test]
    fn test_text_whitespace_around_page_number() {
        let page = ParsedPage::parse(r#"<a class="pageNum" href="/h-Reviews-or5-x.html"> 2 </a>"#);
        assert_eq!(
            pagination::collect_page_links(&page),
            Some(vec![PageLink::new("/h-Reviews-or5-x.html", 2)])
        );
    }
}
