//! Star ratings encoded in CSS class names.
//!
//! The site renders a rating as `<span class="ui_bubble_rating bubble_NN">`
//! where `NN` is the rating times [`BUBBLE_GRANULARITY`], e.g. `bubble_40`
//! for four stars. Half-star classes are truncated, so `bubble_45` reads as
//! four. Any other shape decodes to [`Numeric::NotANumber`].

use crate::results::Numeric;
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// Factor between the embedded class number and the star value
pub const BUBBLE_GRANULARITY: i64 = 10;

static BUBBLE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ui_bubble_rating bubble_(\d+)").expect("static regex must compile")
});

/// Decodes the first bubble class found in `markup`
pub fn decode(markup: &str) -> Numeric {
    BUBBLE_CLASS
        .captures(markup)
        .and_then(|c| c[1].parse::<i64>().ok())
        .map(|n| n / BUBBLE_GRANULARITY)
        .into()
}

/// Decodes the first bubble anywhere inside `node`, the node itself included
pub fn star_value(node: ElementRef<'_>) -> Numeric {
    decode(&node.html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::ParsedPage;
    use scraper::Selector;

    #[test]
    fn test_overall_bubble_inside_review() {
        let page = ParsedPage::parse(
            r#"<div id="r"><div class="nf9vGX55"><span class="ui_bubble_rating bubble_40"></span></div></div>"#,
        );
        let sel = Selector::parse("div#r").unwrap();
        let node = page.root().select(&sel).next().unwrap();
        assert_eq!(star_value(node), Numeric::Value(4));
    }

    #[test]
    fn test_category_bubble_before_label() {
        let page = ParsedPage::parse(
            r#"<div class="_3ErKuh24 _1OrVnQ-J"><span class="ui_bubble_rating bubble_50"></span>Location</div>"#,
        );
        let sel = Selector::parse("div._3ErKuh24").unwrap();
        let node = page.root().select(&sel).next().unwrap();
        assert_eq!(star_value(node), Numeric::Value(5));
    }

    #[test]
    fn test_first_bubble_wins() {
        let markup = r#"<span class="ui_bubble_rating bubble_30"></span><span class="ui_bubble_rating bubble_50"></span>"#;
        assert_eq!(decode(markup), Numeric::Value(3));
    }

    #[test]
    fn test_half_stars_are_truncated() {
        assert_eq!(
            decode(r#"<span class="ui_bubble_rating bubble_45"></span>"#),
            Numeric::Value(4)
        );
        assert_eq!(
            decode(r#"<span class="ui_bubble_rating bubble_05"></span>"#),
            Numeric::Value(0)
        );
    }

    #[test]
    fn test_unknown_shapes_are_not_a_number() {
        assert!(decode("").is_nan());
        assert!(decode(r#"<span class="ui_bubble_rating"></span>"#).is_nan());
        assert!(decode(r#"<span class="bubble_50 ui_bubble_rating"></span>"#).is_nan());
        assert!(decode("ui_bubble_rating bubble_99999999999999999999999").is_nan());
    }
}
