use scraper::{ElementRef, Selector};

use super::remove_excess_whitespace;

/// Text of the first element matching `selector` below `element`, or `None`
/// when nothing matches.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element.select(selector).next().map(get_inner_text)
}

/// All text nodes under `element`, joined, trimmed and whitespace-collapsed.
pub fn get_inner_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    remove_excess_whitespace(joined.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_joins_nested_text_nodes() {
        let doc = Html::parse_fragment(
            r#"<h3 class="title">  Lundi <span>14</span>
                  avril </h3>"#,
        );
        let selector = Selector::parse(".title").unwrap();
        assert_eq!(
            text_from_selection(&selector, doc.root_element()).as_deref(),
            Some("Lundi 14 avril")
        );
    }

    #[test]
    fn test_missing_element() {
        let doc = Html::parse_fragment("<div></div>");
        let selector = Selector::parse(".title").unwrap();
        assert_eq!(text_from_selection(&selector, doc.root_element()), None);
    }
}
