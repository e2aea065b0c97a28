use scraper::Selector;

/// Compiles a selector written in the source. These are literals, so a
/// parse failure is a bug in the crate and panics on first use.
pub(super) fn compile(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid static selector {selector:?}: {e:?}"))
}

/// Declares a `LazyLock<Selector>` static, compiled the first time it is used.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| $crate::parse::static_selector::compile($sel));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_static_selector_matches() {
        crate::static_selector!(TITLE_SELECTOR <- ".menuCategroyTitle, .menuCategoryTitle");
        let doc = Html::parse_fragment(
            r#"<h3 class="menuCategroyTitle">Lundi 14 Avril</h3>
               <h3 class="menuCategoryTitle">Mardi 15 Avril</h3>
               <h3 class="menuItemName">Couscous</h3>"#,
        );
        assert_eq!(doc.root_element().select(&TITLE_SELECTOR).count(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid static selector")]
    fn test_invalid_selector_panics() {
        compile("div[");
    }
}
