use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Collapses every whitespace run (newlines and non-breaking spaces included)
/// into a single space.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_newlines_and_nbsp() {
        assert_eq!(
            remove_excess_whitespace("Poulet\n      basquaise\u{a0}\u{a0}maison"),
            "Poulet basquaise maison"
        );
    }

    #[test]
    fn test_untouched_text_is_borrowed() {
        assert!(matches!(
            remove_excess_whitespace("Riz pilaf"),
            Cow::Borrowed("Riz pilaf")
        ));
    }
}
