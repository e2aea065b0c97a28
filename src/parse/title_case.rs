/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-letter starts a new word, so `"l'eau"` becomes `"L'Eau"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}
