use std::fmt::Display;

/// Problems with a single menu category block. The block is dropped, the
/// rest of the page is still used.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    DateParse(String),
    CountMismatch { names: usize, prices: usize },
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub fn date_parse_error(title: &str) -> Self {
        Self::DateParse(title.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::DateParse(title) => write!(f, "Date Parse Error: no date in {title:?}"),
            Self::CountMismatch { names, prices } => write!(
                f,
                "Count Mismatch Error: {names} dish name(s) for {prices} price(s)"
            ),
        }
    }
}

impl std::error::Error for Error {}
