pub mod consts;

use std::path::PathBuf;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// Where the menu page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    /// A saved copy of the page, read from disk instead of the network.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Width of the separator lines; dish names are padded to `width - 9`.
    pub width: usize,
    pub color: bool,
    pub highlight_start: String,
    pub highlight_end: String,
    pub sides_header: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: consts::BASE_WIDTH,
            color: true,
            highlight_start: consts::HIGHLIGHT_START.to_owned(),
            highlight_end: consts::HIGHLIGHT_END.to_owned(),
            sides_header: consts::SIDES_HEADER.to_owned(),
        }
    }
}

impl Style {
    /// Start and end codes wrapped around a line of the given day.
    #[must_use]
    pub fn highlight(&self, is_today: bool) -> (&str, &str) {
        if is_today && self.color {
            (self.highlight_start.as_str(), self.highlight_end.as_str())
        } else {
            ("", "")
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub headers: HeaderMap,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        let url = Url::parse(consts::URL).expect("default menu url should be valid");
        Self {
            source: Source::Url(url),
            headers: browser_headers(),
            style: Style::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.style.color = color;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.style.width = width;
        self
    }
}

// Accept-Encoding and Host are left to reqwest so gzip bodies still get decoded.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(consts::ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(consts::ACCEPT_LANGUAGE),
    );
    headers.insert(HeaderName::from_static("dnt"), HeaderValue::from_static("1"));
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers
}
