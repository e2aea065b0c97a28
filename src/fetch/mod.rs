use std::time::Instant;

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

use crate::config::{Config, Source};

pub fn make_client(config: &Config) -> Result<Client, RequestError> {
    Client::builder()
        .default_headers(config.headers.clone())
        .gzip(true)
        .build()
}

/// Single GET of the menu page. Non-success statuses are errors. The body is
/// decoded with the charset named by the response, UTF-8 by default.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    let start = Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

/// Text of the menu page from whichever source the config names. Saved
/// pages are read as UTF-8.
pub async fn load(config: &Config) -> crate::Result<String> {
    match &config.source {
        Source::Url(url) => {
            let client = make_client(config)?;
            Ok(menu_page(&client, url).await?)
        }
        Source::File(path) => {
            log::debug!("Reading menu page from {}", path.display());
            let bytes = tokio::fs::read(path).await?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
