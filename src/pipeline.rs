use thiserror::Error;
use tracing::info;

use crate::config::ScrapeConfig;
use crate::formatter::{self, FormatError};
use crate::http_client::{FetchError, HttpClient};
use crate::parser::{self, ParseError};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("format failed: {0}")]
    Format(#[from] FormatError),
}

/// Parse, select and format over an already fetched document. No I/O.
pub fn extract_links(html: &[u8], config: &ScrapeConfig) -> Result<Vec<String>, ScrapeError> {
    let anchors = parser::select_anchors(html, &config.link_query)?;
    info!(matched = anchors.len(), "selected anchors");

    let links = formatter::format_links(&config.base_url, &anchors)?;
    info!(links = links.len(), "formatted links");

    Ok(links)
}

/// Fetches `config.page_url` once and extracts its links.
pub async fn run(config: &ScrapeConfig) -> Result<Vec<String>, ScrapeError> {
    let client = HttpClient::new(config)?;
    let page = client.fetch(&config.page_url).await?;
    info!(status = page.status, "parsing fetched page");
    extract_links(&page.body, config)
}
