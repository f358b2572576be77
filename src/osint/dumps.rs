// src/osint/dumps.rs
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;

use crate::config::DumpSearchConfig;
use crate::error::PwnFinderResult;
use crate::utils::http::HttpClient;

use super::sources::DumpSource;

/// Rows of the results table on the dump search page
const RESULT_ROWS: &str = "#myTable tr";

/// Return the `href` of the first link in the first data row of `#myTable`.
///
/// The first row is the table header. A missing table, data row, link or
/// `href` (or an empty `href`) all give `None`.
pub fn extract_first_dump_link(document: &Html) -> Option<String> {
    let row_selector = Selector::parse(RESULT_ROWS).ok()?;
    let link_selector = Selector::parse("a").ok()?;

    let row = document.select(&row_selector).nth(1)?;
    let href = row.select(&link_selector).next()?.value().attr("href")?;

    if href.is_empty() {
        None
    } else {
        Some(href.to_string())
    }
}

/// Parse an HTML body and extract the first dump link
pub fn extract_first_dump_link_from_str(html: &str) -> Option<String> {
    extract_first_dump_link(&Html::parse_document(html))
}

/// Scrapes the dump search page for a breach's short name
pub struct DumpLocator {
    http: HttpClient,
    config: DumpSearchConfig,
}

impl DumpLocator {
    pub fn new(http: HttpClient, config: DumpSearchConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl DumpSource for DumpLocator {
    async fn locate_dump(&self, short_name: &str) -> PwnFinderResult<Option<String>> {
        let response = self.http.get(&self.config.url, &[], &[("for", short_name)]).await?;
        let response = HttpClient::ensure_success(response)?;
        let body = HttpClient::text(response).await?;

        // `Html` is not `Send`, so keep it out of scope across awaits
        let link = extract_first_dump_link_from_str(&body);

        match &link {
            Some(url) => debug!("Found dump for {}: {}", short_name, url),
            None => debug!("No dump listed for {}", short_name),
        }

        Ok(link)
    }
}
