// src/osint/breach.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::form_urlencoded;

use crate::config::BreachApiConfig;
use crate::core::target::BreachRecord;
use crate::error::{PwnFinderError, PwnFinderResult};
use crate::utils::http::HttpClient;

use super::sources::BreachSource;

/// Breach entry as returned by the breach API. Unlisted fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiBreach {
    #[serde(default)]
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    is_verified: bool,
}

impl From<ApiBreach> for BreachRecord {
    fn from(entry: ApiBreach) -> Self {
        BreachRecord::new(&entry.name, &entry.title, entry.is_verified)
    }
}

/// Client for the breached-account endpoint of the breach API
pub struct BreachLookupClient {
    http: HttpClient,
    config: BreachApiConfig,
}

impl BreachLookupClient {
    pub fn new(http: HttpClient, config: BreachApiConfig) -> Self {
        Self { http, config }
    }

    /// Build the lookup URL for an identifier
    pub fn account_url(&self, identifier: &str) -> String {
        let escaped: String = form_urlencoded::byte_serialize(identifier.as_bytes()).collect();
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), escaped)
    }
}

/// Parse a breach API body. An empty body means "not breached".
pub fn parse_breaches(body: &str) -> PwnFinderResult<Vec<BreachRecord>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<ApiBreach> = serde_json::from_str(body)
        .map_err(|e| PwnFinderError::SerializationError(format!("Invalid breach response: {}", e)))?;

    Ok(entries.into_iter().map(BreachRecord::from).collect())
}

#[async_trait]
impl BreachSource for BreachLookupClient {
    async fn fetch_breaches(&self, identifier: &str) -> PwnFinderResult<Vec<BreachRecord>> {
        let url = self.account_url(identifier);
        let truncate = self.config.truncate_response.to_string();

        let response = self.http.get(
            &url,
            &[("api-version", self.config.api_version.as_str())],
            &[("truncateResponse", truncate.as_str())],
        ).await?;

        // The API answers 404 for accounts it has never seen
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No breach entry for {}", identifier);
            return Ok(Vec::new());
        }

        let response = HttpClient::ensure_success(response)?;
        let body = HttpClient::text(response).await?;
        let breaches = parse_breaches(&body)?;

        debug!("Breach API returned {} records for {}", breaches.len(), identifier);
        Ok(breaches)
    }
}
