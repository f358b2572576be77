// src/utils/http.rs
use std::time::Duration;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::{PwnFinderError, PwnFinderResult};

/// HTTP client for making requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> PwnFinderResult<Self> {
        let mut builder = Client::builder().user_agent(user_agent);

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| PwnFinderError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// Create a client from the global settings
    pub fn from_config(config: &GlobalConfig) -> PwnFinderResult<Self> {
        Self::new(&config.user_agent, config.timeout_seconds)
    }

    /// Make a GET request with extra headers and query parameters
    pub async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> PwnFinderResult<Response> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        request
            .send()
            .await
            .map_err(|e| PwnFinderError::NetworkError(format!("Failed to GET {}: {}", url, e)))
    }

    /// Read a response body as text
    pub async fn text(response: Response) -> PwnFinderResult<String> {
        let url = response.url().to_string();
        response
            .text()
            .await
            .map_err(|e| PwnFinderError::NetworkError(format!("Failed to read body from {}: {}", url, e)))
    }

    /// Turn a non-success response into an error
    pub fn ensure_success(response: Response) -> PwnFinderResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(status_error(&response, status))
        }
    }

    /// Get the user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn status_error(response: &Response, status: StatusCode) -> PwnFinderError {
    PwnFinderError::HttpStatus {
        url: response.url().to_string(),
        status: status.as_u16(),
    }
}
