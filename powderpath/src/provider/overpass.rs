//! Overpass API client.
//!
//! Sends Overpass QL queries to an interpreter endpoint as
//! `GET {url}?data={query}` and hands back the raw response body. Turning that
//! body into pistes is the job of [`crate::piste`].

use crate::provider::{AsyncHttpClient, ProviderError};
use tracing::debug;

/// Public Overpass interpreter.
pub const DEFAULT_OVERPASS_URL: &str = "http://overpass-api.de/api/interpreter";

/// Overpass interpreter client.
#[derive(Clone)]
pub struct OverpassClient<C: AsyncHttpClient> {
    http_client: C,
    url: String,
}

impl<C: AsyncHttpClient> OverpassClient<C> {
    /// Creates a client for the public interpreter.
    pub fn new(http_client: C) -> Self {
        Self::with_url(http_client, DEFAULT_OVERPASS_URL)
    }

    /// Creates a client for a specific interpreter URL.
    pub fn with_url(http_client: C, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }

    /// Returns the interpreter URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Builds the request URL with the query form-encoded in `data`.
    fn build_url(&self, query: &str) -> Result<String, ProviderError> {
        reqwest::Url::parse_with_params(&self.url, &[("data", query)])
            .map(String::from)
            .map_err(|e| {
                ProviderError::ProviderSpecific(format!(
                    "Invalid Overpass URL '{}': {}",
                    self.url, e
                ))
            })
    }

    /// Runs an Overpass QL query and returns the raw response body.
    pub async fn run(&self, query: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.build_url(query)?;
        debug!(url = %self.url, query_len = query.len(), "Running Overpass query");
        self.http_client.get(&url).await
    }
}
