//! HTTP client abstraction for testability

use super::types::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
///
/// Overpass and Mapbox both ask clients to identify themselves.
const DEFAULT_USER_AGENT: &str = concat!("powderpath/", env!("CARGO_PKG_VERSION"));

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create async HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let safe_url = redact_url(url);
        trace!(url = %safe_url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = %safe_url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                let is_connect = e.is_connect();
                let is_timeout = e.is_timeout();
                let e = e.without_url();
                warn!(
                    url = %safe_url,
                    error = %e,
                    is_connect,
                    is_timeout,
                    "HTTP request failed"
                );
                return Err(ProviderError::HttpError(format!("Request failed: {}", e)));
            }
        };

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            warn!(url = %safe_url, status = status.as_u16(), "HTTP error status");
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: safe_url,
            });
        }

        // Read response body
        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = %safe_url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                let e = e.without_url();
                warn!(url = %safe_url, error = %e, "Failed to read response body");
                Err(ProviderError::HttpError(format!("Failed to read response: {}", e)))
            }
        }
    }
}

/// Replaces the value of any `access_token` query parameter with `***`.
///
/// Used before URLs reach logs or error messages.
pub fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let params: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("access_token", _)) => "access_token=***".to_string(),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, params.join("&"))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Mock async HTTP client for testing
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, ProviderError> {
            self.response.clone()
        }
    }

    /// Mock client that records requested URLs and replays queued responses.
    ///
    /// Falls back to an empty body once the queue is drained.
    #[derive(Clone, Default)]
    pub struct RecordingHttpClient {
        pub urls: Arc<Mutex<Vec<String>>>,
        pub responses: Arc<Mutex<VecDeque<Result<Vec<u8>, ProviderError>>>>,
    }

    impl RecordingHttpClient {
        pub fn with_responses(responses: Vec<Result<Vec<u8>, ProviderError>>) -> Self {
            Self {
                urls: Arc::default(),
                responses: Arc::new(Mutex::new(responses.into())),
            }
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for RecordingHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.urls.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient {
            response: Ok(vec![1, 2, 3, 4]),
        };

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let mock = MockAsyncHttpClient {
            response: Err(ProviderError::HttpError("Test error".to_string())),
        };

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_recording_client_replays_in_order() {
        let mock = RecordingHttpClient::with_responses(vec![
            Ok(b"first".to_vec()),
            Err(ProviderError::HttpError("boom".to_string())),
        ]);

        assert_eq!(mock.get("http://a").await.unwrap(), b"first");
        assert!(mock.get("http://b").await.is_err());
        assert!(mock.get("http://c").await.unwrap().is_empty());
        assert_eq!(mock.requested_urls(), vec!["http://a", "http://b", "http://c"]);
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::new().is_ok());
        assert!(AsyncReqwestClient::with_timeout(5).is_ok());
    }

    #[test]
    fn test_redact_url_hides_token() {
        let url = "https://api.mapbox.com/v4/x/tilequery/1,2.json?radius=25&access_token=pk.secret&layers=poi_label";
        assert_eq!(
            redact_url(url),
            "https://api.mapbox.com/v4/x/tilequery/1,2.json?radius=25&access_token=***&layers=poi_label"
        );
    }

    #[test]
    fn test_redact_url_without_query() {
        assert_eq!(redact_url("http://example.com/a"), "http://example.com/a");
    }

    #[test]
    fn test_error_classification() {
        let rate_limited = ProviderError::HttpStatus {
            status: 429,
            url: "u".to_string(),
        };
        assert!(rate_limited.is_retryable());

        let server = ProviderError::HttpStatus {
            status: 503,
            url: "u".to_string(),
        };
        assert!(server.is_retryable());

        let unauthorized = ProviderError::HttpStatus {
            status: 401,
            url: "u".to_string(),
        };
        assert!(!unauthorized.is_retryable());

        assert!(ProviderError::HttpError("reset".to_string()).is_retryable());
        assert!(!ProviderError::InvalidResponse("bad".to_string()).is_retryable());
    }
}
