//! Provider types and traits

use std::fmt;
use std::future::Future;

use crate::coord::SamplePoint;
use crate::feature::Feature;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request could not be sent or the body could not be read
    HttpError(String),
    /// Server answered with a non-success status
    HttpStatus { status: u16, url: String },
    /// Query radius outside what the provider accepts
    UnsupportedRadius { radius: f64, max: f64 },
    /// Result limit outside what the provider accepts
    UnsupportedLimit { limit: u32, max: u32 },
    /// Invalid response data from provider
    InvalidResponse(String),
    /// Provider-specific error
    ProviderSpecific(String),
}

impl ProviderError {
    /// Whether retrying the same request later could succeed.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// retryable; client errors and malformed payloads are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::HttpError(_) => true,
            ProviderError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::HttpStatus { status, url } => {
                write!(f, "HTTP {} from {}", status, url)
            }
            ProviderError::UnsupportedRadius { radius, max } => {
                write!(
                    f,
                    "Radius {} not supported by provider (must be > 0 and <= {})",
                    radius, max
                )
            }
            ProviderError::UnsupportedLimit { limit, max } => {
                write!(
                    f,
                    "Limit {} not supported by provider (must be between 1 and {})",
                    limit, max
                )
            }
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ProviderError::ProviderSpecific(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for point-of-interest lookup services.
///
/// Given a point, a search radius and a result cap, an implementation returns
/// the features near that point. This is the query capability driven by a
/// grid sweep.
pub trait PoiProvider: Send + Sync {
    /// Looks up features around a point.
    ///
    /// # Arguments
    ///
    /// * `point` - Center of the lookup
    /// * `radius` - Search radius in meters
    /// * `limit` - Maximum number of features to return
    ///
    /// # Returns
    ///
    /// The features found (possibly none) or an error.
    fn query(
        &self,
        point: SamplePoint,
        radius: f64,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Feature>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the largest search radius in meters the provider accepts.
    fn max_radius(&self) -> f64;

    /// Returns the largest result limit the provider accepts.
    fn max_limit(&self) -> u32;

    /// Checks radius and limit against the provider's bounds.
    fn check_params(&self, radius: f64, limit: u32) -> Result<(), ProviderError> {
        if !radius.is_finite() || radius <= 0.0 || radius > self.max_radius() {
            return Err(ProviderError::UnsupportedRadius {
                radius,
                max: self.max_radius(),
            });
        }
        if limit == 0 || limit > self.max_limit() {
            return Err(ProviderError::UnsupportedLimit {
                limit,
                max: self.max_limit(),
            });
        }
        Ok(())
    }
}
