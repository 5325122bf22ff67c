//! Error types for the piste module.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors loading pistes from Overpass.
#[derive(Debug, Error)]
pub enum PisteError {
    /// The Overpass request failed.
    #[error("Overpass request failed: {0}")]
    Upstream(#[from] ProviderError),

    /// The response was not the expected Overpass JSON.
    #[error("Malformed Overpass response: {0}")]
    Malformed(#[from] serde_json::Error),
}
