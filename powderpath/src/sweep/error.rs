//! Error types for the sweep module.

use thiserror::Error;

use crate::coord::CoordError;
use crate::provider::ProviderError;

/// Errors that end a sweep.
///
/// A failure at a single point is never one of these; it is logged and
/// counted in [`super::SweepResult::failed_count`].
#[derive(Debug, Error)]
pub enum SweepError {
    /// Bounding box or step cannot produce a lattice.
    #[error("Invalid sweep grid: {0}")]
    InvalidGrid(#[from] CoordError),

    /// Radius or limit rejected by the provider before any query.
    #[error("Invalid query parameters for {provider}: {source}")]
    InvalidQuery {
        provider: String,
        source: ProviderError,
    },

    /// Too many points failed in a row.
    #[error(
        "Query service unreachable: {failures} consecutive points failed after {query_count} queries (last error: {last_error})"
    )]
    ServiceUnreachable {
        failures: u32,
        query_count: usize,
        last_error: ProviderError,
    },
}
