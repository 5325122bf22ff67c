//! Remote data provider abstraction
//!
//! This module provides the HTTP client seam and the two upstream services
//! the tools talk to: Mapbox Tilequery for points of interest and the
//! Overpass API for ski pistes.
//!
//! ```ignore
//! use powderpath::provider::{AsyncReqwestClient, TilequeryProvider};
//!
//! let http_client = AsyncReqwestClient::new()?;
//! let provider = TilequeryProvider::new(http_client, token);
//! ```

mod http;
mod overpass;
mod tilequery;
mod types;

pub use http::{redact_url, AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use overpass::{OverpassClient, DEFAULT_OVERPASS_URL};
pub use tilequery::{
    parse_features, TilequeryProvider, DEFAULT_LAYERS, DEFAULT_TILESET, MAX_LIMIT, MAX_RADIUS,
};
pub use types::{PoiProvider, ProviderError};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RecordingHttpClient};
