//! Mapbox Tilequery point-of-interest provider.
//!
//! Looks up vector-tile features near a point via the Tilequery API.
//! Requires a Mapbox access token.
//!
//! # URL Pattern
//!
//! `https://api.mapbox.com/v4/{tileset}/tilequery/{lon},{lat}.json?radius={r}&limit={n}&layers={layers}&access_token={token}`
//!
//! - Coordinates are longitude first
//! - `radius` is in meters, capped at 50 by the API
//! - `limit` caps the features returned, also at most 50
//! - The response is a GeoJSON FeatureCollection
//!
//! Features returned without an `id` cannot be told apart from each other
//! and are dropped.

use serde_json::Value;
use tracing::{debug, warn};

use crate::coord::SamplePoint;
use crate::feature::{Feature, FEATURE_COLLECTION_TYPE};
use crate::provider::{AsyncHttpClient, PoiProvider, ProviderError};

/// Base URL for the Mapbox v4 API.
pub const TILEQUERY_BASE_URL: &str = "https://api.mapbox.com/v4";

/// Default tileset: Mapbox Streets v8.
pub const DEFAULT_TILESET: &str = "mapbox.mapbox-streets-v8";

/// Default layer list: points of interest only.
pub const DEFAULT_LAYERS: &str = "poi_label";

/// Largest radius in meters accepted by Tilequery.
pub const MAX_RADIUS: f64 = 50.0;

/// Largest result limit accepted by Tilequery.
pub const MAX_LIMIT: u32 = 50;

/// Mapbox Tilequery provider.
///
/// # Example
///
/// ```ignore
/// use powderpath::provider::{AsyncReqwestClient, TilequeryProvider};
///
/// let client = AsyncReqwestClient::new()?;
/// let provider = TilequeryProvider::new(client, "pk.your_token");
/// // Drive it with sweep::collect...
/// ```
pub struct TilequeryProvider<C: AsyncHttpClient> {
    http_client: C,
    access_token: String,
    tileset: String,
    layers: String,
}

impl<C: AsyncHttpClient> TilequeryProvider<C> {
    /// Creates a provider for the default tileset and layers.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `access_token` - Mapbox access token
    pub fn new(http_client: C, access_token: impl Into<String>) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            tileset: DEFAULT_TILESET.to_string(),
            layers: DEFAULT_LAYERS.to_string(),
        }
    }

    /// Queries a different tileset.
    pub fn with_tileset(mut self, tileset: impl Into<String>) -> Self {
        self.tileset = tileset.into();
        self
    }

    /// Restricts results to a comma-separated layer list.
    pub fn with_layers(mut self, layers: impl Into<String>) -> Self {
        self.layers = layers.into();
        self
    }

    /// Returns the configured tileset id.
    pub fn tileset(&self) -> &str {
        &self.tileset
    }

    /// Returns the configured layer list.
    pub fn layers(&self) -> &str {
        &self.layers
    }

    /// Builds the Tilequery URL for a point.
    ///
    /// The tileset becomes a path segment and every query value is
    /// form-encoded.
    fn build_url(
        &self,
        point: SamplePoint,
        radius: f64,
        limit: u32,
    ) -> Result<String, ProviderError> {
        let mut url = reqwest::Url::parse(TILEQUERY_BASE_URL).map_err(|e| {
            ProviderError::ProviderSpecific(format!("Invalid Tilequery base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::ProviderSpecific("Tilequery base URL cannot take a path".to_string())
            })?
            .push(&self.tileset)
            .push("tilequery")
            .push(&format!("{},{}.json", point.lon, point.lat));

        url.query_pairs_mut()
            .append_pair("radius", &radius.to_string())
            .append_pair("limit", &limit.to_string())
            .append_pair("layers", &self.layers)
            .append_pair("access_token", &self.access_token);

        Ok(url.into())
    }
}

impl<C: AsyncHttpClient> PoiProvider for TilequeryProvider<C> {
    async fn query(
        &self,
        point: SamplePoint,
        radius: f64,
        limit: u32,
    ) -> Result<Vec<Feature>, ProviderError> {
        self.check_params(radius, limit)?;

        let url = self.build_url(point, radius, limit)?;
        let body = self.http_client.get(&url).await?;
        parse_features(&body)
    }

    fn name(&self) -> &str {
        "Mapbox Tilequery"
    }

    fn max_radius(&self) -> f64 {
        MAX_RADIUS
    }

    fn max_limit(&self) -> u32 {
        MAX_LIMIT
    }
}

/// Parses a Tilequery response body into features.
///
/// The body must be a JSON object. A `features` array is required unless the
/// object is an empty `FeatureCollection` without one. A feature that has no
/// id, or whose members cannot be read, is skipped without affecting the rest.
pub fn parse_features(body: &[u8]) -> Result<Vec<Feature>, ProviderError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Malformed JSON: {}", e)))?;

    let Value::Object(mut root) = value else {
        return Err(ProviderError::InvalidResponse(
            "Expected a JSON object".to_string(),
        ));
    };

    let raw_features = match root.remove("features") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ProviderError::InvalidResponse(
                "'features' is not an array".to_string(),
            ))
        }
        None if root.get("type").and_then(Value::as_str) == Some(FEATURE_COLLECTION_TYPE) => {
            Vec::new()
        }
        None => {
            return Err(ProviderError::InvalidResponse(
                "Missing 'features' member".to_string(),
            ))
        }
    };

    let mut features = Vec::with_capacity(raw_features.len());
    for raw in raw_features {
        if raw.get("id").map_or(true, Value::is_null) {
            let properties = raw.get("properties").cloned().unwrap_or_default();
            debug!(properties = %properties, "Skipping feature without id");
            continue;
        }
        match serde_json::from_value::<Feature>(raw) {
            Ok(feature) => features.push(feature),
            Err(e) => warn!(error = %e, "Skipping unreadable feature"),
        }
    }

    Ok(features)
}
