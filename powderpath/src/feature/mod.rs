//! GeoJSON feature model.
//!
//! Features returned by lookup services are kept mostly opaque: only the
//! identifier is interpreted, everything else is carried through unchanged so
//! the written collection matches what the service returned.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// GeoJSON `type` tag for a single feature.
pub const FEATURE_TYPE: &str = "Feature";

/// GeoJSON `type` tag for a feature collection.
pub const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";

/// Unique identifier of a feature.
///
/// Mapbox vector tiles use integer ids; other sources and test fixtures use
/// strings. Two features are the same feature exactly when their ids are equal.
/// Any other JSON number lands in `Decimal` and is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(u64),
    Signed(i64),
    Decimal(Number),
    Text(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{}", n),
            FeatureId::Signed(n) => write!(f, "{}", n),
            FeatureId::Decimal(n) => write!(f, "{}", n),
            FeatureId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for FeatureId {
    fn from(n: u64) -> Self {
        FeatureId::Number(n)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId::Text(s.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(s: String) -> Self {
        FeatureId::Text(s)
    }
}

/// A single geometric record with identifier, geometry and properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Always `"Feature"`
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    /// Identifier; the only field used for deduplication
    pub id: FeatureId,
    /// GeoJSON geometry object, kept as-is
    #[serde(default)]
    pub geometry: Value,
    /// Free-form properties, kept as-is; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    /// Any other members the source attached
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_type() -> String {
    FEATURE_TYPE.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Map<String, Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Feature {
    /// Creates a feature with the given id, geometry and properties.
    pub fn new(id: impl Into<FeatureId>, geometry: Value, properties: Map<String, Value>) -> Self {
        Self {
            kind: feature_type(),
            id: id.into(),
            geometry,
            properties,
            extra: Map::new(),
        }
    }

    /// Creates a GeoJSON Point feature at `(lon, lat)`.
    pub fn point(id: impl Into<FeatureId>, lon: f64, lat: f64) -> Self {
        Self::new(
            id,
            serde_json::json!({ "type": "Point", "coordinates": [lon, lat] }),
            Map::new(),
        )
    }

    /// Adds a property, returning the updated feature.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An ordered list of features tagged as a GeoJSON FeatureCollection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from features, preserving their order.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FEATURE_COLLECTION_TYPE.to_string(),
            features,
        }
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}
