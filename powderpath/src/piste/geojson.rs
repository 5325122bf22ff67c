//! Piste export as GeoJSON.

use serde_json::{json, Map, Value};

use super::model::Piste;
use crate::feature::{Feature, FeatureCollection};

/// Converts a piste to a LineString feature.
///
/// Returns `None` for pistes with fewer than two positions, which cannot
/// form a line.
pub fn piste_to_feature(piste: &Piste) -> Option<Feature> {
    if piste.coordinates.len() < 2 {
        return None;
    }

    let coordinates: Vec<[f64; 2]> = piste.coordinates.iter().map(|p| [p.lon, p.lat]).collect();

    let mut properties = Map::new();
    properties.insert("difficulty".to_string(), Value::from(piste.difficulty()));
    properties.insert("piste_type".to_string(), Value::from(piste.piste_type()));
    properties.insert("color".to_string(), Value::from(piste.color().as_str()));
    properties.insert("tags".to_string(), json!(piste.tags));

    Some(Feature::new(
        piste.id,
        json!({ "type": "LineString", "coordinates": coordinates }),
        properties,
    ))
}

/// Collects every drawable piste into a FeatureCollection.
pub fn pistes_to_feature_collection(pistes: &[Piste]) -> FeatureCollection {
    pistes.iter().filter_map(piste_to_feature).collect::<Vec<_>>().into()
}
