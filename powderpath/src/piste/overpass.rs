//! Overpass query construction and response parsing.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::error::PisteError;
use super::model::{Piste, TYPE_TAG};
use crate::coord::{BoundingBox, SamplePoint};

/// Builds the Overpass QL query for every piste way in `area`.
///
/// Overpass boxes are `(south, west, north, east)`. `>;` pulls in the
/// member nodes so the ways can be resolved to positions.
pub fn piste_query(area: &BoundingBox) -> String {
    format!(
        "[out:json];\n(\n  way[\"{}\"]({}, {}, {}, {});\n);\nout body;\n>;\nout skel qt;",
        TYPE_TAG, area.min_lat, area.min_lon, area.max_lat, area.max_lon
    )
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Element {
    Node {
        id: u64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: u64,
        #[serde(default)]
        nodes: Vec<u64>,
        tags: Option<BTreeMap<String, String>>,
    },
    #[serde(other)]
    Other,
}

/// Parses an Overpass JSON body into pistes.
///
/// Ways without tags are skipped. Node references that do not resolve to a
/// node in the same response are dropped; the remaining positions keep way
/// order.
pub fn parse_pistes(body: &[u8]) -> Result<Vec<Piste>, PisteError> {
    let response: OverpassResponse = serde_json::from_slice(body)?;

    let nodes: HashMap<u64, SamplePoint> = response
        .elements
        .iter()
        .filter_map(|element| match element {
            Element::Node { id, lat, lon } => Some((*id, SamplePoint::new(*lon, *lat))),
            _ => None,
        })
        .collect();

    let pistes = response
        .elements
        .into_iter()
        .filter_map(|element| match element {
            Element::Way {
                id,
                nodes: refs,
                tags: Some(tags),
            } => Some(Piste {
                id,
                coordinates: refs.iter().filter_map(|r| nodes.get(r).copied()).collect(),
                tags,
            }),
            _ => None,
        })
        .collect();

    Ok(pistes)
}
