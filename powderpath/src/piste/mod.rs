//! Ski piste map.
//!
//! Fetches piste ways from Overpass, colors them by difficulty and serves
//! them as an interactive Leaflet map (`GET /`) or as GeoJSON
//! (`GET /pistes.geojson`).

mod error;
mod geojson;
mod model;
mod overpass;
mod render;
mod server;

pub use error::PisteError;
pub use geojson::{piste_to_feature, pistes_to_feature_collection};
pub use model::{capitalize, Piste, PisteColor, DIFFICULTY_TAG, TYPE_TAG};
pub use overpass::{parse_pistes, piste_query};
pub use render::{
    escape_html, render_map_page, LINE_WEIGHT, MAP_CENTER, MAP_TITLE, MAP_ZOOM,
};
pub use server::{routes, serve, PisteService, DEFAULT_HOST, DEFAULT_PISTE_AREA, DEFAULT_PORT};
