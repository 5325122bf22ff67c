//! powderpath - Points of interest and ski pistes around Val Thorens
//!
//! This library provides the two halves of the powderpath tooling:
//!
//! - a grid sweep that samples an area on a regular lattice, queries Mapbox
//!   Tilequery at every point and writes the de-duplicated POIs as GeoJSON
//! - a small web server that fetches ski pistes from the Overpass API and
//!   renders them on a Leaflet map
//!
//! # High-Level API
//!
//! ```ignore
//! use powderpath::coord::BoundingBox;
//! use powderpath::provider::{AsyncReqwestClient, TilequeryProvider};
//! use powderpath::sweep::{collect, SweepConfig};
//!
//! let bbox = BoundingBox::new(6.568, 45.296, 6.585, 45.305)?;
//! let provider = TilequeryProvider::new(AsyncReqwestClient::new()?, token);
//! let result = collect(&bbox, &SweepConfig::default(), &provider).await?;
//! println!("{}", result.summary());
//! ```

pub mod config;
pub mod coord;
pub mod feature;
pub mod log;
pub mod logging;
pub mod output;
pub mod piste;
pub mod provider;
pub mod sweep;

/// Version of the powderpath library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
