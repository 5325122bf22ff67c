//! Coordinate module
//!
//! Provides the geographic primitives used by grid sweeps: validated
//! bounding boxes, sample points, and the inclusive sampling lattice.

mod lattice;
mod types;

pub use lattice::Lattice;
pub use types::{BoundingBox, CoordError, SamplePoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

#[cfg(test)]
mod tests;
