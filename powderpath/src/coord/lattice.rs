//! Regular sampling lattice over a bounding box.
//!
//! The lattice walks latitude rows from the south edge upward and, within each
//! row, longitudes from the west edge eastward. Both axes advance by repeated
//! addition of `step` and continue while the running value is `<=` the box
//! maximum. Accumulated floating-point error can therefore add or drop a point
//! right at the north/east edge, so the point count is whatever the walk
//! produces, not `floor(span / step) + 1`.

use super::types::{BoundingBox, CoordError, SamplePoint};

/// Iterator over the sample points of a bounding box.
///
/// # Example
///
/// ```
/// use powderpath::coord::{BoundingBox, Lattice};
///
/// let bbox = BoundingBox::new(0.0, 0.0, 0.001, 0.001).unwrap();
/// let lattice = Lattice::new(bbox, 0.0005).unwrap();
/// assert_eq!(lattice.count(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct Lattice {
    bbox: BoundingBox,
    step: f64,
    lon: f64,
    lat: f64,
}

impl Lattice {
    /// Creates a lattice over `bbox` with spacing `step` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidStep`] if `step` is not a positive finite
    /// number.
    pub fn new(bbox: BoundingBox, step: f64) -> Result<Self, CoordError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(CoordError::InvalidStep(step));
        }
        // A step below the float resolution at the box edge would never advance.
        let lon_edge = bbox.min_lon.abs().max(bbox.max_lon.abs());
        let lat_edge = bbox.min_lat.abs().max(bbox.max_lat.abs());
        if lon_edge + step == lon_edge || lat_edge + step == lat_edge {
            return Err(CoordError::InvalidStep(step));
        }

        Ok(Self {
            bbox,
            step,
            lon: bbox.min_lon,
            lat: bbox.min_lat,
        })
    }

    /// The bounding box being sampled.
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Lattice spacing in degrees.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of points a fresh lattice with these parameters visits.
    ///
    /// Walks a clone of the iterator so the result always agrees with the
    /// points actually produced.
    pub fn len(&self) -> usize {
        Self {
            lon: self.bbox.min_lon,
            lat: self.bbox.min_lat,
            ..self.clone()
        }
        .count()
    }

    /// Whether the lattice visits no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for Lattice {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.lon > self.bbox.max_lon {
            self.lat += self.step;
            self.lon = self.bbox.min_lon;
        }
        if self.lat > self.bbox.max_lat {
            return None;
        }

        let point = SamplePoint::new(self.lon, self.lat);
        self.lon += self.step;
        Some(point)
    }
}

impl std::iter::FusedIterator for Lattice {}
