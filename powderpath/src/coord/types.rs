//! Coordinate type definitions

use std::fmt;
use std::str::FromStr;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point sampled by a grid sweep.
///
/// Stored in GeoJSON order: longitude first, then latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Latitude in decimal degrees
    pub lat: f64,
}

impl SamplePoint {
    /// Creates a new sample point.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// Rectangular geographic region.
///
/// Invariant: `min_lon <= max_lon` and `min_lat <= max_lat`, all values finite
/// and inside the valid longitude/latitude ranges. Use [`BoundingBox::new`] to
/// construct a validated box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Creates a validated bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if any value is non-finite or out of range, or if
    /// a minimum exceeds its maximum.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Result<Self, CoordError> {
        for lon in [min_lon, max_lon] {
            if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(CoordError::InvalidLongitude(lon));
            }
        }
        for lat in [min_lat, max_lat] {
            if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(CoordError::InvalidLatitude(lat));
            }
        }
        if min_lon > max_lon {
            return Err(CoordError::InvertedAxis {
                axis: "longitude",
                min: min_lon,
                max: max_lon,
            });
        }
        if min_lat > max_lat {
            return Err(CoordError::InvertedAxis {
                axis: "latitude",
                min: min_lat,
                max: max_lat,
            });
        }

        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// Width of the box in degrees of longitude.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the box in degrees of latitude.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point lies inside the box (edges inclusive).
    #[inline]
    pub fn contains(&self, point: &SamplePoint) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }

    /// Center of the box as a sample point.
    pub fn center(&self) -> SamplePoint {
        SamplePoint::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Formats as `min_lon,min_lat,max_lon,max_lat`, the same form accepted by
/// [`FromStr`].
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

impl FromStr for BoundingBox {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CoordError::InvalidBoundingBox(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| CoordError::InvalidBoundingBox(s.to_string()))?;
        }

        Self::new(values[0], values[1], values[2], values[3])
    }
}

/// Errors that can occur when building coordinates and lattices.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0) or not finite
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0) or not finite
    InvalidLongitude(f64),
    /// Minimum exceeds maximum on one axis
    InvertedAxis {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    /// Bounding box string could not be parsed
    InvalidBoundingBox(String),
    /// Lattice step is zero, negative or not finite
    InvalidStep(f64),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvertedAxis { axis, min, max } => {
                write!(
                    f,
                    "Invalid bounding box: minimum {} {} is greater than maximum {}",
                    axis, min, max
                )
            }
            CoordError::InvalidBoundingBox(s) => {
                write!(
                    f,
                    "Invalid bounding box: '{}' (expected min_lon,min_lat,max_lon,max_lat)",
                    s
                )
            }
            CoordError::InvalidStep(step) => {
                write!(f, "Invalid step: {} (must be a positive number)", step)
            }
        }
    }
}

impl std::error::Error for CoordError {}
