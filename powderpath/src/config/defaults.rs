//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::coord::BoundingBox;
use crate::output::DEFAULT_OUTPUT_FILE;
use crate::piste::{DEFAULT_HOST, DEFAULT_PISTE_AREA, DEFAULT_PORT};
use crate::provider::{DEFAULT_LAYERS, DEFAULT_OVERPASS_URL, DEFAULT_TILESET, DEFAULT_TIMEOUT_SECS};
use crate::sweep::{
    DEFAULT_DELAY, DEFAULT_LIMIT, DEFAULT_MAX_RETRIES, DEFAULT_RADIUS, DEFAULT_RETRY_BASE_DELAY,
    DEFAULT_STEP,
};

/// Default sweep area: Val Thorens (west, south, east, north).
pub const DEFAULT_SWEEP_AREA: (f64, f64, f64, f64) = (6.568, 45.296, 6.585, 45.305);

/// Default HTTP timeout in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT_SECS;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "powderpath.log";

/// Environment variable holding the Mapbox access token.
pub const MAPBOX_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

fn area((west, south, east, north): (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox {
        min_lon: west,
        min_lat: south,
        max_lon: east,
        max_lat: north,
    }
}

/// Default sweep bounding box.
pub fn default_sweep_bbox() -> BoundingBox {
    area(DEFAULT_SWEEP_AREA)
}

/// Default piste map bounding box.
pub fn default_piste_bbox() -> BoundingBox {
    area(DEFAULT_PISTE_AREA)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            mapbox: MapboxSettings {
                access_token: None,
                tileset: DEFAULT_TILESET.to_string(),
                layers: DEFAULT_LAYERS.to_string(),
            },
            sweep: SweepSettings {
                bbox: default_sweep_bbox(),
                step: DEFAULT_STEP,
                radius: DEFAULT_RADIUS,
                limit: DEFAULT_LIMIT,
                delay_ms: DEFAULT_DELAY.as_millis() as u64,
                max_retries: DEFAULT_MAX_RETRIES,
                retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY.as_millis() as u64,
                max_consecutive_failures: 0,
                output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            },
            overpass: OverpassSettings {
                url: DEFAULT_OVERPASS_URL.to_string(),
                bbox: default_piste_bbox(),
            },
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            download: DownloadSettings {
                timeout: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            },
            logging: LoggingSettings {
                file: config_directory().join("logs").join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
