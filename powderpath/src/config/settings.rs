//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

use crate::coord::BoundingBox;
use crate::sweep::SweepConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Mapbox Tilequery settings
    pub mapbox: MapboxSettings,
    /// Grid sweep settings
    pub sweep: SweepSettings,
    /// Overpass settings for the piste map
    pub overpass: OverpassSettings,
    /// Piste map server settings
    pub server: ServerSettings,
    /// HTTP client settings
    pub download: DownloadSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Mapbox configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MapboxSettings {
    /// Access token; `MAPBOX_ACCESS_TOKEN` or `--token` take precedence
    pub access_token: Option<String>,
    /// Tileset to query
    pub tileset: String,
    /// Comma-separated layer filter
    pub layers: String,
}

/// Grid sweep configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSettings {
    /// Area to sweep
    pub bbox: BoundingBox,
    /// Lattice spacing in degrees
    pub step: f64,
    /// Query radius in meters (at most 50)
    pub radius: f64,
    /// Features per query (at most 50)
    pub limit: u32,
    /// Pause after each query in milliseconds; 0 disables it
    pub delay_ms: u64,
    /// Retries per point for rate-limit, server and transport errors
    pub max_retries: u32,
    /// Backoff base in milliseconds, doubled per retry
    pub retry_base_delay_ms: u64,
    /// Abort after this many consecutive failed points; 0 never aborts
    pub max_consecutive_failures: u32,
    /// Output GeoJSON path
    pub output: PathBuf,
}

impl SweepSettings {
    /// Sweep parameters derived from these settings.
    pub fn to_sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_step(self.step)
            .with_radius(self.radius)
            .with_limit(self.limit)
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_max_retries(self.max_retries)
            .with_retry_base_delay(Duration::from_millis(self.retry_base_delay_ms))
            .with_max_consecutive_failures(self.max_consecutive_failures)
    }
}

/// Overpass configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassSettings {
    /// Interpreter endpoint
    pub url: String,
    /// Area whose pistes are shown
    pub bbox: BoundingBox,
}

/// Piste map server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Download configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    /// Timeout in seconds for HTTP requests.
    pub timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
