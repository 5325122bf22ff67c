//! User configuration stored in `~/.powderpath/config.ini`.
//!
//! - [`ConfigFile`] holds every section (`[mapbox]`, `[sweep]`, `[overpass]`,
//!   `[server]`, `[download]`, `[logging]`)
//! - [`ConfigKey`] gets and sets single values by `section.key` name
//!
//! # Example
//!
//! ```no_run
//! use powderpath::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::load()?;
//! ConfigKey::SweepStep.set(&mut config, "0.001")?;
//! config.save()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_piste_bbox, default_sweep_bbox, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_LOG_FILE_NAME,
    DEFAULT_SWEEP_AREA, MAPBOX_TOKEN_ENV,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, DownloadSettings, LoggingSettings, MapboxSettings, OverpassSettings,
    ServerSettings, SweepSettings,
};
