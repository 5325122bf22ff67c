//! Configuration file handling for ~/.powderpath/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use super::settings::*;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.powderpath/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.powderpath/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    /// Picks the Mapbox token: command line first, then the environment,
    /// then the config file. Blank values count as unset.
    pub fn resolve_access_token(&self, cli: Option<&str>, env: Option<&str>) -> Option<String> {
        [cli, env, self.mapbox.access_token.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// Get the path to the config directory (~/.powderpath).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".powderpath")
}

/// Get the path to the config file (~/.powderpath/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_SWEEP_AREA};

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.mapbox.access_token.is_none());
        assert_eq!(config.mapbox.tileset, "mapbox.mapbox-streets-v8");
        assert_eq!(config.mapbox.layers, "poi_label");
        assert_eq!(config.sweep.bbox.min_lon, DEFAULT_SWEEP_AREA.0);
        assert_eq!(config.sweep.step, 0.0005);
        assert_eq!(config.sweep.radius, 25.0);
        assert_eq!(config.sweep.limit, 50);
        assert_eq!(config.sweep.output, PathBuf::from("val_thorens_pois.geojson"));
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.download.timeout, DEFAULT_DOWNLOAD_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.saved".to_string());
        config.sweep.step = 0.001;
        config.sweep.max_retries = 2;
        config.server.port = 9000;
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_value_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, "[sweep]\nlimit = lots\n").unwrap();

        let err = ConfigFile::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: sweep.limit = 'lots' - must be a positive integer"
        );
    }

    #[test]
    fn test_resolve_access_token_precedence() {
        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.file".to_string());

        assert_eq!(
            config.resolve_access_token(Some("pk.cli"), Some("pk.env")),
            Some("pk.cli".to_string())
        );
        assert_eq!(
            config.resolve_access_token(None, Some("pk.env")),
            Some("pk.env".to_string())
        );
        assert_eq!(
            config.resolve_access_token(Some("  "), None),
            Some("pk.file".to_string())
        );

        config.mapbox.access_token = None;
        assert_eq!(config.resolve_access_token(None, Some("")), None);
    }

    #[test]
    fn test_config_paths() {
        assert!(config_directory().ends_with(".powderpath"));
        assert!(config_file_path().ends_with(".powderpath/config.ini"));
    }
}
