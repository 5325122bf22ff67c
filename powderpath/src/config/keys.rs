//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::file::ConfigFile;
use super::parser::expand_tilde;
use crate::coord::BoundingBox;
use crate::provider::{MAX_LIMIT, MAX_RADIUS};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Mapbox settings
    MapboxAccessToken,
    MapboxTileset,
    MapboxLayers,

    // Sweep settings
    SweepBbox,
    SweepStep,
    SweepRadius,
    SweepLimit,
    SweepDelayMs,
    SweepMaxRetries,
    SweepRetryBaseDelayMs,
    SweepMaxConsecutiveFailures,
    SweepOutput,

    // Overpass settings
    OverpassUrl,
    OverpassBbox,

    // Server settings
    ServerHost,
    ServerPort,

    // Download settings
    DownloadTimeout,

    // Logging settings
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "sweep.step").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::MapboxAccessToken => "mapbox.access_token",
            ConfigKey::MapboxTileset => "mapbox.tileset",
            ConfigKey::MapboxLayers => "mapbox.layers",
            ConfigKey::SweepBbox => "sweep.bbox",
            ConfigKey::SweepStep => "sweep.step",
            ConfigKey::SweepRadius => "sweep.radius",
            ConfigKey::SweepLimit => "sweep.limit",
            ConfigKey::SweepDelayMs => "sweep.delay_ms",
            ConfigKey::SweepMaxRetries => "sweep.max_retries",
            ConfigKey::SweepRetryBaseDelayMs => "sweep.retry_base_delay_ms",
            ConfigKey::SweepMaxConsecutiveFailures => "sweep.max_consecutive_failures",
            ConfigKey::SweepOutput => "sweep.output",
            ConfigKey::OverpassUrl => "overpass.url",
            ConfigKey::OverpassBbox => "overpass.bbox",
            ConfigKey::ServerHost => "server.host",
            ConfigKey::ServerPort => "server.port",
            ConfigKey::DownloadTimeout => "download.timeout",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "sweep").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "step").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::MapboxAccessToken => config.mapbox.access_token.clone().unwrap_or_default(),
            ConfigKey::MapboxTileset => config.mapbox.tileset.clone(),
            ConfigKey::MapboxLayers => config.mapbox.layers.clone(),
            ConfigKey::SweepBbox => config.sweep.bbox.to_string(),
            ConfigKey::SweepStep => config.sweep.step.to_string(),
            ConfigKey::SweepRadius => config.sweep.radius.to_string(),
            ConfigKey::SweepLimit => config.sweep.limit.to_string(),
            ConfigKey::SweepDelayMs => config.sweep.delay_ms.to_string(),
            ConfigKey::SweepMaxRetries => config.sweep.max_retries.to_string(),
            ConfigKey::SweepRetryBaseDelayMs => config.sweep.retry_base_delay_ms.to_string(),
            ConfigKey::SweepMaxConsecutiveFailures => {
                config.sweep.max_consecutive_failures.to_string()
            }
            ConfigKey::SweepOutput => path_to_display(&config.sweep.output),
            ConfigKey::OverpassUrl => config.overpass.url.clone(),
            ConfigKey::OverpassBbox => config.overpass.bbox.to_string(),
            ConfigKey::ServerHost => config.server.host.clone(),
            ConfigKey::ServerPort => config.server.port.to_string(),
            ConfigKey::DownloadTimeout => config.download.timeout.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set a value in the config file after validation.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        let value = value.trim();

        match self {
            ConfigKey::MapboxAccessToken => config.mapbox.access_token = optional_string(value),
            ConfigKey::MapboxTileset => config.mapbox.tileset = value.to_string(),
            ConfigKey::MapboxLayers => config.mapbox.layers = value.to_string(),
            ConfigKey::SweepBbox => config.sweep.bbox = self.parse(value)?,
            ConfigKey::SweepStep => config.sweep.step = self.parse(value)?,
            ConfigKey::SweepRadius => config.sweep.radius = self.parse(value)?,
            ConfigKey::SweepLimit => config.sweep.limit = self.parse(value)?,
            ConfigKey::SweepDelayMs => config.sweep.delay_ms = self.parse(value)?,
            ConfigKey::SweepMaxRetries => config.sweep.max_retries = self.parse(value)?,
            ConfigKey::SweepRetryBaseDelayMs => {
                config.sweep.retry_base_delay_ms = self.parse(value)?
            }
            ConfigKey::SweepMaxConsecutiveFailures => {
                config.sweep.max_consecutive_failures = self.parse(value)?
            }
            ConfigKey::SweepOutput => config.sweep.output = expand_tilde(value),
            ConfigKey::OverpassUrl => config.overpass.url = value.to_string(),
            ConfigKey::OverpassBbox => config.overpass.bbox = self.parse(value)?,
            ConfigKey::ServerHost => config.server.host = value.to_string(),
            ConfigKey::ServerPort => config.server.port = self.parse(value)?,
            ConfigKey::DownloadTimeout => config.download.timeout = self.parse(value)?,
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    fn parse<T: FromStr>(&self, value: &str) -> Result<T, ConfigKeyError> {
        value.parse().map_err(|_| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: format!("could not parse '{}'", value),
        })
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::MapboxAccessToken => Box::new(AnyStringSpec),
            ConfigKey::MapboxTileset => Box::new(NonEmptySpec),
            ConfigKey::MapboxLayers => Box::new(NonEmptySpec),
            ConfigKey::SweepBbox => Box::new(BoundingBoxSpec),
            ConfigKey::SweepStep => Box::new(PositiveNumberSpec),
            ConfigKey::SweepRadius => Box::new(NumberRangeSpec { max: MAX_RADIUS }),
            ConfigKey::SweepLimit => Box::new(IntegerRangeSpec {
                min: 1,
                max: u64::from(MAX_LIMIT),
            }),
            ConfigKey::SweepDelayMs => Box::new(NonNegativeIntegerSpec),
            ConfigKey::SweepMaxRetries => Box::new(IntegerRangeSpec {
                min: 0,
                max: u64::from(u32::MAX),
            }),
            ConfigKey::SweepRetryBaseDelayMs => Box::new(NonNegativeIntegerSpec),
            ConfigKey::SweepMaxConsecutiveFailures => Box::new(IntegerRangeSpec {
                min: 0,
                max: u64::from(u32::MAX),
            }),
            ConfigKey::SweepOutput => Box::new(PathSpec),
            ConfigKey::OverpassUrl => Box::new(UrlSpec),
            ConfigKey::OverpassBbox => Box::new(BoundingBoxSpec),
            ConfigKey::ServerHost => Box::new(NonEmptySpec),
            ConfigKey::ServerPort => Box::new(IntegerRangeSpec {
                min: 1,
                max: u64::from(u16::MAX),
            }),
            ConfigKey::DownloadTimeout => Box::new(IntegerRangeSpec {
                min: 1,
                max: u64::MAX,
            }),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::MapboxAccessToken,
            ConfigKey::MapboxTileset,
            ConfigKey::MapboxLayers,
            ConfigKey::SweepBbox,
            ConfigKey::SweepStep,
            ConfigKey::SweepRadius,
            ConfigKey::SweepLimit,
            ConfigKey::SweepDelayMs,
            ConfigKey::SweepMaxRetries,
            ConfigKey::SweepRetryBaseDelayMs,
            ConfigKey::SweepMaxConsecutiveFailures,
            ConfigKey::SweepOutput,
            ConfigKey::OverpassUrl,
            ConfigKey::OverpassBbox,
            ConfigKey::ServerHost,
            ConfigKey::ServerPort,
            ConfigKey::DownloadTimeout,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification that accepts any string value.
struct AnyStringSpec;

impl ValueSpecification for AnyStringSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

struct NonEmptySpec;

impl ValueSpecification for NonEmptySpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}

/// Specification for `min_lon,min_lat,max_lon,max_lat` boxes.
struct BoundingBoxSpec;

impl ValueSpecification for BoundingBoxSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        value
            .parse::<BoundingBox>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Specification for strictly positive, finite numbers.
struct PositiveNumberSpec;

impl ValueSpecification for PositiveNumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
            _ => Err("must be a positive number".to_string()),
        }
    }
}

/// Specification for numbers between 0 and `max`, inclusive.
struct NumberRangeSpec {
    max: f64,
}

impl ValueSpecification for NumberRangeSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if (0.0..=self.max).contains(&n) => Ok(()),
            _ => Err(format!("must be a number between 0 and {}", self.max)),
        }
    }
}

/// Specification for integers within `min..=max`.
struct IntegerRangeSpec {
    min: u64,
    max: u64,
}

impl ValueSpecification for IntegerRangeSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<u64>() {
            Ok(n) if (self.min..=self.max).contains(&n) => Ok(()),
            _ => Err(format!(
                "must be an integer between {} and {}",
                self.min, self.max
            )),
        }
    }
}

struct NonNegativeIntegerSpec;

impl ValueSpecification for NonNegativeIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        value
            .parse::<u64>()
            .map(|_| ())
            .map_err(|_| "must be a non-negative integer".to_string())
    }
}

/// Specification for path values (non-empty).
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// Specification for http(s) URLs.
struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err("must be a URL starting with 'http://' or 'https://'".to_string())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Convert empty string to None, non-empty to Some.
fn optional_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "sweep.step".parse::<ConfigKey>().unwrap(),
            ConfigKey::SweepStep
        );
        assert_eq!(
            "mapbox.access_token".parse::<ConfigKey>().unwrap(),
            ConfigKey::MapboxAccessToken
        );
        // Case insensitive
        assert_eq!(
            "SERVER.PORT".parse::<ConfigKey>().unwrap(),
            ConfigKey::ServerPort
        );
        assert!(matches!(
            "invalid.key".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_name_parts() {
        assert_eq!(ConfigKey::SweepRetryBaseDelayMs.section(), "sweep");
        assert_eq!(
            ConfigKey::SweepRetryBaseDelayMs.key_name(),
            "retry_base_delay_ms"
        );
        assert_eq!(ConfigKey::OverpassUrl.section(), "overpass");
        assert_eq!(ConfigKey::OverpassUrl.key_name(), "url");
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();

        assert_eq!(ConfigKey::MapboxAccessToken.get(&config), "");
        assert_eq!(ConfigKey::SweepStep.get(&config), "0.0005");
        assert_eq!(ConfigKey::SweepLimit.get(&config), "50");
        assert_eq!(ConfigKey::ServerPort.get(&config), "5001");
        assert_eq!(
            ConfigKey::SweepBbox.get(&config),
            "6.568,45.296,6.585,45.305"
        );
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::MapboxAccessToken
            .set(&mut config, "pk.abc")
            .unwrap();
        assert_eq!(config.mapbox.access_token.as_deref(), Some("pk.abc"));

        ConfigKey::SweepBbox
            .set(&mut config, "6.0,45.0,6.1,45.1")
            .unwrap();
        assert_eq!(config.sweep.bbox, BoundingBox::new(6.0, 45.0, 6.1, 45.1).unwrap());

        ConfigKey::SweepRadius.set(&mut config, "50").unwrap();
        assert_eq!(config.sweep.radius, 50.0);

        ConfigKey::SweepOutput.set(&mut config, "/tmp/p.geojson").unwrap();
        assert_eq!(config.sweep.output, PathBuf::from("/tmp/p.geojson"));

        ConfigKey::ServerPort.set(&mut config, " 8080 ").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_clear_access_token() {
        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.old".to_string());

        ConfigKey::MapboxAccessToken.set(&mut config, "").unwrap();
        assert!(config.mapbox.access_token.is_none());
    }

    #[test]
    fn test_validate_limits() {
        assert!(ConfigKey::SweepRadius.validate("0").is_ok());
        assert!(ConfigKey::SweepRadius.validate("50.5").is_err());
        assert!(ConfigKey::SweepLimit.validate("1").is_ok());
        assert!(ConfigKey::SweepLimit.validate("0").is_err());
        assert!(ConfigKey::SweepLimit.validate("51").is_err());
        assert!(ConfigKey::SweepStep.validate("0").is_err());
        assert!(ConfigKey::SweepStep.validate("0.001").is_ok());
        assert!(ConfigKey::ServerPort.validate("0").is_err());
        assert!(ConfigKey::ServerPort.validate("65536").is_err());
        assert!(ConfigKey::SweepMaxConsecutiveFailures.validate("0").is_ok());
    }

    #[test]
    fn test_validate_bbox_and_url() {
        assert!(ConfigKey::OverpassBbox.validate("6.56,45.28,6.61,45.31").is_ok());
        assert!(ConfigKey::OverpassBbox.validate("6.61,45.28,6.56,45.31").is_err());
        assert!(ConfigKey::OverpassBbox.validate("nope").is_err());
        assert!(ConfigKey::OverpassUrl.validate("https://overpass.example/api").is_ok());
        assert!(ConfigKey::OverpassUrl.validate("ftp://x").is_err());
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();
        let result = ConfigKey::SweepLimit.set(&mut config, "many");

        assert!(matches!(
            result,
            Err(ConfigKeyError::ValidationFailed { ref key, .. }) if key == "sweep.limit"
        ));
        assert_eq!(config.sweep.limit, 50);
    }

    #[test]
    fn test_all_keys_round_trip_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
        assert_eq!(ConfigKey::all().len(), 18);
    }

    #[test]
    fn test_get_set_round_trip_defaults() {
        let defaults = ConfigFile::default();
        let mut config = ConfigFile::default();
        for key in ConfigKey::all() {
            let value = key.get(&defaults);
            if *key == ConfigKey::MapboxAccessToken {
                continue;
            }
            key.set(&mut config, &value).unwrap();
        }
        assert_eq!(config, defaults);
    }
}
