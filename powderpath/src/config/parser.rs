//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::BoundingBox;
use crate::provider::{MAX_LIMIT, MAX_RADIUS};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [mapbox] section
    if let Some(section) = ini.section(Some("mapbox")) {
        if let Some(v) = non_empty(section, "access_token") {
            config.mapbox.access_token = Some(v.to_string());
        }
        if let Some(v) = non_empty(section, "tileset") {
            config.mapbox.tileset = v.to_string();
        }
        if let Some(v) = non_empty(section, "layers") {
            config.mapbox.layers = v.to_string();
        }
    }

    // [sweep] section
    if let Some(section) = ini.section(Some("sweep")) {
        if let Some(v) = section.get("bbox") {
            config.sweep.bbox = parse_bbox("sweep", v)?;
        }
        if let Some(v) = section.get("step") {
            let step: f64 = parse_value("sweep", "step", v, "must be a positive number (degrees)")?;
            if !(step.is_finite() && step > 0.0) {
                return Err(invalid("sweep", "step", v, "must be a positive number (degrees)"));
            }
            config.sweep.step = step;
        }
        if let Some(v) = section.get("radius") {
            let radius: f64 = parse_value("sweep", "radius", v, "must be a number (meters)")?;
            if !(0.0..=MAX_RADIUS).contains(&radius) {
                return Err(invalid(
                    "sweep",
                    "radius",
                    v,
                    &format!("must be between 0 and {} meters", MAX_RADIUS),
                ));
            }
            config.sweep.radius = radius;
        }
        if let Some(v) = section.get("limit") {
            let limit: u32 = parse_value("sweep", "limit", v, "must be a positive integer")?;
            if limit == 0 || limit > MAX_LIMIT {
                return Err(invalid(
                    "sweep",
                    "limit",
                    v,
                    &format!("must be between 1 and {}", MAX_LIMIT),
                ));
            }
            config.sweep.limit = limit;
        }
        if let Some(v) = section.get("delay_ms") {
            config.sweep.delay_ms =
                parse_value("sweep", "delay_ms", v, "must be an integer (milliseconds)")?;
        }
        if let Some(v) = section.get("max_retries") {
            config.sweep.max_retries =
                parse_value("sweep", "max_retries", v, "must be a non-negative integer")?;
        }
        if let Some(v) = section.get("retry_base_delay_ms") {
            config.sweep.retry_base_delay_ms = parse_value(
                "sweep",
                "retry_base_delay_ms",
                v,
                "must be an integer (milliseconds)",
            )?;
        }
        if let Some(v) = section.get("max_consecutive_failures") {
            config.sweep.max_consecutive_failures = parse_value(
                "sweep",
                "max_consecutive_failures",
                v,
                "must be a non-negative integer (0 disables)",
            )?;
        }
        if let Some(v) = non_empty(section, "output") {
            config.sweep.output = expand_tilde(v);
        }
    }

    // [overpass] section
    if let Some(section) = ini.section(Some("overpass")) {
        if let Some(v) = non_empty(section, "url") {
            config.overpass.url = v.to_string();
        }
        if let Some(v) = section.get("bbox") {
            config.overpass.bbox = parse_bbox("overpass", v)?;
        }
    }

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = non_empty(section, "host") {
            config.server.host = v.to_string();
        }
        if let Some(v) = section.get("port") {
            config.server.port =
                parse_value("server", "port", v, "must be a valid port number (1-65535)")?;
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(v) = section.get("timeout") {
            config.download.timeout =
                parse_value("download", "timeout", v, "must be a positive integer (seconds)")?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section, "file") {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

/// Returns the trimmed value of `key`, or `None` when missing or blank.
fn non_empty<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section
        .get(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn parse_value<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

fn parse_bbox(section: &str, value: &str) -> Result<BoundingBox, ConfigFileError> {
    value.parse().map_err(|e| {
        invalid(
            section,
            "bbox",
            value,
            &format!("expected 'min_lon,min_lat,max_lon,max_lat' ({})", e),
        )
    })
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand ~ to home directory in paths.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
