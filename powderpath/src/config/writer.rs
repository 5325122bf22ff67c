//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let access_token = config.mapbox.access_token.as_deref().unwrap_or("");

    format!(
        r#"[mapbox]
; Mapbox access token used for Tilequery requests
; MAPBOX_ACCESS_TOKEN and --token take precedence over this value
; Get one at: https://account.mapbox.com/
access_token = {}
; Tileset to query (default: mapbox.mapbox-streets-v8)
tileset = {}
; Comma-separated layers to return (default: poi_label)
layers = {}

[sweep]
; Area to sweep as min_lon,min_lat,max_lon,max_lat (default: Val Thorens)
bbox = {}
; Lattice spacing in degrees (default: 0.0005, roughly 55m of latitude)
step = {}
; Tilequery radius in meters, at most 50 (default: 25)
radius = {}
; Features returned per query, 1 to 50 (default: 50)
limit = {}
; Pause after each query in milliseconds, 0 disables (default: 100)
delay_ms = {}
; Retries per point on rate limiting, server or network errors (default: 0)
max_retries = {}
; First retry delay in milliseconds, doubled on each retry (default: 500)
retry_base_delay_ms = {}
; Stop the sweep after this many consecutive failed points, 0 never stops (default: 0)
max_consecutive_failures = {}
; GeoJSON file written after the sweep
output = {}

[overpass]
; Overpass API interpreter endpoint
url = {}
; Area whose pistes the map server shows, as min_lon,min_lat,max_lon,max_lat
bbox = {}

[server]
; Piste map listen address (default: 0.0.0.0)
host = {}
; Piste map listen port (default: 5001)
port = {}

[download]
; HTTP request timeout in seconds (default: 30)
timeout = {}

[logging]
; Log file location (default: ~/.powderpath/logs/powderpath.log)
file = {}
"#,
        access_token,
        config.mapbox.tileset,
        config.mapbox.layers,
        config.sweep.bbox,
        config.sweep.step,
        config.sweep.radius,
        config.sweep.limit,
        config.sweep.delay_ms,
        config.sweep.max_retries,
        config.sweep.retry_base_delay_ms,
        config.sweep.max_consecutive_failures,
        path_to_string(&config.sweep.output),
        config.overpass.url,
        config.overpass.bbox,
        config.server.host,
        config.server.port,
        config.download.timeout,
        path_to_string(&config.logging.file),
    )
}

/// Renders a path with the home directory collapsed to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
