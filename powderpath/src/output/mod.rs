//! GeoJSON artifact writer.
//!
//! The sweep result is written once, at the end, as a pretty-printed
//! FeatureCollection.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::feature::FeatureCollection;

/// Default artifact name for a sweep.
pub const DEFAULT_OUTPUT_FILE: &str = "val_thorens_pois.geojson";

/// Errors writing the output artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Parent directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// The file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The collection could not be serialized.
    #[error("Failed to serialize feature collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializes a collection as 2-space indented JSON.
pub fn to_pretty_json(collection: &FeatureCollection) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Writes `collection` to `path`, creating parent directories as needed.
///
/// An existing file is replaced.
pub fn write_feature_collection(
    path: &Path,
    collection: &FeatureCollection,
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = to_pretty_json(collection)?;
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;

    info!(
        path = %path.display(),
        features = collection.len(),
        bytes = json.len() + 1,
        "Wrote feature collection"
    );
    Ok(())
}
