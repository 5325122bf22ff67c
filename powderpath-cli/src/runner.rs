//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading and logging initialization so every command
//! handler starts the same way.

use std::path::Path;

use powderpath::config::{ConfigFile, DEFAULT_LOG_FILE_NAME};
use powderpath::logging::{init_logging_full, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Mirror log events to stdout
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(verbose: bool, debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging_full(&log_dir, &log_file, verbose, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("powderpath v{}", powderpath::VERSION);
        info!("powderpath CLI: {} command", command);
    }
}

/// Splits the configured log file into the directory and file name the
/// appender expects.
fn split_log_path(path: &Path) -> (String, String) {
    let log_dir = path
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| ".".to_string());
    let log_file = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
    (log_dir, log_file)
}
