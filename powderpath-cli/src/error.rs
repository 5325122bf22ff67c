//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use powderpath::config::{ConfigFileError, ConfigKeyError, MAPBOX_TOKEN_ENV};
use powderpath::coord::CoordError;
use powderpath::output::OutputError;
use powderpath::provider::ProviderError;
use powderpath::sweep::SweepError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// No Mapbox access token from any source
    MissingToken,
    /// Invalid command-line value
    InvalidArgument(String),
    /// Failed to build the HTTP client
    HttpClient(ProviderError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
    /// The sweep could not run or was aborted
    Sweep(SweepError),
    /// Failed to write the GeoJSON output
    Output(OutputError),
    /// Piste map server error
    Serve { address: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::MissingToken => {
                eprintln!();
                eprintln!("Provide a Mapbox access token in one of these ways:");
                eprintln!("  1. powderpath sweep --token <token>");
                eprintln!("  2. export {}=<token>", MAPBOX_TOKEN_ENV);
                eprintln!("  3. powderpath config set mapbox.access_token <token>");
            }
            CliError::Sweep(SweepError::ServiceUnreachable { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Network: check that api.mapbox.com is reachable");
                eprintln!("  2. Token: make sure the access token is valid and not expired");
                eprintln!("  3. Rate limiting: raise sweep.delay_ms or sweep.max_retries");
            }
            CliError::Serve { .. } => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Port in use: pick another one with --port");
                eprintln!("  2. Permissions: ports below 1024 need elevated privileges");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::MissingToken => write!(f, "No Mapbox access token configured"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::Sweep(e) => write!(f, "Sweep failed: {}", e),
            CliError::Output(e) => write!(f, "Failed to save results: {}", e),
            CliError::Serve { address, error } => {
                write!(f, "Piste map server error on {}: {}", address, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HttpClient(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Sweep(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::Serve { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ConfigKeyError> for CliError {
    fn from(e: ConfigKeyError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}

impl From<SweepError> for CliError {
    fn from(e: SweepError) -> Self {
        CliError::Sweep(e)
    }
}

impl From<OutputError> for CliError {
    fn from(e: OutputError) -> Self {
        CliError::Output(e)
    }
}
