//! Logging infrastructure for powderpath.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to the configured log file (cleared on session start)
//! - Optionally mirrors to stdout when running with `--verbose`
//! - Multi-line pretty format in the file for readability
//! - Configurable via RUST_LOG environment variable, or forced to debug

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging with file and stdout output at the RUST_LOG level.
///
/// # Errors
///
/// Returns error if log directory cannot be created or log file cannot be cleared
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    init_logging_full(log_dir, log_file, true, false)
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file and
/// installs the global subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "powderpath.log")
/// * `stdout_enabled` - Also print events to stdout
/// * `debug_mode` - Ignore RUST_LOG and log at debug level
///
/// # Errors
///
/// Returns error if the log file cannot be prepared or a global subscriber
/// is already installed
pub fn init_logging_full(
    log_dir: &str,
    log_file: &str,
    stdout_enabled: bool,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_target(false)
            .compact()
    });

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = EnvFilter::try_new(filter_directive(debug_mode, env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Creates `log_dir` and truncates `log_dir/log_file`.
fn prepare_log_file(log_dir: &str, log_file: &str) -> Result<(), io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(Path::new(log_dir).join(log_file), "")
}

/// Picks the filter directive: debug mode wins, then RUST_LOG, then info.
fn filter_directive(debug_mode: bool, env: Option<&str>) -> &str {
    if debug_mode {
        return "debug";
    }
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => DEFAULT_FILTER,
    }
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "powderpath.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "powderpath.log");
    }

    #[test]
    fn test_prepare_creates_nested_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("deep").join("nested");
        let log_dir_str = log_dir.to_str().unwrap();

        prepare_log_file(log_dir_str, "test.log").unwrap();

        let log_path = log_dir.join("test.log");
        assert!(log_path.exists());
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_prepare_clears_existing_file() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("test.log");
        fs::write(&log_path, "old log data").unwrap();

        prepare_log_file(temp.path().to_str().unwrap(), "test.log").unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_prepare_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = prepare_log_file(blocker.join("logs").to_str().unwrap(), "test.log");
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(true, Some("warn")), "debug");
        assert_eq!(filter_directive(false, Some("powderpath=trace")), "powderpath=trace");
        assert_eq!(filter_directive(false, Some("  ")), "info");
        assert_eq!(filter_directive(false, None), "info");
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard { _file_guard: guard };
    }

    // Only one global subscriber may be installed per process, so
    // init_logging_full itself is exercised from the CLI.
}
