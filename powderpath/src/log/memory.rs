//! In-memory logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::{Arc, Mutex};

/// Logger that keeps every message in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a component
/// and inspect the other afterwards.
///
/// ```
/// use powderpath::log::{LogLevel, Logger, MemoryLogger};
/// use powderpath::log_warn;
///
/// let logger = MemoryLogger::new();
/// log_warn!(logger, "Error querying ({}, {}): {}", 6.5, 45.3, "timeout");
/// assert_eq!(logger.lines_at(LogLevel::Warn), vec!["Error querying (6.5, 45.3): timeout"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    entries: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemoryLogger {
    /// Creates an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded message with its level, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the messages recorded at exactly `level`.
    pub fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line)
            .collect()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|(_, line)| line.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let line = args.to_string();
        match self.entries.lock() {
            Ok(mut entries) => entries.push((level, line)),
            Err(poisoned) => poisoned.into_inner().push((level, line)),
        }
    }
}
