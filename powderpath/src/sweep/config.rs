//! Sweep parameters.

use std::time::Duration;

/// Default lattice spacing in degrees (about 55 m of latitude).
pub const DEFAULT_STEP: f64 = 0.0005;

/// Default query radius in meters.
pub const DEFAULT_RADIUS: f64 = 25.0;

/// Default per-query result cap.
pub const DEFAULT_LIMIT: u32 = 50;

/// Default pause after each query.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Default number of retries per point.
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Default delay before the first retry; doubles on each further attempt.
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

/// Parameters fixed for the duration of one sweep.
///
/// ```
/// use powderpath::sweep::SweepConfig;
/// use std::time::Duration;
///
/// let config = SweepConfig::default()
///     .with_step(0.001)
///     .with_delay(Duration::ZERO)
///     .with_max_retries(2);
/// assert_eq!(config.radius, 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Lattice spacing in degrees, applied to both axes
    pub step: f64,
    /// Search radius in meters passed to every query
    pub radius: f64,
    /// Result cap passed to every query
    pub limit: u32,
    /// Courtesy pause after each query; zero disables it
    pub delay: Duration,
    /// Extra attempts for a point after a retryable failure
    pub max_retries: u32,
    /// Backoff before retry `n` is `retry_base_delay * 2^n`
    pub retry_base_delay: Duration,
    /// Abort after this many points in a row fail; `None` never aborts
    pub max_consecutive_failures: Option<u32>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            radius: DEFAULT_RADIUS,
            limit: DEFAULT_LIMIT,
            delay: DEFAULT_DELAY,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            max_consecutive_failures: None,
        }
    }
}

impl SweepConfig {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Sets the consecutive-failure abort threshold. Zero disables it.
    pub fn with_max_consecutive_failures(mut self, max: u32) -> Self {
        self.max_consecutive_failures = (max > 0).then_some(max);
        self
    }

    /// Backoff to wait before retry number `attempt` (zero-based).
    pub fn retry_backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.retry_base_delay.saturating_mul(factor)
    }
}
