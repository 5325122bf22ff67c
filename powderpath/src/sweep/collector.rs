//! The grid sweep loop.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::config::SweepConfig;
use super::error::SweepError;
use super::result::{Deduplicator, SweepResult};
use crate::coord::{BoundingBox, Lattice, SamplePoint};
use crate::feature::Feature;
use crate::log::{Logger, TracingLogger};
use crate::provider::{PoiProvider, ProviderError};
use crate::{log_debug, log_info, log_warn};

/// How often (in points) progress is reported at info level.
const PROGRESS_INTERVAL: usize = 100;

/// Sweeps `bbox` with `provider` and returns the deduplicated features.
///
/// Points are visited one at a time in row-major order. A failing point is
/// logged and skipped; it still counts toward `query_count`.
///
/// # Errors
///
/// Fails before the first query if the step, radius or limit is invalid, and
/// mid-sweep only when `max_consecutive_failures` is set and reached.
pub async fn collect<P: PoiProvider>(
    bbox: &BoundingBox,
    config: &SweepConfig,
    provider: &P,
) -> Result<SweepResult, SweepError> {
    GridSweep::new(provider, config.clone()).run(bbox).await
}

/// A configured sweep over one provider.
///
/// Adds an injectable logger and cooperative cancellation on top of
/// [`collect`].
pub struct GridSweep<'a, P: PoiProvider> {
    provider: &'a P,
    config: SweepConfig,
    logger: Arc<dyn Logger>,
    cancel: Option<CancellationToken>,
}

impl<'a, P: PoiProvider> GridSweep<'a, P> {
    pub fn new(provider: &'a P, config: SweepConfig) -> Self {
        Self {
            provider,
            config,
            logger: Arc::new(TracingLogger),
            cancel: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Checks `token` once per point, before its query.
    ///
    /// A cancelled sweep returns the partial result with `cancelled` set.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|t| t.is_cancelled())
    }

    /// Runs the sweep to completion, cancellation or abort.
    pub async fn run(&self, bbox: &BoundingBox) -> Result<SweepResult, SweepError> {
        let lattice = Lattice::new(*bbox, self.config.step)?;
        self.provider
            .check_params(self.config.radius, self.config.limit)
            .map_err(|source| SweepError::InvalidQuery {
                provider: self.provider.name().to_string(),
                source,
            })?;

        let total = lattice.len();
        log_info!(
            self.logger,
            "Sweeping {} with step {} ({} points) via {}",
            bbox,
            self.config.step,
            total,
            self.provider.name()
        );

        let mut dedup = Deduplicator::default();
        let mut query_count = 0usize;
        let mut failed_count = 0usize;
        let mut consecutive_failures = 0u32;
        let mut cancelled = false;

        for point in lattice {
            if self.is_cancelled() {
                log_warn!(
                    self.logger,
                    "Sweep cancelled after {} of {} points",
                    query_count,
                    total
                );
                cancelled = true;
                break;
            }

            query_count += 1;
            match self.query_point(point).await {
                Ok(features) => {
                    consecutive_failures = 0;
                    let returned = features.len();
                    let mut added = 0usize;
                    for feature in features {
                        if dedup.insert(feature) {
                            added += 1;
                        }
                    }
                    log_debug!(
                        self.logger,
                        "Queried {}: {} returned, {} new",
                        point,
                        returned,
                        added
                    );
                }
                Err(e) => {
                    failed_count += 1;
                    consecutive_failures += 1;
                    log_warn!(self.logger, "Error querying {}: {}", point, e);

                    if let Some(max) = self.config.max_consecutive_failures {
                        if consecutive_failures >= max {
                            return Err(SweepError::ServiceUnreachable {
                                failures: consecutive_failures,
                                query_count,
                                last_error: e,
                            });
                        }
                    }
                }
            }

            if query_count % PROGRESS_INTERVAL == 0 {
                log_info!(self.logger, "Progress: {}/{} points", query_count, total);
            }

            self.pause().await;
        }

        let result = SweepResult {
            items: dedup.into_items(),
            query_count,
            failed_count,
            cancelled,
        };
        log_info!(
            self.logger,
            "Sweep finished: {} ({} failed)",
            result.summary(),
            result.failed_count
        );
        Ok(result)
    }

    /// Queries one point, retrying retryable failures with backoff.
    async fn query_point(&self, point: SamplePoint) -> Result<Vec<Feature>, ProviderError> {
        let mut attempt = 0u32;
        loop {
            match self
                .provider
                .query(point, self.config.radius, self.config.limit)
                .await
            {
                Ok(features) => return Ok(features),
                Err(e) if attempt < self.config.max_retries && e.is_retryable() => {
                    let backoff = self.config.retry_backoff(attempt);
                    log_debug!(
                        self.logger,
                        "Retrying {} in {:?} (attempt {}/{}): {}",
                        point,
                        backoff,
                        attempt + 1,
                        self.config.max_retries,
                        e
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Courtesy delay between queries; cut short by cancellation.
    async fn pause(&self) {
        if self.config.delay.is_zero() {
            return;
        }
        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(self.config.delay) => {}
                }
            }
            None => tokio::time::sleep(self.config.delay).await,
        }
    }
}
