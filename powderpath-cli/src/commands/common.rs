//! Common types and utilities shared across CLI commands.

use std::time::Duration;

use powderpath::config::{ConfigFile, MAPBOX_TOKEN_ENV};
use powderpath::provider::AsyncReqwestClient;
use powderpath::sweep::SweepConfig;

use crate::error::CliError;

/// Sweep parameters that can be overridden from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOverrides {
    pub step: Option<f64>,
    pub radius: Option<f64>,
    pub limit: Option<u32>,
    pub delay_ms: Option<u64>,
    pub retries: Option<u32>,
}

impl SweepOverrides {
    /// Applies the overrides on top of a config-derived base.
    pub fn apply(&self, base: SweepConfig) -> SweepConfig {
        let mut config = base;
        if let Some(step) = self.step {
            config = config.with_step(step);
        }
        if let Some(radius) = self.radius {
            config = config.with_radius(radius);
        }
        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_delay(Duration::from_millis(delay_ms));
        }
        if let Some(retries) = self.retries {
            config = config.with_max_retries(retries);
        }
        config
    }
}

/// Resolve the Mapbox token: CLI flag, then environment, then config.
pub fn resolve_access_token(
    cli_token: Option<&str>,
    config: &ConfigFile,
) -> Result<String, CliError> {
    let env_token = std::env::var(MAPBOX_TOKEN_ENV).ok();
    config
        .resolve_access_token(cli_token, env_token.as_deref())
        .ok_or(CliError::MissingToken)
}

/// Create the shared HTTP client with the configured timeout.
pub fn http_client(config: &ConfigFile) -> Result<AsyncReqwestClient, CliError> {
    AsyncReqwestClient::with_timeout(config.download.timeout).map_err(CliError::HttpClient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = SweepConfig::default().with_max_retries(4);
        assert_eq!(SweepOverrides::default().apply(base.clone()), base);
    }

    #[test]
    fn test_overrides_replace_values() {
        let overrides = SweepOverrides {
            step: Some(0.001),
            radius: Some(10.0),
            limit: Some(5),
            delay_ms: Some(0),
            retries: Some(2),
        };
        let config = overrides.apply(SweepConfig::default());

        assert_eq!(config.step, 0.001);
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.limit, 5);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_cli_token_wins() {
        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.file".to_string());
        assert_eq!(
            resolve_access_token(Some("pk.cli"), &config).unwrap(),
            "pk.cli"
        );
    }

    #[test]
    fn test_http_client_uses_config() {
        assert!(http_client(&ConfigFile::default()).is_ok());
    }
}
