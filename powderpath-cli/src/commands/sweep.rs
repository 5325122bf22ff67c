//! Sweep command - collect POIs over a bounding box and save them as GeoJSON.

use std::path::PathBuf;

use powderpath::coord::BoundingBox;
use powderpath::output::write_feature_collection;
use powderpath::provider::TilequeryProvider;
use powderpath::sweep::GridSweep;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::common::{http_client, resolve_access_token, SweepOverrides};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the sweep command.
pub struct SweepArgs {
    pub bbox: Option<BoundingBox>,
    pub overrides: SweepOverrides,
    pub layers: Option<String>,
    pub token: Option<String>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub debug: bool,
}

/// Run the sweep command.
pub fn run(args: SweepArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose, args.debug)?;
    runner.log_startup("sweep");
    let config = runner.config();

    // CLI takes precedence, then config
    let token = resolve_access_token(args.token.as_deref(), config)?;
    let bbox = args.bbox.unwrap_or(config.sweep.bbox);
    let output = args.output.unwrap_or_else(|| config.sweep.output.clone());
    let layers = args.layers.unwrap_or_else(|| config.mapbox.layers.clone());
    let sweep_config = args.overrides.apply(config.sweep.to_sweep_config());

    let provider = TilequeryProvider::new(http_client(config)?, token)
        .with_tileset(config.mapbox.tileset.clone())
        .with_layers(layers);

    println!("Sweeping {} with step {}", bbox, sweep_config.step);
    println!("Press Ctrl-C to stop early and save what was collected.");

    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    let cancel = CancellationToken::new();

    let result = runtime.block_on(async {
        let signal_token = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current point");
                signal_token.cancel();
            }
        });

        GridSweep::new(&provider, sweep_config)
            .with_cancellation(cancel.clone())
            .run(&bbox)
            .await
    })?;

    println!("{}", result.summary());
    if result.cancelled {
        println!("Sweep interrupted; saving partial results.");
    }
    if result.failed_count > 0 {
        println!(
            "{} of {} queries failed (see log for details).",
            result.failed_count, result.query_count
        );
    }

    write_feature_collection(&output, &result.into_feature_collection())?;
    info!(path = %output.display(), "Sweep results saved");
    println!("Saved to {}", output.display());

    Ok(())
}
