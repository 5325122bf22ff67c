//! powderpath CLI - Command-line interface
//!
//! This binary provides a command-line interface to the powderpath library:
//! POI sweeps over Mapbox Tilequery and the Overpass piste map server.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use powderpath::coord::BoundingBox;

use commands::common::SweepOverrides;
use commands::config::ConfigCommands;
use commands::serve::ServeArgs;
use commands::sweep::SweepArgs;

#[derive(Parser)]
#[command(name = "powderpath")]
#[command(version = powderpath::VERSION)]
#[command(about = "Collect points of interest and map ski pistes around Val Thorens", long_about = None)]
struct Cli {
    /// Also print log output to the terminal
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Log at debug level regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a bounding box on a grid and save every unique POI as GeoJSON
    Sweep {
        /// Area as min_lon,min_lat,max_lon,max_lat (default: sweep.bbox)
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<BoundingBox>,

        /// Lattice spacing in degrees (default: sweep.step)
        #[arg(long)]
        step: Option<f64>,

        /// Query radius in meters, at most 50 (default: sweep.radius)
        #[arg(long)]
        radius: Option<f64>,

        /// Features per query, at most 50 (default: sweep.limit)
        #[arg(long)]
        limit: Option<u32>,

        /// Pause after each query in milliseconds (default: sweep.delay_ms)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Retries per point for rate limiting and server errors (default: sweep.max_retries)
        #[arg(long)]
        retries: Option<u32>,

        /// Comma-separated Tilequery layers (default: mapbox.layers)
        #[arg(long)]
        layers: Option<String>,

        /// Mapbox access token (overrides MAPBOX_ACCESS_TOKEN and config)
        #[arg(long)]
        token: Option<String>,

        /// Output GeoJSON file (default: sweep.output)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Serve a Leaflet map of ski pistes fetched from Overpass
    Serve {
        /// Listen address (default: server.host)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: server.port)
        #[arg(long, short)]
        port: Option<u16>,

        /// Area to show as min_lon,min_lat,max_lon,max_lat (default: overpass.bbox)
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<BoundingBox>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sweep {
            bbox,
            step,
            radius,
            limit,
            delay_ms,
            retries,
            layers,
            token,
            output,
        } => commands::sweep::run(SweepArgs {
            bbox,
            overrides: SweepOverrides {
                step,
                radius,
                limit,
                delay_ms,
                retries,
            },
            layers,
            token,
            output,
            verbose: cli.verbose,
            debug: cli.debug,
        }),
        Commands::Serve { host, port, bbox } => commands::serve::run(ServeArgs {
            host,
            port,
            bbox,
            verbose: cli.verbose,
            debug: cli.debug,
        }),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
