//! Serve command - run the piste map web server.

use powderpath::coord::BoundingBox;
use powderpath::piste::{serve, PisteService};
use powderpath::provider::OverpassClient;

use super::common::http_client;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub bbox: Option<BoundingBox>,
    pub verbose: bool,
    pub debug: bool,
}

/// Run the serve command.
///
/// Blocks until the server shuts down (Ctrl-C).
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose, args.debug)?;
    runner.log_startup("serve");
    let config = runner.config();

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let area = args.bbox.unwrap_or(config.overpass.bbox);

    let client = OverpassClient::with_url(http_client(config)?, config.overpass.url.clone());
    let service = PisteService::new(client, area);

    println!("Serving piste map for {} on http://{}:{}/", area, host, port);
    println!("Press Ctrl-C to stop.");

    actix_web::rt::System::new()
        .block_on(serve(service, &host, port))
        .map_err(|error| CliError::Serve {
            address: format!("{}:{}", host, port),
            error,
        })
}
