//! HTTP server for the piste map.
//!
//! Every request fetches fresh data from Overpass; nothing is cached.

use actix_web::{http::header::ContentType, web, App, HttpResponse, HttpServer};
use tracing::{info, warn};

use super::error::PisteError;
use super::geojson::pistes_to_feature_collection;
use super::model::Piste;
use super::overpass::{parse_pistes, piste_query};
use super::render::render_map_page;
use crate::coord::BoundingBox;
use crate::provider::{AsyncHttpClient, OverpassClient};

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5001;

/// Default Overpass area around Val Thorens (west, south, east, north).
pub const DEFAULT_PISTE_AREA: (f64, f64, f64, f64) = (6.56, 45.28, 6.61, 45.31);

/// Loads pistes for a fixed area.
pub struct PisteService<C: AsyncHttpClient> {
    client: OverpassClient<C>,
    area: BoundingBox,
}

impl<C: AsyncHttpClient> PisteService<C> {
    pub fn new(client: OverpassClient<C>, area: BoundingBox) -> Self {
        Self { client, area }
    }

    pub fn area(&self) -> &BoundingBox {
        &self.area
    }

    /// Fetches and parses the pistes in the service area.
    pub async fn load(&self) -> Result<Vec<Piste>, PisteError> {
        let body = self.client.run(&piste_query(&self.area)).await?;
        let pistes = parse_pistes(&body)?;
        info!(area = %self.area, pistes = pistes.len(), "Loaded pistes");
        Ok(pistes)
    }
}

fn upstream_failure(e: &PisteError) -> HttpResponse {
    warn!(error = %e, "Piste request failed");
    HttpResponse::BadGateway()
        .content_type(ContentType::plaintext())
        .body(format!("Error: {}", e))
}

async fn map_page<C: AsyncHttpClient + 'static>(
    service: web::Data<PisteService<C>>,
) -> HttpResponse {
    let pistes = match service.load().await {
        Ok(pistes) => pistes,
        Err(e) => return upstream_failure(&e),
    };

    match render_map_page(&pistes) {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

async fn pistes_geojson<C: AsyncHttpClient + 'static>(
    service: web::Data<PisteService<C>>,
) -> HttpResponse {
    match service.load().await {
        Ok(pistes) => HttpResponse::Ok()
            .content_type("application/geo+json")
            .json(pistes_to_feature_collection(&pistes)),
        Err(e) => upstream_failure(&e),
    }
}

/// Registers the map routes.
pub fn routes<C: AsyncHttpClient + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(map_page::<C>))
        .route("/pistes.geojson", web::get().to(pistes_geojson::<C>));
}

/// Serves the map until the server is stopped.
pub async fn serve<C: AsyncHttpClient + 'static>(
    service: PisteService<C>,
    host: &str,
    port: u16,
) -> std::io::Result<()> {
    let data = web::Data::new(service);
    info!(host, port, "Starting piste map server");

    HttpServer::new(move || App::new().app_data(data.clone()).configure(routes::<C>))
        .bind((host, port))?
        .run()
        .await
}
