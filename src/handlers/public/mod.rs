mod analytics;
mod auth;
mod buy;
mod content;
mod ebooks;
mod geo;
mod landing;
mod languages;
mod proofs;

pub use analytics::*;
pub use auth::*;
pub use buy::*;
pub use content::*;
pub use ebooks::*;
pub use geo::*;
pub use landing::*;
pub use languages::*;
pub use proofs::*;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::db::AppState;
use crate::extractors::Json;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Vitrine API",
    })
}

/// Routes outside the `/api` nest: health, and the trailing-slash API root.
pub fn root_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/", get(root))
}

/// Routes mounted under `/api` that need no session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", post(login))
        // Content singletons
        .route("/site-content", get(get_site_content))
        .route("/config", get(get_site_content))
        .route("/vsl-config", get(get_vsl_config))
        .route("/sections", get(get_sections))
        .route("/sections/catalog", get(get_sections_catalog))
        // Catalog
        .route("/ebooks", get(list_ebooks))
        .route("/ebooks/{id}", get(get_ebook))
        .route("/products", get(list_products))
        .route("/buy/{ebook_id}/{index}", get(buy_redirect))
        .route("/proofs-of-gains", get(list_proofs))
        .route("/proofs-of-gains/{id}", get(get_proof))
        // Geo-targeting
        .route("/geo-config", get(get_geo_config))
        .route("/recommended-platform/{country}", get(recommended_platform))
        .route("/detect-country", get(detect_country))
        // Beacons
        .route("/analytics/page-view", post(track_page_view))
        .route("/analytics/video-view", post(track_video_view))
        .route("/analytics/button-click", post(track_button_click))
        // Page composition
        .route("/landing", get(get_landing))
        .route("/languages", get(list_languages))
        .route("/translations/{lang}", get(get_translations))
}
