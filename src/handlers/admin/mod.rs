mod analytics;
mod content;
mod ebooks;
mod geo;
mod proofs;
mod session;

pub use analytics::*;
pub use content::*;
pub use ebooks::*;
pub use geo::*;
pub use proofs::*;
pub use session::*;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::db::AppState;
use crate::middleware::admin_auth;

/// Dashboard routes under `/api`. Every route requires an admin token.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        // Content singletons
        .route("/site-content", put(update_site_content))
        .route("/config", put(update_site_content))
        .route("/vsl-config", put(update_vsl_config))
        .route("/sections", put(update_sections))
        // Catalog
        .route("/ebooks", post(create_ebook))
        .route("/ebooks/{id}", put(update_ebook))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product))
        .route("/proofs-of-gains", post(create_proof))
        .route("/proofs-of-gains/{id}", put(update_proof).delete(delete_proof))
        // Geo-targeting
        .route("/geo-config", put(update_geo_config))
        .route("/geo-config/presets", post(apply_geo_preset))
        // Reporting
        .route("/analytics", get(list_analytics))
        .route("/analytics/summary", get(analytics_summary))
        .route_layer(middleware::from_fn_with_state(state, admin_auth))
}
