pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod geo;
pub mod handlers;
pub mod i18n;
pub mod jwt;
pub mod landing;
pub mod middleware;
pub mod models;
pub mod password;
pub mod util;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::AppState;

/// Full HTTP surface: health at the root, everything else under `/api`.
pub fn app(state: AppState, config: &Config) -> Router {
    let mut api = Router::new()
        .merge(handlers::public::router())
        .merge(handlers::admin::router(state.clone()));

    if config.dev_mode {
        api = api.merge(handlers::dev::router());
    }

    Router::new()
        .merge(handlers::public::root_router())
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
