use axum::extract::{Extension, State};

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::middleware::AdminContext;
use crate::models::GeoConfig;

/// Stores the config with country codes normalized and duplicate
/// mappings collapsed (last one wins).
pub async fn update_geo_config(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(config): Json<GeoConfig>,
) -> Result<Json<GeoConfig>> {
    let config = config.normalized()?;
    let conn = state.db.get()?;
    queries::put_geo_config(&conn, &config)?;
    tracing::info!(
        "Geo config updated by {}: {} mappings, default {}",
        ctx.username,
        config.geo_platform_mappings.len(),
        config.default_platform
    );
    Ok(Json(config))
}

/// Replace platforms and mappings with the built-in preset, keeping the
/// global switch and default platform.
pub async fn apply_geo_preset(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
) -> Result<Json<GeoConfig>> {
    let conn = state.db.get()?;
    let config = queries::get_geo_config(&conn)?.preset();
    queries::put_geo_config(&conn, &config)?;
    tracing::info!("Geo preset applied by {}", ctx.username);
    Ok(Json(config))
}
