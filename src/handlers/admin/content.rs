use axum::extract::{Extension, State};

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::middleware::AdminContext;
use crate::models::{SectionsConfig, SiteContent, VslConfig};

/// Replaces the whole document; omitted fields take their defaults.
pub async fn update_site_content(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(content): Json<SiteContent>,
) -> Result<Json<SiteContent>> {
    let conn = state.db.get()?;
    queries::put_site_content(&conn, &content)?;
    tracing::info!("Site content updated by {}", ctx.username);
    Ok(Json(content))
}

pub async fn update_vsl_config(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(config): Json<VslConfig>,
) -> Result<Json<VslConfig>> {
    config.validate()?;
    let conn = state.db.get()?;
    queries::put_vsl_config(&conn, &config)?;
    tracing::info!("VSL config updated by {} (enabled={})", ctx.username, config.enabled);
    Ok(Json(config))
}

pub async fn update_sections(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(sections): Json<SectionsConfig>,
) -> Result<Json<SectionsConfig>> {
    let conn = state.db.get()?;
    queries::put_sections(&conn, &sections)?;
    tracing::info!("Section toggles updated by {}", ctx.username);
    Ok(Json(sections))
}
