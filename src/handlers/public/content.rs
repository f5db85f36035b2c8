use axum::extract::State;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::models::{SectionStatus, SectionsConfig, SiteContent, VslConfig, catalog};

/// Serves both `/site-content` and the older `/config` path.
pub async fn get_site_content(State(state): State<AppState>) -> Result<Json<SiteContent>> {
    let conn = state.db.get()?;
    Ok(Json(queries::get_site_content(&conn)?))
}

pub async fn get_vsl_config(State(state): State<AppState>) -> Result<Json<VslConfig>> {
    let conn = state.db.get()?;
    Ok(Json(queries::get_vsl_config(&conn)?))
}

pub async fn get_sections(State(state): State<AppState>) -> Result<Json<SectionsConfig>> {
    let conn = state.db.get()?;
    Ok(Json(queries::get_sections(&conn)?))
}

pub async fn get_sections_catalog(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionStatus>>> {
    let conn = state.db.get()?;
    let sections = queries::get_sections(&conn)?;
    Ok(Json(catalog(&sections)))
}
