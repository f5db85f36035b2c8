use axum::extract::State;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::models::{AnalyticsRecord, AnalyticsSummary};

pub async fn list_analytics(State(state): State<AppState>) -> Result<Json<Vec<AnalyticsRecord>>> {
    let conn = state.db.get()?;
    Ok(Json(queries::list_analytics(&conn)?))
}

pub async fn analytics_summary(State(state): State<AppState>) -> Result<Json<AnalyticsSummary>> {
    let conn = state.db.get()?;
    Ok(Json(queries::summarize_analytics(&conn)?))
}
