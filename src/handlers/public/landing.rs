use axum::{
    extract::{Query, State},
    http::{HeaderMap, header::ACCEPT_LANGUAGE},
};
use serde::Deserialize;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::i18n;
use crate::landing::{self, LandingView};
use crate::models::AnalyticsEvent;

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

pub async fn get_landing(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
    headers: HeaderMap,
) -> Result<Json<LandingView>> {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let language = i18n::negotiate(query.lang.as_deref(), accept_language);

    let conn = state.db.get()?;
    if let Err(e) = queries::increment_counter(&conn, AnalyticsEvent::PageViews) {
        tracing::warn!("Failed to count landing page view: {}", e);
    }

    Ok(Json(landing::build(&conn, language)?))
}
