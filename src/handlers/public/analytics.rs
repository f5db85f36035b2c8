use axum::extract::State;
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::models::AnalyticsEvent;

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub message: String,
}

fn track(state: &AppState, event: AnalyticsEvent) -> Result<Json<TrackResponse>> {
    let conn = state.db.get()?;
    queries::increment_counter(&conn, event)?;
    Ok(Json(TrackResponse {
        message: format!("{} tracked", event.label()),
    }))
}

pub async fn track_page_view(State(state): State<AppState>) -> Result<Json<TrackResponse>> {
    track(&state, AnalyticsEvent::PageViews)
}

pub async fn track_video_view(State(state): State<AppState>) -> Result<Json<TrackResponse>> {
    track(&state, AnalyticsEvent::VideoViews)
}

pub async fn track_button_click(State(state): State<AppState>) -> Result<Json<TrackResponse>> {
    track(&state, AnalyticsEvent::ButtonClicks)
}
