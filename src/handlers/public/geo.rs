use axum::{extract::State, http::HeaderMap};

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::{Json, Path};
use crate::geo::{DetectedLocation, GeoResolver, Recommendation};
use crate::models::GeoConfig;

pub async fn get_geo_config(State(state): State<AppState>) -> Result<Json<GeoConfig>> {
    let conn = state.db.get()?;
    Ok(Json(queries::get_geo_config(&conn)?))
}

pub async fn recommended_platform(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Recommendation>> {
    let conn = state.db.get()?;
    let config = queries::get_geo_config(&conn)?;
    Ok(Json(GeoResolver::new(&config).recommend(&country)))
}

pub async fn detect_country(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DetectedLocation>> {
    let mut location = state.locator.locate(&headers).await;

    if location.country_name.is_empty() {
        let conn = state.db.get()?;
        let config = queries::get_geo_config(&conn)?;
        if let Some(name) = GeoResolver::new(&config).country_name(&location.country_code) {
            location.country_name = name.to_string();
        }
    }

    Ok(Json(location))
}
