//! Development-only helpers. Mounted only when `VITRINE_ENV=dev`.

use axum::{Router, extract::State, routing::post};
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::password::hash_password;

pub const DEV_ADMIN_USERNAME: &str = "admin";
pub const DEV_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Serialize)]
pub struct InitAdminResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Create the well-known dev admin if no admin exists yet.
pub async fn init_admin(State(state): State<AppState>) -> Result<Json<InitAdminResponse>> {
    let conn = state.db.get()?;

    if queries::count_admins(&conn)? > 0 {
        return Ok(Json(InitAdminResponse {
            message: "Admin user already exists".into(),
            username: None,
        }));
    }

    let hash = hash_password(DEV_ADMIN_PASSWORD)?;
    let admin = queries::create_admin(&conn, DEV_ADMIN_USERNAME, &hash, true)?;
    tracing::warn!("DEV: Created admin '{}' with the default password", admin.username);

    Ok(Json(InitAdminResponse {
        message: "Admin user created".into(),
        username: Some(admin.username),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/init-admin", post(init_admin))
}
