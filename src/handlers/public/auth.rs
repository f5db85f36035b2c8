use axum::extract::State;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::Json;
use crate::models::{LoginRequest, LoginResponse};
use crate::password::verify_password;

const BAD_CREDENTIALS: &str = "Incorrect username or password";

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let admin = {
        let conn = state.db.get()?;
        queries::get_admin_by_username(&conn, &input.username)?
    };

    let Some(admin) = admin else {
        tracing::info!("Login rejected for unknown user {}", input.username);
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
    };

    if !verify_password(&input.password, &admin.password_hash)? {
        tracing::info!("Login rejected for {}: wrong password", admin.username);
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
    }

    let access_token = state
        .tokens
        .issue(&admin.username, admin.is_admin)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!("Admin {} logged in", admin.username);
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".into(),
        is_admin: admin.is_admin,
    }))
}
