use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::db::{AppState, queries};
use crate::util::extract_bearer_token;

/// Authenticated dashboard user, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub username: String,
    pub is_admin: bool,
}

/// Verify the bearer token and check the account still exists.
fn authenticate_admin(state: &AppState, headers: &HeaderMap) -> Result<AdminContext, StatusCode> {
    let token = extract_bearer_token(headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let claims = state
        .tokens
        .verify(token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let conn = state
        .db
        .get()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let admin = queries::get_admin_by_username(&conn, &claims.username)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(AdminContext {
        username: admin.username,
        is_admin: admin.is_admin && claims.is_admin,
    })
}

pub async fn admin_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let ctx = authenticate_admin(&state, request.headers())?;
    if !ctx.is_admin {
        return Err(StatusCode::FORBIDDEN);
    }
    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}
