use axum::extract::Extension;

use crate::extractors::Json;
use crate::middleware::AdminContext;
use crate::models::SessionInfo;

pub async fn me(Extension(ctx): Extension<AdminContext>) -> Json<SessionInfo> {
    Json(SessionInfo {
        username: ctx.username,
        is_admin: ctx.is_admin,
    })
}
