use axum::extract::{Extension, State};
use rusqlite::Connection;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::middleware::AdminContext;
use crate::models::{CreateEbook, Ebook, ProductView, UpdateEbook};

fn create(conn: &Connection, ctx: &AdminContext, input: &CreateEbook) -> Result<Ebook> {
    input.validate()?;
    let ebook = queries::create_ebook(conn, input)?;
    tracing::info!("Ebook {} ({}) created by {}", ebook.id, ebook.title, ctx.username);
    Ok(ebook)
}

fn update(conn: &Connection, ctx: &AdminContext, id: &str, input: &UpdateEbook) -> Result<Ebook> {
    input.validate()?;
    if !queries::update_ebook(conn, id, input)? {
        return Err(AppError::NotFound("Ebook not found".into()));
    }
    let ebook = queries::get_ebook_by_id(conn, id)?
        .ok_or_else(|| AppError::NotFound("Ebook not found".into()))?;
    tracing::info!("Ebook {} updated by {}", ebook.id, ctx.username);
    Ok(ebook)
}

pub async fn create_ebook(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(input): Json<CreateEbook>,
) -> Result<Json<Ebook>> {
    let conn = state.db.get()?;
    Ok(Json(create(&conn, &ctx, &input)?))
}

pub async fn update_ebook(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEbook>,
) -> Result<Json<Ebook>> {
    let conn = state.db.get()?;
    Ok(Json(update(&conn, &ctx, &id, &input)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(input): Json<CreateEbook>,
) -> Result<Json<ProductView>> {
    let conn = state.db.get()?;
    Ok(Json(create(&conn, &ctx, &input)?.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEbook>,
) -> Result<Json<ProductView>> {
    let conn = state.db.get()?;
    Ok(Json(update(&conn, &ctx, &id, &input)?.into()))
}
