use axum::extract::State;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::models::{Ebook, ProductView};

/// Every ebook, including retired ones; the dashboard lists them all.
pub async fn list_ebooks(State(state): State<AppState>) -> Result<Json<Vec<Ebook>>> {
    let conn = state.db.get()?;
    Ok(Json(queries::list_ebooks(&conn)?))
}

pub async fn get_ebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ebook>> {
    let conn = state.db.get()?;
    let ebook = queries::get_ebook_by_id(&conn, &id)?
        .ok_or_else(|| AppError::NotFound("Ebook not found".into()))?;
    Ok(Json(ebook))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>> {
    let conn = state.db.get()?;
    let products = queries::list_enabled_ebooks(&conn)?
        .into_iter()
        .map(ProductView::from)
        .collect();
    Ok(Json(products))
}
