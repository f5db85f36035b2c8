use axum::extract::{Extension, State};
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::middleware::AdminContext;
use crate::models::{CreateProof, ProofOfGains, UpdateProof};

#[derive(Debug, Serialize)]
pub struct DeleteProofResponse {
    pub message: String,
}

pub async fn create_proof(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Json(input): Json<CreateProof>,
) -> Result<Json<ProofOfGains>> {
    input.validate()?;
    let conn = state.db.get()?;
    let proof = queries::create_proof(&conn, &input)?;
    tracing::info!("Proof {} created by {}", proof.id, ctx.username);
    Ok(Json(proof))
}

pub async fn update_proof(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProof>,
) -> Result<Json<ProofOfGains>> {
    input.validate()?;
    let conn = state.db.get()?;
    if !queries::update_proof(&conn, &id, &input)? {
        return Err(AppError::NotFound("Proof not found".into()));
    }
    let proof = queries::get_proof_by_id(&conn, &id)?
        .ok_or_else(|| AppError::NotFound("Proof not found".into()))?;
    tracing::info!("Proof {} updated by {}", proof.id, ctx.username);
    Ok(Json(proof))
}

pub async fn delete_proof(
    State(state): State<AppState>,
    Extension(ctx): Extension<AdminContext>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProofResponse>> {
    let conn = state.db.get()?;
    if !queries::delete_proof(&conn, &id)? {
        return Err(AppError::NotFound("Proof not found".into()));
    }
    tracing::info!("Proof {} deleted by {}", id, ctx.username);
    Ok(Json(DeleteProofResponse {
        message: "Proof deleted".into(),
    }))
}
