use axum::extract::State;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::models::ProofOfGains;

pub async fn list_proofs(State(state): State<AppState>) -> Result<Json<Vec<ProofOfGains>>> {
    let conn = state.db.get()?;
    Ok(Json(queries::list_proofs(&conn)?))
}

pub async fn get_proof(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProofOfGains>> {
    let conn = state.db.get()?;
    let proof = queries::get_proof_by_id(&conn, &id)?
        .ok_or_else(|| AppError::NotFound("Proof not found".into()))?;
    Ok(Json(proof))
}
