use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{build_record, ResumeRecord};
use crate::intake::envelope::QueueBatch;
use crate::intake::pipeline::BatchSummary;
use crate::state::AppState;
use crate::store::StoredItem;

#[derive(Debug, Deserialize, Serialize)]
pub struct ExtractRequest {
    pub lines: Vec<String>,
}

/// POST /api/v1/intake/events
pub async fn handle_intake_events(
    State(state): State<AppState>,
    payload: Result<Json<QueueBatch>, JsonRejection>,
) -> Result<Json<BatchSummary>, AppError> {
    // Individual messages never fail decoding; only a non-batch payload lands here.
    let Json(batch) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Json(state.pipeline.process_batch(&batch).await))
}

/// POST /api/v1/extract
pub async fn handle_extract(Json(req): Json<ExtractRequest>) -> Json<ResumeRecord> {
    Json(build_record(&req.lines))
}

/// GET /api/v1/records/:id
pub async fn handle_get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredItem>, AppError> {
    let item = state
        .records
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Record {id} not found")))?;
    Ok(Json(item))
}
