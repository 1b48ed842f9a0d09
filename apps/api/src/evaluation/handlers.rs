//! HTTP handlers for the evaluation API.
//!
//! Thin glue: request shape checks live here, every evaluation invariant
//! lives in the core modules. The JSON response envelope doubles as the
//! export format consumed by report renderers.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::batch::{evaluate_batch, BatchProgress, MAX_BATCH_SIZE};
use crate::evaluation::orchestrator::evaluate;
use crate::evaluation::record::EvaluationRecord;
use crate::extraction::extract_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub resume_text: String,
    pub job_description: String,
    /// Optional upload name, used for filename-based name extraction.
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub record: EvaluationRecord,
}

/// POST /api/v1/evaluations
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let record = evaluate(
        state.scoring.as_ref(),
        &state.naming,
        &request.resume_text,
        &request.job_description,
        &request.filename,
    )
    .await;

    Ok(Json(EvaluateResponse {
        evaluation_id: Uuid::new_v4(),
        evaluated_at: Utc::now(),
        record,
    }))
}

/// A file the batch skipped because its text could not be extracted.
#[derive(Debug, Serialize)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct BatchEvaluateResponse {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub records: Vec<EvaluationRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// POST /api/v1/evaluations/batch
///
/// Multipart form: one `job_description` text field plus up to
/// `MAX_BATCH_SIZE` resume files. Files whose extraction fails are reported
/// in `skipped` and never abort the request.
pub async fn handle_evaluate_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchEvaluateResponse>, AppError> {
    let mut job_description = String::new();
    let mut candidates: Vec<(String, String)> = Vec::new();
    let mut skipped: Vec<SkippedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        if field.name() == Some("job_description") {
            job_description = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("unreadable job_description: {e}")))?;
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("unreadable upload {filename}: {e}")))?;

        match extract_text(&filename, &data) {
            Ok(text) => candidates.push((filename, text)),
            Err(e) => {
                warn!("skipping {filename}: {e}");
                skipped.push(SkippedFile {
                    filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "a non-empty job_description field is required".to_string(),
        ));
    }
    if candidates.is_empty() {
        return Err(AppError::Validation(
            "at least one readable resume file is required".to_string(),
        ));
    }
    if candidates.len() > MAX_BATCH_SIZE {
        return Err(AppError::Validation(format!(
            "batch size {} exceeds the {MAX_BATCH_SIZE}-candidate limit",
            candidates.len()
        )));
    }

    let progress = |p: BatchProgress| {
        info!(
            "batch progress: {}/{} ({:.0}%) after {}",
            p.completed,
            p.total,
            p.fraction() * 100.0,
            p.current
        );
    };

    let records = evaluate_batch(
        state.scoring.as_ref(),
        &state.naming,
        &candidates,
        &job_description,
        &progress,
    )
    .await;

    Ok(Json(BatchEvaluateResponse {
        evaluation_id: Uuid::new_v4(),
        evaluated_at: Utc::now(),
        records,
        skipped,
    }))
}
