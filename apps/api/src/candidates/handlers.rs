//! Axum route handlers for the upload and candidate APIs.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::PathRejection, Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::candidates::models::{CandidateRecord, NewCandidate};
use crate::candidates::staging::stage_upload;
use crate::errors::AppError;
use crate::matching::extract::{DocumentFormat, UploadedDocument};
use crate::matching::run_pipeline;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub name: String,
    pub email: String,
    pub role: String,
    pub matched_keywords: Vec<String>,
    pub match_score: i32,
    pub candidate_id: i64,
    /// `false` when the results log could not be appended to.
    pub results_logged: bool,
}

#[derive(Debug, Deserialize)]
pub struct RoleFilter {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Default)]
struct UploadForm {
    resume: Option<(String, Bytes)>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    job_desc: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload
///
/// Multipart form: `resume` (PDF or DOCX), `name`, `email`, `role`, `job_desc`.
/// Scores the resume against the job description and records the result.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let (filename, bytes) = form
        .resume
        .ok_or_else(|| AppError::MissingInput("No resume file uploaded".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::MissingInput("No file selected".to_string()));
    }
    let format = DocumentFormat::from_filename(&filename)?;

    let name = required(form.name, "name")?;
    let email = required(form.email, "email")?;
    let role = required(form.role, "role")?;
    let job_desc = required(form.job_desc, "job_desc")?;

    stage_upload(&state.config.upload_dir, &filename, &bytes).await?;

    let document = UploadedDocument::new(bytes, format);
    let stopwords = Arc::clone(&state.stopwords);
    let result =
        tokio::task::spawn_blocking(move || run_pipeline(&document, &job_desc, &stopwords))
            .await
            .context("Matching task failed")??;

    let candidate = NewCandidate::from_match(name, email, role, &result);
    let outcome = state.recorder.record(&candidate).await;
    let record = outcome.store?;
    let results_logged = outcome.results_log.is_ok();

    info!(
        candidate_id = record.id,
        match_score = candidate.match_score,
        results_logged,
        "Candidate recorded"
    );

    Ok(Json(UploadResponse {
        name: candidate.name,
        email: candidate.email,
        role: candidate.role,
        matched_keywords: candidate.matched_keywords,
        match_score: candidate.match_score,
        candidate_id: record.id,
        results_logged,
    }))
}

/// GET /candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /candidates/filter?role=
///
/// Exact role match; a missing or empty role returns every candidate.
pub async fn handle_filter_candidates(
    State(state): State<AppState>,
    Query(filter): Query<RoleFilter>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.store.filter_by_role(&filter.role).await?))
}

/// DELETE /candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(id) = id?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Candidate {id} not found")));
    }

    info!(candidate_id = id, "Candidate deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Candidate deleted successfully".to_string(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Form parsing
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                form.resume = Some((filename, data));
            }
            "name" | "email" | "role" | "job_desc" => {
                let value = field.text().await?;
                let slot = match field_name.as_str() {
                    "name" => &mut form.name,
                    "email" => &mut form.email,
                    "role" => &mut form.role,
                    _ => &mut form.job_desc,
                };
                *slot = Some(value);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::MissingInput(format!("Missing required field '{field}'")))
}
