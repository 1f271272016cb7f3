use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::analysis::recompute_meta;
use crate::errors::AppError;
use crate::extract::ExtractionOutcome;
use crate::layout::{paginate, Page};
use crate::pdf;
use crate::state::AppState;
use crate::validation::{validate, ValidationIssue};

#[derive(Serialize)]
pub struct ParseResponse {
    #[serde(flatten)]
    pub outcome: ExtractionOutcome,
    pub issues: Vec<ValidationIssue>,
    pub pages: Vec<Page>,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload with a `file` part holding the PDF, runs the
/// configured extraction engine, and returns the record together with its
/// validation issues and page layout so the editor can render in one round
/// trip.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
            bytes = Some(data.to_vec());
            break;
        }
    }
    let bytes =
        bytes.ok_or_else(|| AppError::InvalidUpload("Missing 'file' part".to_string()))?;

    let text = pdf::extract_text(&bytes, state.config.max_upload_bytes)?;
    let mut outcome = state.extractor.extract(&text).await?;

    let today = Utc::now().date_naive();
    recompute_meta(&mut outcome.resume, today);
    let issues = validate(&outcome.resume, today);
    let pages = paginate(&outcome.resume, &state.page_config);

    info!(
        engine = %outcome.engine,
        confidence = outcome.confidence,
        issues = issues.len(),
        pages = pages.len(),
        "resume parsed"
    );

    Ok(Json(ParseResponse {
        outcome,
        issues,
        pages,
    }))
}
