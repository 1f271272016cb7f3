use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analysis::recompute_meta;
use crate::errors::AppError;
use crate::models::{CanonicalResume, ResumeMeta};
use crate::validation::{apply_fix, validate, ValidationIssue};

#[derive(Serialize)]
pub struct ValidateResponse {
    pub issues: Vec<ValidationIssue>,
    pub meta: ResumeMeta,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

#[derive(Deserialize)]
pub struct FixRequest {
    pub resume: CanonicalResume,
    pub field: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct FixResponse {
    pub resume: CanonicalResume,
    pub issues: Vec<ValidationIssue>,
}

/// POST /api/v1/resumes/validate
pub async fn handle_validate(
    Json(mut resume): Json<CanonicalResume>,
) -> Result<Json<ValidateResponse>, AppError> {
    let today = Utc::now().date_naive();
    recompute_meta(&mut resume, today);
    let issues = validate(&resume, today);
    let error_count = issues
        .iter()
        .filter(|i| i.severity == crate::validation::Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;
    Ok(Json(ValidateResponse {
        issues,
        meta: resume.meta,
        error_count,
        warning_count,
    }))
}

/// POST /api/v1/resumes/fix
pub async fn handle_fix(Json(req): Json<FixRequest>) -> Result<Json<FixResponse>, AppError> {
    let today = Utc::now().date_naive();
    let resume = apply_fix(req.resume, &req.field, &req.value, today)?;
    let issues = validate(&resume, today);
    Ok(Json(FixResponse { resume, issues }))
}
