use axum::Json;

use crate::analysis::targeting::{match_against, TargetingReport, TargetingRequest};
use crate::errors::AppError;

/// POST /api/v1/targeting/match
pub async fn handle_targeting_match(
    Json(req): Json<TargetingRequest>,
) -> Result<Json<TargetingReport>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription must not be empty".to_string(),
        ));
    }
    let report = match_against(&req.resume, &req.job_description, &req.target_role);
    Ok(Json(report))
}
