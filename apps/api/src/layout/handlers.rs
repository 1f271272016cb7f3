use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::layout::{paginate, Page};
use crate::models::CanonicalResume;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PaginateResponse {
    pub pages: Vec<Page>,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
}

/// POST /api/v1/resumes/paginate
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(resume): Json<CanonicalResume>,
) -> Result<Json<PaginateResponse>, AppError> {
    let pages = paginate(&resume, &state.page_config);
    let page_count = pages.len();
    Ok(Json(PaginateResponse { pages, page_count }))
}
