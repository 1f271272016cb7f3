pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes/parse",
            post(crate::extract::handlers::handle_parse),
        )
        .route(
            "/api/v1/resumes/validate",
            post(crate::validation::handlers::handle_validate),
        )
        .route(
            "/api/v1/resumes/fix",
            post(crate::validation::handlers::handle_fix),
        )
        .route(
            "/api/v1/resumes/paginate",
            post(crate::layout::handlers::handle_paginate),
        )
        // Targeting API
        .route(
            "/api/v1/targeting/match",
            post(crate::analysis::handlers::handle_targeting_match),
        )
        .with_state(state)
}
