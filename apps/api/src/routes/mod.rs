pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats;
use crate::drafting;
use crate::state::AppState;

/// Uploaded resumes are small; 16 MiB leaves generous headroom for scans.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume builder
        .route("/api/v1/resumes/draft", post(drafting::handlers::handle_draft))
        .route(
            "/api/v1/resumes/export",
            post(drafting::handlers::handle_export),
        )
        // ATS scanner
        .route("/api/v1/ats/score", post(ats::handlers::handle_score))
        .route("/api/v1/ats/scan", post(ats::handlers::handle_scan))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
