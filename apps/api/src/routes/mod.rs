pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analysis;
use crate::ats::handlers::handle_ats_score;
use crate::resume_templates::handlers::handle_templates;
use crate::skills::handlers::handle_skill_gap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill gap (pure core, no generative calls)
        .route("/api/v1/skills/gap", post(handle_skill_gap))
        // Resume uploads
        .route("/api/v1/analysis", post(handle_analysis))
        .route("/api/v1/ats-score", post(handle_ats_score))
        .route("/api/v1/templates", post(handle_templates))
        .layer(body_limit)
        .with_state(state)
}
