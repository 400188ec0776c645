//! Axum route handlers for the Skill Gap API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::skills::SkillGapReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/v1/skills/gap
///
/// Literal skill matching only: no generative calls. An empty resume is valid
/// (every required skill is missing); an empty job description is rejected.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let skills = state.skills.clone();
    let report = tokio::task::spawn_blocking(move || {
        skills.analyze(&request.job_description, &request.resume_text)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in skill gap: {e}")))??;

    Ok(Json(report))
}
