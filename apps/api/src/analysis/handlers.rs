//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analysis::{run_analysis, AnalysisReport, AnalysisRequest};
use crate::document::ResumeForm;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Multipart: `resume` (PDF), `job_title`, `job_description`.
pub async fn handle_analysis(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut form = ResumeForm::read(multipart).await?;
    let job_title = form.require_field("job_title")?;
    let job_description = form.require_field("job_description")?;
    let resume_text = form.resume_text().await?;

    let report = run_analysis(
        state.narrator.as_ref(),
        state.skills.clone(),
        AnalysisRequest {
            job_title,
            job_description,
            resume_text,
        },
    )
    .await?;

    Ok(Json(report))
}
