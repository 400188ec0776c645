//! Axum route handlers for the Templates API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::document::ResumeForm;
use crate::errors::AppError;
use crate::resume_templates::{generate_templates, TemplateSet};
use crate::state::AppState;

/// POST /api/v1/templates
///
/// Multipart: `resume` (PDF), `job_title`.
pub async fn handle_templates(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TemplateSet>, AppError> {
    let mut form = ResumeForm::read(multipart).await?;
    let job_title = form.require_field("job_title")?;
    let resume_text = form.resume_text().await?;
    Ok(Json(
        generate_templates(state.narrator.as_ref(), &job_title, &resume_text).await?,
    ))
}
