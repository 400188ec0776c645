//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::ats::{check_ats, AtsReport};
use crate::document::ResumeForm;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/ats-score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let mut form = ResumeForm::read(multipart).await?;
    let resume_text = form.resume_text().await?;
    Ok(Json(check_ats(state.narrator.as_ref(), &resume_text).await?))
}
