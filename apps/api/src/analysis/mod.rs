//! Resume Analysis: orchestrates the full analysis pipeline.
//!
//! Flow: summary ┐
//!       SWOT    ├─ concurrent → parse match score → fit message → report
//!       score   │
//!       skill gap (blocking pool) ┘
//!
//! Any narrative failure or an unavailable taxonomy fails the whole request.
//! An unavailable course catalog only adds a notice to the skill gap.

pub mod handlers;
pub mod match_score;
pub mod prompts;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::match_score::MatchScore;
use crate::analysis::prompts::{
    SCORE_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE, SWOT_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::NarrativeGenerator;
use crate::skills::{SkillEngine, SkillGapReport};

pub const GREAT_FIT_MESSAGE: &str = "No missing skills! You are a great fit!";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_title: String,
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub job_title: String,
    pub summary: String,
    pub swot: String,
    pub match_score: MatchScore,
    pub skill_gap: SkillGapReport,
    /// Set only when no required skill is missing.
    pub fit_message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub async fn run_analysis(
    narrator: &dyn NarrativeGenerator,
    skills: Arc<SkillEngine>,
    request: AnalysisRequest,
) -> Result<AnalysisReport, AppError> {
    let values = [
        ("job_title", request.job_title.as_str()),
        ("job_description", request.job_description.as_str()),
        ("resume_text", request.resume_text.as_str()),
    ];
    let summary_prompt = fill_template(SUMMARY_PROMPT_TEMPLATE, &values);
    let swot_prompt = fill_template(SWOT_PROMPT_TEMPLATE, &values);
    let score_prompt = fill_template(SCORE_PROMPT_TEMPLATE, &values);

    let job_description = request.job_description.clone();
    let resume_text = request.resume_text.clone();
    let skill_gap = async move {
        tokio::task::spawn_blocking(move || skills.analyze(&job_description, &resume_text))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}"))
            })?
            .map_err(AppError::from)
    };

    let (summary, swot, score_reply, skill_gap) = tokio::try_join!(
        async { narrator.generate(&summary_prompt).await.map_err(AppError::from) },
        async { narrator.generate(&swot_prompt).await.map_err(AppError::from) },
        async { narrator.generate(&score_prompt).await.map_err(AppError::from) },
        skill_gap,
    )?;

    let match_score = MatchScore::parse(&score_reply);
    let fit_message = skill_gap
        .missing_skills
        .is_empty()
        .then(|| GREAT_FIT_MESSAGE.to_string());

    info!(
        job_title = %request.job_title,
        overall_match = ?match_score.overall(),
        missing_categories = skill_gap.missing_skills.len(),
        "Resume analysis complete"
    );

    Ok(AnalysisReport {
        job_title: request.job_title,
        summary,
        swot,
        match_score,
        skill_gap,
        fit_message,
        generated_at: Utc::now(),
    })
}
