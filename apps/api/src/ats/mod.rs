//! ATS Check: compatibility score plus improvement suggestions for a resume.

pub mod handlers;
pub mod prompts;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::ats::prompts::{ATS_SCORE_PROMPT_TEMPLATE, IMPROVEMENT_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::NarrativeGenerator;

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})\s*%").expect("Invalid percentage regex"));

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    /// First percentage in the score reply, capped at 100. `None` if the reply has none.
    pub score: Option<u8>,
    pub score_text: String,
    pub suggestions: String,
}

pub async fn check_ats(
    narrator: &dyn NarrativeGenerator,
    resume_text: &str,
) -> Result<AtsReport, AppError> {
    let values = [("resume_text", resume_text)];
    let score_prompt = fill_template(ATS_SCORE_PROMPT_TEMPLATE, &values);
    let improvement_prompt = fill_template(IMPROVEMENT_PROMPT_TEMPLATE, &values);

    let (score_text, suggestions) = tokio::try_join!(
        narrator.generate(&score_prompt),
        narrator.generate(&improvement_prompt),
    )?;

    let score = parse_score(&score_text);
    info!(score = ?score, "ATS check complete");

    Ok(AtsReport {
        score,
        score_text,
        suggestions,
    })
}

pub fn parse_score(reply: &str) -> Option<u8> {
    PERCENTAGE
        .captures(reply)
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .map(|score| score.min(100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubNarrator;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("**ATS Score: 78%**"), Some(78));
        assert_eq!(parse_score("Score: 82 % (was 60%)"), Some(82));
        assert_eq!(parse_score("Overall 250%"), Some(100));
        assert_eq!(parse_score("Roughly seventy percent"), None);
    }

    #[tokio::test]
    async fn test_check_ats() {
        let narrator = StubNarrator::replying(&[
            ("provide a score", "Your resume scores 72% for ATS compatibility."),
            ("suggest 3-5", "1. Add a skills section.\n2. Use standard headings."),
        ]);

        let report = check_ats(&narrator, "Jane Doe\nPython developer").await.unwrap();

        assert_eq!(report.score, Some(72));
        assert!(report.score_text.contains("72%"));
        assert!(report.suggestions.starts_with("1. Add a skills section."));
        assert!(narrator
            .prompts()
            .iter()
            .all(|p| p.ends_with("Jane Doe\nPython developer")));
    }

    #[tokio::test]
    async fn test_check_ats_propagates_llm_errors() {
        let result = check_ats(&StubNarrator::failing(), "resume").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
