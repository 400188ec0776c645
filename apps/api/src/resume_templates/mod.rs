//! Resume Templates: rewrites a resume in three styles for a target job title.

pub mod handlers;
pub mod prompts;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::NarrativeGenerator;
use crate::resume_templates::prompts::{
    CREATIVE_PROMPT_TEMPLATE, MINIMALIST_PROMPT_TEMPLATE, MODERN_PROMPT_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStyle {
    Modern,
    Creative,
    Minimalist,
}

impl TemplateStyle {
    /// Response order.
    pub const ALL: [TemplateStyle; 3] = [
        TemplateStyle::Modern,
        TemplateStyle::Creative,
        TemplateStyle::Minimalist,
    ];

    fn prompt_template(self) -> &'static str {
        match self {
            TemplateStyle::Modern => MODERN_PROMPT_TEMPLATE,
            TemplateStyle::Creative => CREATIVE_PROMPT_TEMPLATE,
            TemplateStyle::Minimalist => MINIMALIST_PROMPT_TEMPLATE,
        }
    }

    pub fn prompt(self, job_title: &str, resume_text: &str) -> String {
        fill_template(
            self.prompt_template(),
            &[("job_title", job_title), ("resume_text", resume_text)],
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeTemplate {
    pub style: TemplateStyle,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSet {
    pub job_title: String,
    pub templates: Vec<ResumeTemplate>,
}

/// Generates all three styles concurrently; any failure fails the set.
pub async fn generate_templates(
    narrator: &dyn NarrativeGenerator,
    job_title: &str,
    resume_text: &str,
) -> Result<TemplateSet, AppError> {
    let [modern_prompt, creative_prompt, minimalist_prompt] =
        TemplateStyle::ALL.map(|style| style.prompt(job_title, resume_text));

    let (modern, creative, minimalist) = tokio::try_join!(
        narrator.generate(&modern_prompt),
        narrator.generate(&creative_prompt),
        narrator.generate(&minimalist_prompt),
    )?;

    let templates: Vec<ResumeTemplate> = TemplateStyle::ALL
        .into_iter()
        .zip([modern, creative, minimalist])
        .map(|(style, content)| ResumeTemplate { style, content })
        .collect();

    info!(job_title, count = templates.len(), "Resume templates generated");

    Ok(TemplateSet {
        job_title: job_title.to_string(),
        templates,
    })
}
