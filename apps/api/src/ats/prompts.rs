// Prompt templates for the ATS check. Placeholders: `{resume_text}`.

pub const ATS_SCORE_PROMPT_TEMPLATE: &str =
    "Evaluate this resume for ATS compatibility and provide a score (0-100%).\n\n{resume_text}";

pub const IMPROVEMENT_PROMPT_TEMPLATE: &str =
    "Analyze this resume and suggest 3-5 key improvements to increase its ATS compatibility.\n\n{resume_text}";
