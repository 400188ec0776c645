// Prompt templates for resume analysis. Filled with `llm_client::prompts::fill_template`.

/// Placeholders: `{resume_text}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "Provide a **general summary** of the following resume:\n\n{resume_text}";

/// Placeholders: `{job_title}`, `{job_description}`, `{resume_text}`.
pub const SWOT_PROMPT_TEMPLATE: &str = "Analyze the following resume based on the job role and provide a SWOT analysis (Strengths, Weaknesses, Opportunities, and Threats):
**Job Title:** {job_title}
**Job Description:** {job_description}
**Resume:**
{resume_text}";

/// Placeholders: `{job_title}`, `{job_description}`, `{resume_text}`.
/// The three labels must stay in sync with `match_score::LABEL_PATTERN`.
pub const SCORE_PROMPT_TEMPLATE: &str = "Provide a **match score (0-100%)** evaluating:
- **Skill Match**
- **Experience Match**
- **Education Match**

**Job Title:** {job_title}
**Job Description:** {job_description}
**Resume:**
{resume_text}";
