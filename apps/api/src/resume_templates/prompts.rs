// Prompt templates for resume template generation.
// Placeholders: `{job_title}`, `{resume_text}`.

pub const MODERN_PROMPT_TEMPLATE: &str = "Generate a **modern** resume template for the job title: {job_title}.
Highlight relevant skills and experiences from the following resume:

{resume_text}

The format should be ATS-friendly with sections: Summary, Skills, Experience, Education, and Certifications.";

pub const CREATIVE_PROMPT_TEMPLATE: &str = "Generate a **creative** resume template for the job title: {job_title}.
Use the following resume content as a base:

{resume_text}

The template should have a unique and engaging style while maintaining professionalism.";

pub const MINIMALIST_PROMPT_TEMPLATE: &str = "Generate a **minimalist** resume template for the job title: {job_title}.
Focus on clarity and conciseness using the content below:

{resume_text}

Keep the design simple, clean, and optimized for ATS.";
