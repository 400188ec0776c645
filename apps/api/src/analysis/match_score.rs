//! Parses the model's match-score reply into a Skill/Experience/Education breakdown.
//!
//! Labels are matched case-insensitively and markdown emphasis between the label
//! and the number is tolerated (`**Skill Match:** 85%`). The first percentage
//! after each label wins. When any of the three is missing, the raw reply is kept.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(skill|experience|education)\s+match\b[^0-9\n]*?(\d{1,3})\s*%")
        .expect("Invalid match score regex")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchScore {
    Breakdown {
        skill_match: u8,
        experience_match: u8,
        education_match: u8,
        /// Mean of the three, two decimals.
        overall_match: f64,
    },
    Unparsed {
        raw: String,
    },
}

impl MatchScore {
    pub fn parse(reply: &str) -> Self {
        let mut skill = None;
        let mut experience = None;
        let mut education = None;

        for caps in LABEL_PATTERN.captures_iter(reply) {
            let slot = match caps[1].to_ascii_lowercase().as_str() {
                "skill" => &mut skill,
                "experience" => &mut experience,
                _ => &mut education,
            };
            if slot.is_none() {
                *slot = caps[2].parse::<u16>().ok().map(|v| v.min(100) as u8);
            }
        }

        match (skill, experience, education) {
            (Some(skill_match), Some(experience_match), Some(education_match)) => {
                let mean = (skill_match as f64 + experience_match as f64 + education_match as f64)
                    / 3.0;
                MatchScore::Breakdown {
                    skill_match,
                    experience_match,
                    education_match,
                    overall_match: (mean * 100.0).round() / 100.0,
                }
            }
            _ => MatchScore::Unparsed {
                raw: reply.trim().to_string(),
            },
        }
    }

    pub fn overall(&self) -> Option<f64> {
        match self {
            MatchScore::Breakdown { overall_match, .. } => Some(*overall_match),
            MatchScore::Unparsed { .. } => None,
        }
    }
}
