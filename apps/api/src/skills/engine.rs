//! Skill Engine: owns the load-once taxonomy and catalog caches and runs the gap pipeline.
//!
//! Held in `AppState` as `Arc<SkillEngine>`; every request shares the same caches.
//! Both caches initialize at most once, on first use, and are read-only afterwards.
//!
//! - Taxonomy failures are returned to the caller and NOT cached: the next request retries.
//! - Catalog failures ARE cached: recommendations stay disabled for the process lifetime
//!   and each request gets a single notice instead of an error.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::skills::courses::{recommend, CourseCatalog, RecommendationMap};
use crate::skills::extractor::extract;
use crate::skills::gap::resolve;
use crate::skills::models::{ExtractionResult, MissingSkillMap};
use crate::skills::taxonomy::SkillTaxonomy;
use crate::skills::LoadError;

/// Full output of one skill gap analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapReport {
    pub required_skills: ExtractionResult,
    pub available_skills: ExtractionResult,
    pub missing_skills: MissingSkillMap,
    pub recommendations: RecommendationMap,
    /// Non-fatal problems worth showing to the user (e.g. catalog unavailable).
    pub notices: Vec<String>,
}

/// Recommendations plus at most one notice explaining why they are missing.
#[derive(Debug, Clone, Default)]
pub struct RecommendationOutcome {
    pub recommendations: RecommendationMap,
    pub notice: Option<String>,
}

pub struct SkillEngine {
    skills_path: PathBuf,
    courses_path: PathBuf,
    taxonomy: OnceCell<SkillTaxonomy>,
    catalog: OnceCell<Result<CourseCatalog, LoadError>>,
}

impl SkillEngine {
    /// Engine that loads both sources lazily from disk on first use.
    pub fn new(skills_path: impl Into<PathBuf>, courses_path: impl Into<PathBuf>) -> Self {
        Self {
            skills_path: skills_path.into(),
            courses_path: courses_path.into(),
            taxonomy: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    /// Engine with both caches already populated.
    pub fn from_sources(
        taxonomy: SkillTaxonomy,
        catalog: Result<CourseCatalog, LoadError>,
    ) -> Self {
        Self {
            skills_path: PathBuf::new(),
            courses_path: PathBuf::new(),
            taxonomy: OnceCell::with_value(taxonomy),
            catalog: OnceCell::with_value(catalog),
        }
    }

    pub fn taxonomy(&self) -> Result<&SkillTaxonomy, LoadError> {
        self.taxonomy
            .get_or_try_init(|| SkillTaxonomy::load(&self.skills_path))
            .map_err(|e| {
                error!(error = %e, "Skill taxonomy unavailable");
                e
            })
    }

    pub fn catalog(&self) -> Result<&CourseCatalog, &LoadError> {
        self.catalog
            .get_or_init(|| {
                CourseCatalog::load(&self.courses_path).map_err(|e| {
                    warn!(error = %e, "Course catalog unavailable; recommendations disabled");
                    e
                })
            })
            .as_ref()
    }

    /// Extracts skills from both texts, diffs them, and recommends courses for the gap.
    ///
    /// Fails only when the taxonomy cannot be loaded. Blank texts are valid input.
    pub fn analyze(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<SkillGapReport, LoadError> {
        let taxonomy = self.taxonomy()?;

        let required_skills = extract(job_description, taxonomy);
        let available_skills = extract(resume_text, taxonomy);
        let missing_skills = resolve(&required_skills, &available_skills);
        let outcome = self.recommend_courses(&missing_skills);

        debug!(
            required = required_skills.skill_count(),
            available = available_skills.skill_count(),
            missing_categories = missing_skills.len(),
            recommended = outcome.recommendations.len(),
            "Skill gap analysis complete"
        );

        Ok(SkillGapReport {
            required_skills,
            available_skills,
            missing_skills,
            recommendations: outcome.recommendations,
            notices: outcome.notice.into_iter().collect(),
        })
    }

    /// Never fails: an unavailable catalog yields empty recommendations and one notice.
    /// The catalog is not touched when nothing is missing.
    pub fn recommend_courses(&self, missing: &MissingSkillMap) -> RecommendationOutcome {
        if missing.is_empty() {
            return RecommendationOutcome::default();
        }

        match self.catalog() {
            Ok(catalog) => RecommendationOutcome {
                recommendations: recommend(missing, catalog),
                notice: None,
            },
            Err(e) => RecommendationOutcome {
                recommendations: RecommendationMap::default(),
                notice: Some(format!("Course recommendations unavailable: {e}")),
            },
        }
    }
}
