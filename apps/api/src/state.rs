use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::NarrativeGenerator;
use crate::skills::SkillEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generative-text backend. Default: GeminiClient; tests swap in a stub.
    pub narrator: Arc<dyn NarrativeGenerator>,
    /// Skill taxonomy and course catalog, loaded lazily on first use.
    pub skills: Arc<SkillEngine>,
}
