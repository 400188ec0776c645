// Skill gap engine: taxonomy → extraction (JD, resume) → gap → course recommendations.
// Pure, synchronous code. The only shared state is the two load-once caches in `SkillEngine`.

pub mod courses;
pub mod engine;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod models;
pub mod taxonomy;

use thiserror::Error;

pub use engine::{SkillEngine, SkillGapReport};

/// Failure to load the skill taxonomy or the course catalog.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("{source_name} not found at {path}")]
    NotFound {
        source_name: &'static str,
        path: String,
    },

    #[error("{source_name} could not be read: {message}")]
    Unreadable {
        source_name: &'static str,
        message: String,
    },

    #[error("{source_name} is malformed: {message}")]
    Malformed {
        source_name: &'static str,
        message: String,
    },
}
