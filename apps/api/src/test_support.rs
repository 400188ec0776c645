//! Shared fixtures for handler and pipeline tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};

use crate::config::Config;
use crate::llm_client::{LlmError, NarrativeGenerator};
use crate::skills::courses::{Course, CourseCatalog};
use crate::skills::taxonomy::SkillTaxonomy;
use crate::skills::{LoadError, SkillEngine};
use crate::state::AppState;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Narrator that answers from a fixed list of `(prompt fragment, reply)` pairs
/// and records every prompt it receives.
#[derive(Default)]
pub struct StubNarrator {
    replies: Vec<(&'static str, &'static str)>,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl StubNarrator {
    pub fn replying(replies: &[(&'static str, &'static str)]) -> Self {
        Self {
            replies: replies.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeGenerator for StubNarrator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(LlmError::Api {
                status: 400,
                message: "API key not valid".to_string(),
            });
        }
        self.replies
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment))
            .map(|(_, reply)| reply.to_string())
            .ok_or(LlmError::EmptyContent)
    }
}

pub fn test_taxonomy() -> SkillTaxonomy {
    SkillTaxonomy::from_rows([
        ("Python", "Programming"),
        ("SQL", "Programming"),
        ("Go", "Programming"),
        ("Docker", "DevOps"),
        ("Kubernetes", "DevOps"),
        ("Communication", ""),
    ])
    .unwrap()
}

pub fn test_catalog() -> CourseCatalog {
    CourseCatalog::from_courses(vec![
        Course::new("SQL for Data Analysis", "Databases", "https://example.com/sql"),
        Course::new("Docker Mastery", "DevOps", "https://example.com/docker"),
        Course::new("Kubernetes in Practice", "DevOps", "https://example.com/k8s"),
    ])
}

pub fn test_engine(catalog: Result<CourseCatalog, LoadError>) -> SkillEngine {
    SkillEngine::from_sources(test_taxonomy(), catalog)
}

pub fn test_config() -> Config {
    Config {
        google_api_key: "test-key".to_string(),
        skills_csv_path: "skill.csv".to_string(),
        courses_csv_path: "udemy_courses.csv".to_string(),
        max_upload_bytes: 64 * 1024,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(narrator: Arc<dyn NarrativeGenerator>, skills: SkillEngine) -> AppState {
    AppState {
        config: test_config(),
        narrator,
        skills: Arc::new(skills),
    }
}

/// One part of a `multipart/form-data` body.
pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, bytes: &'a [u8] },
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, value: &'a str) -> Self {
        Part::Text { name, value }
    }

    pub fn file(name: &'a str, bytes: &'a [u8]) -> Self {
        Part::File { name, bytes }
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File { name, bytes } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"resume.pdf\"\r\n\
                         Content-Type: application/pdf\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}
