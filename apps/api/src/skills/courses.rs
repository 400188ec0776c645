//! Course Recommender: maps each missing skill to the first matching catalog courses.
//!
//! A course matches when its title or subtype contains the skill name as a
//! case-insensitive substring. Results follow catalog order; no other ranking.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::skills::models::MissingSkillMap;
use crate::skills::LoadError;

/// Upper bound on courses returned per skill.
pub const MAX_COURSES_PER_SKILL: usize = 3;

const SOURCE_NAME: &str = "course catalog";
const REQUIRED_COLUMNS: [&str; 3] = ["Title", "Subtype", "URL"];

#[derive(Debug, Deserialize)]
struct CourseRow {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Subtype", default)]
    subtype: String,
    #[serde(rename = "URL", default)]
    url: String,
}

/// One catalog entry. Lowercased copies are kept for matching.
#[derive(Debug, Clone)]
pub struct Course {
    pub title: String,
    pub url: String,
    title_lower: String,
    subtype_lower: String,
}

impl Course {
    pub fn new(title: impl Into<String>, subtype: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title_lower: title.to_lowercase(),
            subtype_lower: subtype.into().to_lowercase(),
            title,
            url: url.into(),
        }
    }

    /// `skill_lower` must already be lowercased.
    fn mentions(&self, skill_lower: &str) -> bool {
        self.title_lower.contains(skill_lower) || self.subtype_lower.contains(skill_lower)
    }
}

/// Ordered, read-only list of courses.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                source_name: SOURCE_NAME,
                path: path.display().to_string(),
            },
            _ => LoadError::Unreadable {
                source_name: SOURCE_NAME,
                message: format!("{}: {e}", path.display()),
            },
        })?;

        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), courses = catalog.len(), "Course catalog loaded");
        Ok(catalog)
    }

    /// Parses catalog CSV. `Title`, `Subtype` and `URL` are required; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv.headers().map_err(malformed)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::Malformed {
                    source_name: SOURCE_NAME,
                    message: format!("missing required column '{column}'"),
                });
            }
        }

        let courses = csv
            .deserialize::<CourseRow>()
            .map(|record| {
                record
                    .map(|row| Course::new(row.title, row.subtype, row.url))
                    .map_err(malformed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { courses })
    }

    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Courses mentioning `skill`, in catalog order.
    pub fn matching<'a>(&'a self, skill: &str) -> impl Iterator<Item = &'a Course> + 'a {
        let skill_lower = skill.trim().to_lowercase();
        self.courses
            .iter()
            .filter(move |course| !skill_lower.is_empty() && course.mentions(&skill_lower))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

fn malformed(e: csv::Error) -> LoadError {
    LoadError::Malformed {
        source_name: SOURCE_NAME,
        message: e.to_string(),
    }
}

/// A recommended course as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLink {
    pub title: String,
    pub url: String,
}

/// Skill → up to [`MAX_COURSES_PER_SKILL`] courses. Skills without matches are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecommendationMap {
    by_skill: BTreeMap<String, Vec<CourseLink>>,
}

impl RecommendationMap {
    pub fn get(&self, skill: &str) -> Option<&[CourseLink]> {
        self.by_skill.get(skill).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }
}

/// Finds up to three courses for every skill in `missing`, first match wins.
pub fn recommend(missing: &MissingSkillMap, catalog: &CourseCatalog) -> RecommendationMap {
    let mut by_skill = BTreeMap::new();

    for skill in missing.skills() {
        if by_skill.contains_key(skill) {
            continue;
        }
        let links: Vec<CourseLink> = catalog
            .matching(skill)
            .take(MAX_COURSES_PER_SKILL)
            .map(|course| CourseLink {
                title: course.title.clone(),
                url: course.url.clone(),
            })
            .collect();
        if !links.is_empty() {
            by_skill.insert(skill.to_string(), links);
        }
    }

    RecommendationMap { by_skill }
}
