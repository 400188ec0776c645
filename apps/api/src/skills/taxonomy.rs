//! Skill Taxonomy: loads the categorized skill vocabulary from a `Skill,Subcategory` CSV.
//!
//! Each skill carries its compiled matcher so extraction never rebuilds patterns.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::skills::extractor::SkillMatcher;
use crate::skills::LoadError;

/// Category assigned to rows whose subcategory is blank.
pub const GENERAL_CATEGORY: &str = "General";

const SOURCE_NAME: &str = "skill taxonomy";
const REQUIRED_COLUMNS: [&str; 2] = ["Skill", "Subcategory"];

#[derive(Debug, Deserialize)]
struct SkillRow {
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Subcategory")]
    subcategory: String,
}

/// A taxonomy skill: display name plus its whole-word matcher.
#[derive(Debug, Clone)]
pub struct Skill {
    name: String,
    matcher: SkillMatcher,
}

impl Skill {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_present_in(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Category → skills. Immutable once built; every skill lives in exactly one category.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    categories: BTreeMap<String, Vec<Skill>>,
}

impl SkillTaxonomy {
    /// Loads the taxonomy from a CSV file on disk.
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

        let taxonomy = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            categories = taxonomy.category_count(),
            skills = taxonomy.skill_count(),
            "Skill taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Parses taxonomy CSV from any reader. Headers must include `Skill` and `Subcategory`.
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

        let mut rows = Vec::new();
        for record in csv.deserialize::<SkillRow>() {
            let row = record.map_err(malformed)?;
            rows.push((row.skill, row.subcategory));
        }

        Self::from_rows(rows)
    }

    /// Builds a taxonomy from `(skill, subcategory)` pairs.
    ///
    /// Blank subcategories map to [`GENERAL_CATEGORY`], blank skills are skipped, and a
    /// skill already seen (case-insensitively) keeps its first category.
    pub fn from_rows<I, S, C>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: AsRef<str>,
    {
        let mut categories: BTreeMap<String, Vec<Skill>> = BTreeMap::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for (skill, subcategory) in rows {
            let name = skill.as_ref().trim();
            if name.is_empty() {
                debug!("Skipping taxonomy row with blank skill name");
                continue;
            }

            let category = match subcategory.as_ref().trim() {
                "" => GENERAL_CATEGORY,
                other => other,
            };

            if let Some(existing) = seen.get(&name.to_lowercase()) {
                if existing != category {
                    warn!(
                        skill = name,
                        kept = %existing,
                        skipped = category,
                        "Skill listed under more than one category; keeping the first"
                    );
                }
                continue;
            }

            let matcher = SkillMatcher::new(name).map_err(|e| LoadError::Malformed {
                source_name: SOURCE_NAME,
                message: format!("cannot build matcher for skill '{name}': {e}"),
            })?;

            seen.insert(name.to_lowercase(), category.to_string());
            categories
                .entry(category.to_string())
                .or_default()
                .push(Skill {
                    name: name.to_string(),
                    matcher,
                });
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Skill])> {
        self.categories
            .iter()
            .map(|(category, skills)| (category.as_str(), skills.as_slice()))
    }

    pub fn category(&self, name: &str) -> Option<&[Skill]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn skill_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn malformed(e: csv::Error) -> LoadError {
    LoadError::Malformed {
        source_name: SOURCE_NAME,
        message: e.to_string(),
    }
}
