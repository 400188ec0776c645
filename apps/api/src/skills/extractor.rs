//! Skill Extractor: finds which taxonomy skills literally appear in a text.
//!
//! Matching is case-insensitive and whole-word. The skill name is escaped, so
//! `C++`, `C#` and `.NET` match literally. A `\b` is required only on an edge where
//! the name has a word character: `Go` needs `\bGo\b`, `C++` needs `\bC\+\+`
//! (so "C++17" matches) and `.NET` needs `\.NET\b` (so "ASP.NET Core" matches).

use regex::Regex;

use crate::skills::models::{ExtractionResult, SkillSet};
use crate::skills::taxonomy::SkillTaxonomy;

/// Compiled whole-word, case-insensitive matcher for one skill name.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    pattern: Regex,
}

impl SkillMatcher {
    pub fn new(skill: &str) -> Result<Self, regex::Error> {
        let skill = skill.trim();
        let pattern = format!(
            r"(?i){}{}{}",
            edge_boundary(skill.chars().next()),
            regex::escape(skill),
            edge_boundary(skill.chars().next_back()),
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

fn edge_boundary(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    }
}

/// Returns, per category, the taxonomy skills present in `text`.
///
/// Blank text yields an empty result. Categories without matches are omitted.
pub fn extract(text: &str, taxonomy: &SkillTaxonomy) -> ExtractionResult {
    let mut result = ExtractionResult::new();
    if text.trim().is_empty() {
        return result;
    }

    for (category, skills) in taxonomy.categories() {
        let found: SkillSet = skills
            .iter()
            .filter(|skill| skill.is_present_in(text))
            .map(|skill| skill.name())
            .collect();
        result.insert(category, found);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::models::CategorySkills;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::from_rows([
            ("Python", "Programming"),
            ("Go", "Programming"),
            ("Rust", "Programming"),
            ("C++", "Programming"),
            ("C#", "Programming"),
            (".NET", "Frameworks"),
            ("machine learning", "Data Science"),
            ("SQL", "Databases"),
        ])
        .unwrap()
    }

    fn found(result: &ExtractionResult, category: &str) -> Vec<String> {
        match result.get(category) {
            Some(CategorySkills::Flat(skills)) => skills.iter().map(String::from).collect(),
            Some(other) => panic!("unexpected shape {other:?}"),
            None => vec![],
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = extract("I know PYTHON well", &taxonomy());
        assert_eq!(found(&result, "Programming"), vec!["Python"]);
    }

    #[test]
    fn test_lowercase_taxonomy_matches_uppercase_text() {
        let taxonomy = SkillTaxonomy::from_rows([("python", "Programming")]).unwrap();
        let result = extract("Senior PYTHON engineer", &taxonomy);
        assert_eq!(found(&result, "Programming"), vec!["python"]);
    }

    #[test]
    fn test_word_boundary_rejects_prefix_of_longer_word() {
        let result = extract("Gopher tunneling", &taxonomy());
        assert!(result.is_empty(), "got {result:?}");
    }

    #[test]
    fn test_word_boundary_accepts_standalone_word() {
        let result = extract("proficient in Go and Rust", &taxonomy());
        assert_eq!(found(&result, "Programming"), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_multi_word_phrase_is_order_sensitive() {
        let taxonomy = taxonomy();
        let hit = extract("experience with machine learning pipelines", &taxonomy);
        assert_eq!(found(&hit, "Data Science"), vec!["machine learning"]);

        let miss = extract("learning machine operations", &taxonomy);
        assert!(miss.get("Data Science").is_none());
    }

    #[test]
    fn test_special_character_skills_match_literally() {
        let result = extract("Built services in C++ and C#, deployed on .NET.", &taxonomy());
        assert_eq!(found(&result, "Programming"), vec!["C#", "C++"]);
        assert_eq!(found(&result, "Frameworks"), vec![".NET"]);
    }

    #[test]
    fn test_special_character_skills_do_not_match_neighbours() {
        let result = extract("Wrote plain C and some C+ pseudo code", &taxonomy());
        assert!(result.get("Programming").is_none(), "got {result:?}");

        let result = extract("ASP.NETCore", &taxonomy());
        assert!(result.get("Frameworks").is_none());
    }

    #[test]
    fn test_symbol_edge_needs_no_boundary() {
        let result = extract("Modern C++17 and C++20 developer", &taxonomy());
        assert_eq!(found(&result, "Programming"), vec!["C++"]);

        let result = extract("Built apps on ASP.NET Core", &taxonomy());
        assert_eq!(found(&result, "Frameworks"), vec![".NET"]);
    }

    #[test]
    fn test_word_edge_of_symbol_skill_keeps_boundary() {
        let taxonomy = taxonomy();
        assert!(extract("ASP.NETCore", &taxonomy).get("Frameworks").is_none());
        assert!(extract("AC++ toolkit", &taxonomy).get("Programming").is_none());
        assert!(extract("MC# scripts", &taxonomy).get("Programming").is_none());
    }

    #[test]
    fn test_match_at_text_edges_and_punctuation() {
        let result = extract("SQL", &taxonomy());
        assert_eq!(found(&result, "Databases"), vec!["SQL"]);

        let result = extract("(Rust)", &taxonomy());
        assert_eq!(found(&result, "Programming"), vec!["Rust"]);
    }

    #[test]
    fn test_blank_text_yields_empty_result() {
        assert!(extract("", &taxonomy()).is_empty());
        assert!(extract("   \n\t", &taxonomy()).is_empty());
    }

    #[test]
    fn test_categories_without_matches_are_absent() {
        let result = extract("Rust only", &taxonomy());
        assert_eq!(result.len(), 1);
        assert!(result.get("Databases").is_none());
        assert!(result.get("Data Science").is_none());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let taxonomy = taxonomy();
        let text = "Python, SQL and machine learning with C++";
        assert_eq!(extract(text, &taxonomy), extract(text, &taxonomy));
    }
}
