//! Data models shared by extraction, gap resolution, and recommendation.
//!
//! Skill identity is case-insensitive everywhere: `SkillSet` keys on the lowercased
//! name and keeps the first display form it was given.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ────────────────────────────────────────────────────────────────────────────
// SkillSet
// ────────────────────────────────────────────────────────────────────────────

/// Set of skill names compared case-insensitively, iterated in lowercase order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    by_key: BTreeMap<String, String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a skill name. Blank names are ignored; an existing entry keeps its display form.
    /// Returns `true` if the skill was not already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let key = identity_key(name);
        if self.by_key.contains_key(&key) {
            return false;
        }
        self.by_key.insert(key, name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_key.contains_key(&identity_key(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Display names in case-insensitive lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_key.values().map(String::as_str)
    }

    /// `self − other`. Remaining names keep the display form from `self`.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            by_key: self
                .by_key
                .iter()
                .filter(|(key, _)| !other.by_key.contains_key(*key))
                .map(|(key, name)| (key.clone(), name.clone()))
                .collect(),
        }
    }

    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.by_key.keys().all(|key| other.by_key.contains_key(key))
    }

    /// Adds every skill of `other` not already present.
    pub fn union_with(&mut self, other: &SkillSet) {
        for (key, name) in &other.by_key {
            self.by_key
                .entry(key.clone())
                .or_insert_with(|| name.clone());
        }
    }
}

fn identity_key(name: &str) -> String {
    name.to_lowercase()
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl Serialize for SkillSet {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CategorySkills
// ────────────────────────────────────────────────────────────────────────────

/// The skills recorded under one category: either a flat set or a set per subcategory.
///
/// Serialized untagged, so `["Python"]` is `Flat` and `{"ML": ["PyTorch"]}` is `Nested`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySkills {
    Flat(SkillSet),
    Nested(BTreeMap<String, SkillSet>),
}

impl CategorySkills {
    /// A nested value with only empty subcategories is empty too.
    pub fn is_empty(&self) -> bool {
        match self {
            CategorySkills::Flat(skills) => skills.is_empty(),
            CategorySkills::Nested(subcategories) => subcategories.values().all(SkillSet::is_empty),
        }
    }

    /// Union of every skill in the category, regardless of shape.
    pub fn flatten(&self) -> SkillSet {
        match self {
            CategorySkills::Flat(skills) => skills.clone(),
            CategorySkills::Nested(subcategories) => {
                let mut all = SkillSet::new();
                for skills in subcategories.values() {
                    all.union_with(skills);
                }
                all
            }
        }
    }

    /// Drops empty subcategories. Returns `None` when nothing is left.
    fn pruned(self) -> Option<Self> {
        let pruned = match self {
            CategorySkills::Flat(skills) => CategorySkills::Flat(skills),
            CategorySkills::Nested(subcategories) => CategorySkills::Nested(
                subcategories
                    .into_iter()
                    .filter(|(_, skills)| !skills.is_empty())
                    .collect(),
            ),
        };
        (!pruned.is_empty()).then_some(pruned)
    }
}

impl From<SkillSet> for CategorySkills {
    fn from(skills: SkillSet) -> Self {
        CategorySkills::Flat(skills)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExtractionResult
// ────────────────────────────────────────────────────────────────────────────

/// Category → skills found in one text. Categories with no skills are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, CategorySkills>",
    into = "BTreeMap<String, CategorySkills>"
)]
pub struct ExtractionResult {
    categories: BTreeMap<String, CategorySkills>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `skills` under `category` unless it is empty. Replaces any previous value.
    pub fn insert(&mut self, category: impl Into<String>, skills: impl Into<CategorySkills>) {
        let category = category.into();
        match skills.into().pruned() {
            Some(skills) => {
                self.categories.insert(category, skills);
            }
            None => {
                self.categories.remove(&category);
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategorySkills> {
        self.categories.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySkills)> {
        self.categories
            .iter()
            .map(|(category, skills)| (category.as_str(), skills))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.categories
            .values()
            .map(|skills| skills.flatten().len())
            .sum()
    }
}

impl From<BTreeMap<String, CategorySkills>> for ExtractionResult {
    fn from(categories: BTreeMap<String, CategorySkills>) -> Self {
        let mut result = ExtractionResult::new();
        for (category, skills) in categories {
            result.insert(category, skills);
        }
        result
    }
}

impl From<ExtractionResult> for BTreeMap<String, CategorySkills> {
    fn from(result: ExtractionResult) -> Self {
        result.categories
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MissingSkillMap
// ────────────────────────────────────────────────────────────────────────────

/// Category → skills the job requires but the resume lacks. Never holds an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingSkillMap {
    categories: BTreeMap<String, SkillSet>,
}

impl MissingSkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, skills: SkillSet) {
        let category = category.into();
        if skills.is_empty() {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category, skills);
        }
    }

    pub fn get(&self, category: &str) -> Option<&SkillSet> {
        self.categories.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillSet)> {
        self.categories
            .iter()
            .map(|(category, skills)| (category.as_str(), skills))
    }

    /// Every missing skill name, category by category.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.categories.values().flat_map(SkillSet::iter)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_is_case_insensitive_and_keeps_first_display_form() {
        let mut set = SkillSet::new();
        assert!(set.insert("Python"));
        assert!(!set.insert("PYTHON"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("python"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Python"]);
    }

    #[test]
    fn test_skill_set_ignores_blank_names() {
        let set: SkillSet = ["", "   ", "SQL"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["SQL"]);
    }

    #[test]
    fn test_difference_keeps_left_display_form() {
        let required: SkillSet = ["Python", "SQL"].into_iter().collect();
        let available: SkillSet = ["python"].into_iter().collect();
        let diff = required.difference(&available);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec!["SQL"]);
        assert!(diff.is_subset(&required));
    }

    #[test]
    fn test_category_skills_untagged_shapes() {
        let flat: CategorySkills = serde_json::from_str(r#"["Python", "SQL"]"#).unwrap();
        assert!(matches!(flat, CategorySkills::Flat(ref s) if s.len() == 2));

        let nested: CategorySkills =
            serde_json::from_str(r#"{"ML": ["PyTorch"], "Stats": ["R"]}"#).unwrap();
        match &nested {
            CategorySkills::Nested(subs) => assert_eq!(subs.len(), 2),
            other => panic!("expected nested, got {other:?}"),
        }
        assert_eq!(nested.flatten().len(), 2);
    }

    #[test]
    fn test_extraction_result_never_stores_empty_categories() {
        let mut result = ExtractionResult::new();
        result.insert("Programming", SkillSet::new());
        result.insert(
            "Data",
            CategorySkills::Nested(BTreeMap::from([("ML".to_string(), SkillSet::new())])),
        );
        assert!(result.is_empty());

        result.insert("Programming", ["Rust"].into_iter().collect::<SkillSet>());
        assert_eq!(result.len(), 1);
        result.insert("Programming", SkillSet::new());
        assert!(result.get("Programming").is_none());
    }

    #[test]
    fn test_extraction_result_deserialize_prunes_empty_categories() {
        let result: ExtractionResult =
            serde_json::from_str(r#"{"Programming": ["Go"], "Cloud": [], "Data": {"ML": []}}"#)
                .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.skill_count(), 1);
    }

    #[test]
    fn test_missing_skill_map_serializes_as_plain_lists() {
        let mut missing = MissingSkillMap::new();
        missing.insert("Programming", ["SQL", "Go"].into_iter().collect());
        missing.insert("Cloud", SkillSet::new());
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(json, serde_json::json!({"Programming": ["Go", "SQL"]}));
    }
}
