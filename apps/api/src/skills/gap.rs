//! Gap Resolver: diffs required skills (job description) against available skills (resume).
//!
//! Both flat and nested category values are handled: nested values are diffed per
//! subcategory and the differences unioned into the category's missing set.

use std::borrow::Cow;

use crate::skills::models::{CategorySkills, ExtractionResult, MissingSkillMap, SkillSet};

/// Computes `required[c] − available[c]` for every category in `required`.
///
/// Categories only present in `available` are ignored. A category appears in the
/// output only when at least one skill is missing.
pub fn resolve(required: &ExtractionResult, available: &ExtractionResult) -> MissingSkillMap {
    let mut missing = MissingSkillMap::new();
    for (category, required_skills) in required.iter() {
        missing.insert(
            category,
            category_gap(required_skills, available.get(category)),
        );
    }
    missing
}

fn category_gap(required: &CategorySkills, available: Option<&CategorySkills>) -> SkillSet {
    let gap = match required {
        CategorySkills::Flat(required) => required.difference(&available_for(available, None)),
        CategorySkills::Nested(subcategories) => {
            let mut gap = SkillSet::new();
            for (subcategory, required) in subcategories {
                let covered = available_for(available, Some(subcategory.as_str()));
                gap.union_with(&required.difference(&covered));
            }
            gap
        }
    };
    debug_assert!(gap.is_subset(&required.flatten()));
    gap
}

/// The available skills a required set is compared against.
///
/// A flat value covers every subcategory; a nested value is looked up per subcategory,
/// or flattened when the required side is flat.
fn available_for<'a>(
    available: Option<&'a CategorySkills>,
    subcategory: Option<&str>,
) -> Cow<'a, SkillSet> {
    match (available, subcategory) {
        (None, _) => Cow::Owned(SkillSet::new()),
        (Some(CategorySkills::Flat(skills)), _) => Cow::Borrowed(skills),
        (Some(CategorySkills::Nested(subcategories)), Some(subcategory)) => subcategories
            .get(subcategory)
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(SkillSet::new())),
        (Some(nested @ CategorySkills::Nested(_)), None) => Cow::Owned(nested.flatten()),
    }
}
