//! Skill taxonomy: canonical skills, their aliases and categories.
//!
//! The dictionary is plain data (`dictionary::SKILL_TAXONOMY`); extraction and
//! classification are pure functions over it.

pub mod classifier;
pub mod dictionary;
pub mod extractor;

use serde::{Deserialize, Serialize};

pub use classifier::{
    classify, classify_skill_names, derive_categories, CategoryMatch, Discipline,
};
pub use dictionary::SKILL_TAXONOMY;
pub use extractor::{canonical_skill, extract_skills};

/// Extraction buckets a canonical skill can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguages,
    FrontendFrameworks,
    BackendFrameworks,
    Databases,
    CloudPlatforms,
    DevopsTools,
    Mobile,
    DataAi,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::FrontendFrameworks,
        SkillCategory::BackendFrameworks,
        SkillCategory::Databases,
        SkillCategory::CloudPlatforms,
        SkillCategory::DevopsTools,
        SkillCategory::Mobile,
        SkillCategory::DataAi,
    ];
}

/// One canonical skill and the lower-cased keywords that identify it in raw text.
#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub canonical: &'static str,
    pub category: SkillCategory,
    pub aliases: &'static [&'static str],
}

/// Extracted skills grouped by category. Each list holds a canonical skill at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedSkillSet {
    #[serde(default)]
    pub programming_languages: Vec<String>,
    #[serde(default)]
    pub frontend_frameworks: Vec<String>,
    #[serde(default)]
    pub backend_frameworks: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub cloud_platforms: Vec<String>,
    #[serde(default)]
    pub devops_tools: Vec<String>,
    #[serde(default)]
    pub mobile: Vec<String>,
    #[serde(default)]
    pub data_ai: Vec<String>,
}

impl CategorizedSkillSet {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::ProgrammingLanguages => &self.programming_languages,
            SkillCategory::FrontendFrameworks => &self.frontend_frameworks,
            SkillCategory::BackendFrameworks => &self.backend_frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::CloudPlatforms => &self.cloud_platforms,
            SkillCategory::DevopsTools => &self.devops_tools,
            SkillCategory::Mobile => &self.mobile,
            SkillCategory::DataAi => &self.data_ai,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::ProgrammingLanguages => &mut self.programming_languages,
            SkillCategory::FrontendFrameworks => &mut self.frontend_frameworks,
            SkillCategory::BackendFrameworks => &mut self.backend_frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::CloudPlatforms => &mut self.cloud_platforms,
            SkillCategory::DevopsTools => &mut self.devops_tools,
            SkillCategory::Mobile => &mut self.mobile,
            SkillCategory::DataAi => &mut self.data_ai,
        }
    }

    /// Adds `skill` to `category` unless already present. Returns whether it was added.
    pub fn insert(&mut self, category: SkillCategory, skill: &str) -> bool {
        let bucket = self.get_mut(category);
        if bucket.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            return false;
        }
        bucket.push(skill.to_string());
        true
    }

    pub fn contains(&self, category: SkillCategory, skill: &str) -> bool {
        self.get(category).iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Every `(category, skill)` pair in category order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &str)> + '_ {
        SkillCategory::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |skill| (category, skill.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_case_insensitively() {
        let mut set = CategorizedSkillSet::default();
        assert!(set.insert(SkillCategory::Databases, "MongoDB"));
        assert!(!set.insert(SkillCategory::Databases, "mongodb"));
        assert!(set.insert(SkillCategory::CloudPlatforms, "AWS"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(SkillCategory::Databases, "MONGODB"));
    }

    #[test]
    fn test_iter_follows_category_order() {
        let mut set = CategorizedSkillSet::default();
        set.insert(SkillCategory::DataAi, "PyTorch");
        set.insert(SkillCategory::ProgrammingLanguages, "Python");
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (SkillCategory::ProgrammingLanguages, "Python"),
                (SkillCategory::DataAi, "PyTorch"),
            ]
        );
    }
}
