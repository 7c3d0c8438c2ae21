//! Category classifier. Picks a candidate's dominant discipline from their skills.
//!
//! Every discipline is a declarative `{discipline, base_offset, representatives}`
//! entry scored the same way: `base_offset + SKILL_WEIGHT × matches`. Full Stack
//! is the one composite and only exists when both Frontend and Backend match.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::extractor::canonical_skill;
use super::CategorizedSkillSet;
use crate::models::{CandidateCategories, ExperienceLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    #[serde(rename = "Full Stack Development")]
    FullStack,
    #[serde(rename = "Backend Development")]
    Backend,
    #[serde(rename = "Frontend Development")]
    Frontend,
    #[serde(rename = "Mobile Development")]
    Mobile,
    #[serde(rename = "DevOps & Cloud")]
    DevopsCloud,
    #[serde(rename = "Data Science & AI")]
    DataAi,
    #[serde(rename = "Database")]
    Database,
    #[serde(rename = "Other")]
    Other,
}

impl Discipline {
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::FullStack => "Full Stack Development",
            Discipline::Backend => "Backend Development",
            Discipline::Frontend => "Frontend Development",
            Discipline::Mobile => "Mobile Development",
            Discipline::DevopsCloud => "DevOps & Cloud",
            Discipline::DataAi => "Data Science & AI",
            Discipline::Database => "Database",
            Discipline::Other => "Other",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ranked classifier result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMatch {
    pub category: Discipline,
    pub priority: u32,
    pub matched_skills: Vec<String>,
}

struct DisciplineRule {
    discipline: Discipline,
    base_offset: u32,
    representatives: &'static [&'static str],
}

const SKILL_WEIGHT: u32 = 2;

/// Base offset for Full Stack. Must stay above every single-discipline maximum.
const FULL_STACK_BASE: u32 = 100;

/// Declaration order doubles as the tie-break order.
const RULES: &[DisciplineRule] = &[
    DisciplineRule {
        discipline: Discipline::Backend,
        base_offset: 50,
        representatives: &[
            "Node.js", "Express", "NestJS", "Django", "Flask", "FastAPI", "Spring Boot",
            "ASP.NET", "Ruby on Rails", "Laravel", "GraphQL", "Java", "Go", "PHP", "Ruby", "C#",
        ],
    },
    DisciplineRule {
        discipline: Discipline::Frontend,
        base_offset: 45,
        representatives: &[
            "React", "Angular", "Vue.js", "Next.js", "Svelte", "HTML", "CSS", "Tailwind CSS",
            "Redux", "jQuery",
        ],
    },
    DisciplineRule {
        discipline: Discipline::Mobile,
        base_offset: 40,
        representatives: &[
            "React Native", "Flutter", "Android", "iOS", "Swift", "Kotlin", "Xamarin", "Ionic",
        ],
    },
    DisciplineRule {
        discipline: Discipline::DevopsCloud,
        base_offset: 35,
        representatives: &[
            "Docker", "Kubernetes", "Jenkins", "Terraform", "Ansible", "CI/CD", "Linux", "Nginx",
            "AWS", "Azure", "GCP", "Heroku", "DigitalOcean", "Vercel", "Netlify",
        ],
    },
    DisciplineRule {
        discipline: Discipline::DataAi,
        base_offset: 30,
        representatives: &[
            "Python", "R", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Pandas",
            "NumPy", "Scikit-learn", "NLP", "Computer Vision", "Data Analysis", "Spark",
        ],
    },
    DisciplineRule {
        discipline: Discipline::Database,
        base_offset: 25,
        representatives: &[
            "MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite", "Oracle", "SQL Server",
            "DynamoDB", "Cassandra", "Elasticsearch", "Firebase",
        ],
    },
];

/// Classifies an extracted skill set. Output is sorted by priority, highest first.
pub fn classify(skills: &CategorizedSkillSet) -> Vec<CategoryMatch> {
    classify_skill_names(skills.iter().map(|(_, skill)| skill))
}

/// Classifies any flat list of skill names. Names are canonicalized first, so
/// "reactjs" and "React" count the same.
pub fn classify_skill_names<'a, I>(skills: I) -> Vec<CategoryMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let canonical: Vec<String> = skills
        .into_iter()
        .map(|raw| {
            canonical_skill(raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.trim().to_string())
        })
        .filter(|skill| !skill.is_empty() && seen.insert(skill.to_lowercase()))
        .collect();

    let per_rule: Vec<(&DisciplineRule, Vec<String>)> = RULES
        .iter()
        .map(|rule| {
            let matched = canonical
                .iter()
                .filter(|skill| {
                    rule.representatives
                        .iter()
                        .any(|rep| rep.eq_ignore_ascii_case(skill))
                })
                .cloned()
                .collect();
            (rule, matched)
        })
        .collect();

    let frontend = matches_for(&per_rule, Discipline::Frontend);
    let backend = matches_for(&per_rule, Discipline::Backend);

    let mut results = Vec::new();

    if !frontend.is_empty() && !backend.is_empty() {
        let mut matched_skills = frontend.to_vec();
        matched_skills.extend(backend.iter().cloned());
        results.push(CategoryMatch {
            category: Discipline::FullStack,
            priority: FULL_STACK_BASE + (frontend.len() + backend.len()) as u32,
            matched_skills,
        });
    }

    for (rule, matched) in per_rule.iter().filter(|(_, m)| !m.is_empty()) {
        results.push(CategoryMatch {
            category: rule.discipline,
            priority: rule.base_offset + SKILL_WEIGHT * matched.len() as u32,
            matched_skills: matched.clone(),
        });
    }

    if results.is_empty() {
        return vec![CategoryMatch {
            category: Discipline::Other,
            priority: 0,
            matched_skills: Vec::new(),
        }];
    }

    // stable: equal priorities keep declaration order
    results.sort_by(|a, b| b.priority.cmp(&a.priority));
    results
}

fn matches_for<'r>(
    per_rule: &'r [(&DisciplineRule, Vec<String>)],
    discipline: Discipline,
) -> &'r [String] {
    per_rule
        .iter()
        .find(|(rule, _)| rule.discipline == discipline)
        .map(|(_, matched)| matched.as_slice())
        .unwrap_or(&[])
}

/// Builds the stored `categories` attribute for a candidate.
pub fn derive_categories<'a, I>(skills: I, total_experience: f64) -> CandidateCategories
where
    I: IntoIterator<Item = &'a str>,
{
    let ranked = classify_skill_names(skills);
    let (primary_category, specific_skills) = ranked
        .into_iter()
        .next()
        .map(|top| (top.category.name().to_string(), top.matched_skills))
        .unwrap_or_else(|| (Discipline::Other.name().to_string(), Vec::new()));

    CandidateCategories {
        primary_category,
        specific_skills,
        experience_level: ExperienceLevel::from_years(total_experience),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{extract_skills, SkillCategory};

    fn categories(result: &[CategoryMatch]) -> Vec<Discipline> {
        result.iter().map(|c| c.category).collect()
    }

    #[test]
    fn test_full_stack_ranks_first_when_frontend_and_backend_present() {
        let result = classify_skill_names(["React", "Node.js", "MongoDB", "Docker", "AWS"]);
        assert_eq!(result[0].category, Discipline::FullStack);
        assert_eq!(result[0].priority, FULL_STACK_BASE + 2);
        assert_eq!(result[0].matched_skills, vec!["React", "Node.js"]);
        assert_eq!(
            categories(&result),
            vec![
                Discipline::FullStack,
                Discipline::Backend,
                Discipline::Frontend,
                Discipline::DevopsCloud,
                Discipline::Database,
            ]
        );
    }

    #[test]
    fn test_full_stack_wins_for_every_frontend_backend_pair() {
        let frontend = RULES[1].representatives;
        let backend = RULES[0].representatives;
        for fe in frontend {
            for be in backend {
                // piling on many other skills must not unseat Full Stack
                let mut skills = vec![*fe, *be];
                skills.extend(RULES[3].representatives.iter().copied());
                skills.extend(RULES[4].representatives.iter().copied());
                let result = classify_skill_names(skills);
                assert_eq!(result[0].category, Discipline::FullStack, "{fe} + {be}");
            }
        }
    }

    #[test]
    fn test_full_stack_base_exceeds_single_discipline_maximum() {
        for rule in RULES {
            let max = rule.base_offset + SKILL_WEIGHT * rule.representatives.len() as u32;
            assert!(max < FULL_STACK_BASE, "{:?} can reach {max}", rule.discipline);
        }
    }

    #[test]
    fn test_base_order_respected_with_single_skill() {
        let result = classify_skill_names(["Flask", "React Native", "Pandas", "Redis"]);
        assert_eq!(
            categories(&result),
            vec![
                Discipline::Backend,
                Discipline::Mobile,
                Discipline::DataAi,
                Discipline::Database,
            ]
        );
    }

    #[test]
    fn test_more_matches_can_outrank_base_order() {
        // DevOps 35 + 2×4 = 43 beats Mobile 40 + 2×1 = 42
        let result =
            classify_skill_names(["Flutter", "Docker", "Kubernetes", "Terraform", "AWS"]);
        assert_eq!(result[0].category, Discipline::DevopsCloud);
        assert_eq!(result[0].priority, 43);
        assert_eq!(result[1].category, Discipline::Mobile);
        assert_eq!(result[1].priority, 42);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        // Mobile 40 + 2×1 = 42 ties Data & AI 30 + 2×6 = 42
        let result = classify_skill_names([
            "Flutter",
            "Pandas",
            "NumPy",
            "PyTorch",
            "TensorFlow",
            "NLP",
            "Spark",
        ]);
        assert_eq!(result[0].priority, result[1].priority);
        assert_eq!(result[0].category, Discipline::Mobile);
        assert_eq!(result[1].category, Discipline::DataAi);
    }

    #[test]
    fn test_aliases_are_canonicalized_before_matching() {
        let result = classify_skill_names(["reactjs", "k8s", "REACTJS"]);
        assert_eq!(result[0].category, Discipline::Frontend);
        assert_eq!(result[0].matched_skills, vec!["React"]);
        assert_eq!(result[1].matched_skills, vec!["Kubernetes"]);
    }

    #[test]
    fn test_no_matches_returns_other() {
        let result = classify_skill_names(["COBOL", "Excel"]);
        assert_eq!(
            result,
            vec![CategoryMatch {
                category: Discipline::Other,
                priority: 0,
                matched_skills: vec![],
            }]
        );
        assert_eq!(classify(&CategorizedSkillSet::default())[0].category, Discipline::Other);
    }

    #[test]
    fn test_classify_extracted_resume() {
        let skills = extract_skills("Kotlin and Swift developer shipping Android and iOS apps");
        assert!(skills.contains(SkillCategory::Mobile, "Android"));
        let result = classify(&skills);
        assert_eq!(result[0].category, Discipline::Mobile);
        assert_eq!(result[0].priority, 40 + 2 * 4);
    }

    #[test]
    fn test_derive_categories() {
        let cats = derive_categories(["Django", "PostgreSQL", "Docker"], 6.0);
        assert_eq!(cats.primary_category, "Backend Development");
        assert_eq!(cats.specific_skills, vec!["Django"]);
        assert_eq!(cats.experience_level, ExperienceLevel::Senior);

        let empty = derive_categories(std::iter::empty(), 0.5);
        assert_eq!(empty.primary_category, "Other");
        assert!(empty.specific_skills.is_empty());
        assert_eq!(empty.experience_level, ExperienceLevel::Entry);
    }

    #[test]
    fn test_discipline_serializes_as_display_name() {
        let json = serde_json::to_string(&Discipline::DevopsCloud).unwrap();
        assert_eq!(json, r#""DevOps & Cloud""#);
    }
}
