use std::collections::HashSet;

/// Points awarded for full required-skill coverage.
pub const SKILL_BASE_MAX: f64 = 30.0;
/// One point per matched nice-to-have skill, capped here.
pub const NICE_TO_HAVE_BONUS_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillAssessment {
    pub score: f64,
    /// Matched required skills / required skills, in [0, 1].
    pub match_rate: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Normalizes a skill name for comparison: trimmed, lower-cased, punctuation
/// dropped except `+ # .` (which carry meaning in "C++", "C#", "Node.js").
/// Inner whitespace is kept, so "c + +" stays distinct from "c++".
pub fn normalize_skill_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '+' | '#' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Scores the candidate's skills against the job's required and nice-to-have lists.
///
/// A skill listed as both required and nice-to-have only counts as required.
pub fn assess_skills(
    required: &[String],
    nice_to_have: &[String],
    candidate_skills: &[String],
) -> SkillAssessment {
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| normalize_skill_name(s))
        .filter(|s| !s.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        let key = normalize_skill_name(skill);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if candidate.contains(&key) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let required_count = matched.len() + missing.len();
    let match_rate = if required_count == 0 {
        0.0
    } else {
        matched.len() as f64 / required_count as f64
    };

    let mut bonus_hits = 0usize;
    for skill in nice_to_have {
        let key = normalize_skill_name(skill);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if candidate.contains(&key) {
            bonus_hits += 1;
            matched.push(skill.clone());
        }
    }

    let bonus = (bonus_hits as f64).min(NICE_TO_HAVE_BONUS_MAX);

    SkillAssessment {
        score: match_rate * SKILL_BASE_MAX + bonus,
        match_rate,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_keeps_language_punctuation() {
        assert_eq!(normalize_skill_name("  C++ "), "c++");
        assert_eq!(normalize_skill_name("C#"), "c#");
        assert_eq!(normalize_skill_name("Node.js"), "node.js");
        assert_eq!(normalize_skill_name("(React)"), "react");
        assert_eq!(normalize_skill_name("CI/CD"), "cicd");
        assert_eq!(normalize_skill_name("c + +"), "c + +");
        assert_ne!(normalize_skill_name("c + +"), normalize_skill_name("C++"));
    }

    #[test]
    fn test_full_required_match_with_bonus() {
        let result = assess_skills(
            &strings(&["React", "Node.js", "MongoDB"]),
            &strings(&["AWS"]),
            &strings(&["JavaScript", "react", "node.js", "MongoDB", "AWS"]),
        );
        assert_eq!(result.score, 35.0);
        assert_eq!(result.match_rate, 1.0);
        assert_eq!(result.matched, vec!["React", "Node.js", "MongoDB", "AWS"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_partial_match_lists_missing_in_job_order() {
        let result = assess_skills(
            &strings(&["Python", "Django", "PostgreSQL", "Redis"]),
            &[],
            &strings(&["python", "postgresql"]),
        );
        assert_eq!(result.match_rate, 0.5);
        assert_eq!(result.score, 15.0);
        assert_eq!(result.missing, vec!["Django", "Redis"]);
    }

    #[test]
    fn test_no_required_skills_scores_only_bonus() {
        let result = assess_skills(&[], &strings(&["Docker", "AWS"]), &strings(&["docker"]));
        assert_eq!(result.match_rate, 0.0);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.matched, vec!["Docker"]);
    }

    #[test]
    fn test_bonus_capped_at_five() {
        let nice = strings(&["A", "B", "C", "D", "E", "F", "G"]);
        let result = assess_skills(&[], &nice, &nice);
        assert_eq!(result.score, NICE_TO_HAVE_BONUS_MAX);
    }

    #[test]
    fn test_overlap_between_required_and_nice_to_have_not_double_counted() {
        let result = assess_skills(
            &strings(&["AWS"]),
            &strings(&["aws", "Docker"]),
            &strings(&["AWS"]),
        );
        assert_eq!(result.score, 30.0);
        assert_eq!(result.matched, vec!["AWS"]);
    }

    #[test]
    fn test_duplicate_required_skills_count_once() {
        let result = assess_skills(
            &strings(&["Java", "java ", "Spring Boot"]),
            &[],
            &strings(&["Java"]),
        );
        assert_eq!(result.match_rate, 0.5);
        assert_eq!(result.missing, vec!["Spring Boot"]);
    }
}
