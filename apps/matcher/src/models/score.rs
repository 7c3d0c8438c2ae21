use serde::{Deserialize, Serialize};

/// Qualitative band derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Recommendation {
    /// Thresholds apply to whatever the final overall is, semantic boost included.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 80.0 {
            Recommendation::Excellent
        } else if overall >= 65.0 {
            Recommendation::Good
        } else if overall >= 50.0 {
            Recommendation::Fair
        } else {
            Recommendation::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceStatus {
    Perfect,
    Underqualified,
    Overqualified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryAlignment {
    Perfect,
    Negotiable,
    Challenging,
    Misaligned,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub salary_match: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_match: Option<f64>,
}

impl ScoreBreakdown {
    /// Sum of the four deterministic sub-scores.
    pub fn base_total(&self) -> f64 {
        self.skill_match + self.experience_match + self.location_match + self.salary_match
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Required-skill coverage as a percentage.
    pub skill_match_rate: f64,
    pub experience_status: ExperienceStatus,
    pub location_compatible: bool,
    pub salary_alignment: SalaryAlignment,
    pub ai_enhanced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_similarity: Option<f64>,
}

/// Explainable score of one job against one candidate.
///
/// Never mutated once built: augmentation produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Negative when short of the job minimum, positive beyond the maximum.
    pub experience_gap: f64,
    pub recommendation: Recommendation,
    pub details: MatchDetails,
}

impl MatchScore {
    /// Returns a copy carrying `semantic_points` on top of the base sub-scores.
    pub fn with_semantic(&self, semantic_points: f64, similarity: f64) -> MatchScore {
        let overall = self.breakdown.base_total() + semantic_points;
        MatchScore {
            overall,
            breakdown: ScoreBreakdown {
                semantic_match: Some(semantic_points),
                ..self.breakdown.clone()
            },
            recommendation: Recommendation::from_overall(overall),
            details: MatchDetails {
                ai_enhanced: true,
                semantic_similarity: Some(similarity),
                ..self.details.clone()
            },
            ..self.clone()
        }
    }
}
