use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::MatchError;
use crate::taxonomy::CategorizedSkillSet;

/// Pipeline status of a candidate record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Active,
    PendingReview,
    Shortlisted,
    Rejected,
    Hired,
    Inactive,
}

impl CandidateStatus {
    /// Statuses that make up the match pool.
    pub const ELIGIBLE: [CandidateStatus; 2] =
        [CandidateStatus::Active, CandidateStatus::PendingReview];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::PendingReview => "pending_review",
            CandidateStatus::Shortlisted => "shortlisted",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(CandidateStatus::Active),
            "pending_review" => Ok(CandidateStatus::PendingReview),
            "shortlisted" => Ok(CandidateStatus::Shortlisted),
            "rejected" => Ok(CandidateStatus::Rejected),
            "hired" => Ok(CandidateStatus::Hired),
            "inactive" => Ok(CandidateStatus::Inactive),
            other => Err(format!("unknown candidate status '{other}'")),
        }
    }
}

/// Seniority bucket derived from total years of experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn from_years(years: f64) -> Self {
        if years >= 8.0 {
            ExperienceLevel::Lead
        } else if years >= 5.0 {
            ExperienceLevel::Senior
        } else if years >= 2.0 {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Entry
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSkills {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub cloud_platforms: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl CandidateSkills {
    /// Flattened skill list, first occurrence wins (compared case-insensitively).
    pub fn all(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        [
            &self.primary,
            &self.secondary,
            &self.frameworks,
            &self.databases,
            &self.cloud_platforms,
            &self.tools,
        ]
        .into_iter()
        .flatten()
        .filter(|skill| !skill.trim().is_empty())
        .filter(|skill| seen.insert(skill.trim().to_lowercase()))
        .cloned()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Maps extraction buckets onto the stored profile layout.
    pub fn from_extracted(extracted: &CategorizedSkillSet) -> Self {
        let join = |parts: &[&Vec<String>]| -> Vec<String> {
            parts.iter().flat_map(|part| part.iter().cloned()).collect()
        };

        CandidateSkills {
            primary: extracted.programming_languages.clone(),
            secondary: Vec::new(),
            frameworks: join(&[
                &extracted.frontend_frameworks,
                &extracted.backend_frameworks,
                &extracted.mobile,
            ]),
            databases: extracted.databases.clone(),
            cloud_platforms: extracted.cloud_platforms.clone(),
            tools: join(&[&extracted.devops_tools, &extracted.data_ai]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalDetails {
    #[serde(default)]
    pub total_experience: f64,
    /// Free-text salary expectation, e.g. "12 LPA" or "$120,000".
    #[serde(default, rename = "expectedCTC")]
    pub expected_ctc: Option<String>,
}

/// Classifier output stored alongside the candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCategories {
    pub primary_category: String,
    #[serde(default)]
    pub specific_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_details: ProfessionalDetails,
    #[serde(default)]
    pub skills: CandidateSkills,
    #[serde(default)]
    pub categories: Option<CandidateCategories>,
    /// Extracted résumé body, forwarded to the semantic service.
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub status: CandidateStatus,
}

impl Candidate {
    /// Rejects records whose stored data cannot be scored.
    pub fn validate(&self) -> Result<(), MatchError> {
        let years = self.professional_details.total_experience;
        if !years.is_finite() || years < 0.0 {
            return Err(MatchError::Validation(format!(
                "candidate {} has invalid total experience {years}",
                self.id
            )));
        }
        Ok(())
    }
}
