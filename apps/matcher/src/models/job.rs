use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the work happens. Drives the location sub-score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[default]
    #[serde(alias = "on-site", alias = "on_site")]
    Onsite,
    Remote,
    Hybrid,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Onsite => "onsite",
            LocationType::Remote => "remote",
            LocationType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "onsite" | "on-site" | "on_site" => Ok(LocationType::Onsite),
            "remote" => Ok(LocationType::Remote),
            "hybrid" => Ok(LocationType::Hybrid),
            other => Err(format!("unknown location type '{other}'")),
        }
    }
}

/// Accepted experience window in whole years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

/// A job posting, already structured by the ingestion layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default)]
    pub experience_years: ExperienceRange,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}
