//! Postgres-backed `TalentRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::{debug, warn};
use uuid::Uuid;

use super::repository::TalentRepository;
use crate::errors::MatchError;
use crate::models::{
    Candidate, CandidateCategories, CandidateSkills, CandidateStatus, ExperienceRange, Job,
    LocationType, PersonalInfo, ProfessionalDetails, SalaryRange,
};

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub experience_min: i32,
    pub experience_max: i32,
    pub location: String,
    pub location_type: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn into_domain(self) -> Result<Job, String> {
        let location_type: LocationType = self.location_type.parse()?;
        let experience_years = ExperienceRange {
            min: u32::try_from(self.experience_min)
                .map_err(|_| format!("negative experience_min {}", self.experience_min))?,
            max: u32::try_from(self.experience_max)
                .map_err(|_| format!("negative experience_max {}", self.experience_max))?,
        };
        let salary_range = match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(SalaryRange {
                min: u64::try_from(min).map_err(|_| format!("negative salary_min {min}"))?,
                max: u64::try_from(max).map_err(|_| format!("negative salary_max {max}"))?,
                currency: self.salary_currency.unwrap_or_default(),
            }),
            _ => None,
        };

        Ok(Job {
            id: self.id,
            title: self.title,
            company: self.company,
            description: self.description,
            required_skills: self.required_skills,
            nice_to_have_skills: self.nice_to_have_skills,
            experience_years,
            location: self.location,
            location_type,
            salary_range,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub total_experience: f64,
    pub expected_ctc: Option<String>,
    pub skills: Value,
    pub categories: Option<Value>,
    pub resume_text: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl CandidateRow {
    pub fn into_domain(self) -> Result<Candidate, String> {
        let skills: CandidateSkills = serde_json::from_value(self.skills)
            .map_err(|e| format!("invalid skills JSON: {e}"))?;
        let categories = self
            .categories
            .filter(|value| !value.is_null())
            .map(serde_json::from_value::<CandidateCategories>)
            .transpose()
            .map_err(|e| format!("invalid categories JSON: {e}"))?;
        let status: CandidateStatus = self.status.parse()?;

        Ok(Candidate {
            id: self.id,
            personal_info: PersonalInfo {
                full_name: self.full_name,
                email: self.email,
                location: self.location,
            },
            professional_details: ProfessionalDetails {
                total_experience: self.total_experience,
                expected_ctc: self.expected_ctc,
            },
            skills,
            categories,
            resume_text: self.resume_text,
            status,
        })
    }
}

#[derive(Clone)]
pub struct PgTalentRepository {
    pool: PgPool,
}

impl PgTalentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TalentRepository for PgTalentRepository {
    async fn fetch_job(&self, id: Uuid) -> Result<Job, MatchError> {
        let row: JobRow = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| MatchError::NotFound(format!("Job {id} not found")))?;

        row.into_domain()
            .map_err(|e| MatchError::Validation(format!("job {id}: {e}")))
    }

    async fn fetch_candidate(&self, id: Uuid) -> Result<Candidate, MatchError> {
        let row: CandidateRow = sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| MatchError::NotFound(format!("Candidate {id} not found")))?;

        row.into_domain()
            .map_err(|e| MatchError::Validation(format!("candidate {id}: {e}")))
    }

    async fn fetch_candidates(
        &self,
        statuses: &[CandidateStatus],
    ) -> Result<Vec<Candidate>, MatchError> {
        let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();

        let rows: Vec<CandidateRow> = sqlx::query_as(
            r#"
            SELECT * FROM candidates
            WHERE status = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&statuses)
        .fetch_all(&self.pool)
        .await?;

        let total = rows.len();
        let candidates: Vec<Candidate> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match row.into_domain() {
                    Ok(candidate) => Some(candidate),
                    Err(e) => {
                        warn!("Skipping undecodable candidate row {}: {}", id, e);
                        None
                    }
                }
            })
            .collect();

        debug!("Loaded {}/{} candidate rows", candidates.len(), total);
        Ok(candidates)
    }
}
