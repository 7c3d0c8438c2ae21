use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::MatchError;
use crate::models::{Candidate, CandidateStatus, Job};

/// Data access for the match engine. Pools arrive already scoped by the caller.
#[async_trait]
pub trait TalentRepository: Send + Sync {
    async fn fetch_job(&self, id: Uuid) -> Result<Job, MatchError>;

    async fn fetch_candidate(&self, id: Uuid) -> Result<Candidate, MatchError>;

    /// Candidates whose status is one of `statuses`, in storage order.
    async fn fetch_candidates(
        &self,
        statuses: &[CandidateStatus],
    ) -> Result<Vec<Candidate>, MatchError>;
}

/// Fixed in-memory data set. Candidates keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTalentRepository {
    jobs: HashMap<Uuid, Job>,
    candidates: Vec<Candidate>,
}

impl InMemoryTalentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.insert(job.id, job);
        self
    }

    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = Candidate>) -> Self {
        self.candidates.extend(candidates);
        self
    }
}

#[async_trait]
impl TalentRepository for InMemoryTalentRepository {
    async fn fetch_job(&self, id: Uuid) -> Result<Job, MatchError> {
        self.jobs
            .get(&id)
            .cloned()
            .ok_or_else(|| MatchError::NotFound(format!("Job {id} not found")))
    }

    async fn fetch_candidate(&self, id: Uuid) -> Result<Candidate, MatchError> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| MatchError::NotFound(format!("Candidate {id} not found")))
    }

    async fn fetch_candidates(
        &self,
        statuses: &[CandidateStatus],
    ) -> Result<Vec<Candidate>, MatchError> {
        Ok(self
            .candidates
            .iter()
            .filter(|c| statuses.contains(&c.status))
            .cloned()
            .collect())
    }
}
