//! Candidate search for a job: fetch, score, filter, sort, truncate.
//!
//! `MatchEngine` holds the two injected collaborators (`TalentRepository`
//! and `SemanticAugmenter`) and is the entry point callers use.

pub mod postgres;
pub mod repository;

pub use postgres::PgTalentRepository;
pub use repository::{InMemoryTalentRepository, TalentRepository};

use std::sync::Arc;

use anyhow::Context;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::errors::MatchError;
use crate::models::{Candidate, CandidateStatus, Job, MatchScore};
use crate::scoring;
use crate::semantic::{AugmenterSettings, HttpSemanticClient, SemanticAugmenter};

const MAX_DB_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub limit: usize,
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_score: 40.0,
        }
    }
}

impl SearchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            limit: config.default_limit,
            min_score: config.default_min_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMatch {
    pub candidate: Candidate,
    pub match_score: MatchScore,
}

pub struct MatchEngine {
    repository: Arc<dyn TalentRepository>,
    augmenter: Arc<SemanticAugmenter>,
    concurrency: usize,
}

impl MatchEngine {
    pub fn new(
        repository: Arc<dyn TalentRepository>,
        augmenter: Arc<SemanticAugmenter>,
        concurrency: usize,
    ) -> Self {
        Self {
            repository,
            augmenter,
            concurrency: concurrency.max(1),
        }
    }

    /// Wires the Postgres repository and, when configured, the HTTP semantic client.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database_url, MAX_DB_CONNECTIONS).await?;
        init_schema(&pool).await?;
        let repository = Arc::new(PgTalentRepository::new(pool));

        let augmenter = match &config.semantic_service_url {
            Some(url) => {
                let client = HttpSemanticClient::new(
                    url.as_str(),
                    config.semantic_health_timeout,
                    config.semantic_match_timeout,
                )
                .context("Failed to build semantic service HTTP client")?;
                info!("Semantic service configured at {}", client.base_url());
                SemanticAugmenter::connect(Arc::new(client), AugmenterSettings::from_config(config))
                    .await
            }
            None => {
                info!("SEMANTIC_SERVICE_URL not set, semantic augmentation disabled");
                SemanticAugmenter::disabled()
            }
        };

        Ok(Self::new(
            repository,
            Arc::new(augmenter),
            config.ranking_concurrency,
        ))
    }

    pub fn augmenter(&self) -> &SemanticAugmenter {
        &self.augmenter
    }

    /// Deterministic score, no network.
    pub fn calculate_match_score(&self, job: &Job, candidate: &Candidate) -> MatchScore {
        scoring::calculate_match_score(job, candidate)
    }

    /// Deterministic score plus the semantic boost when the service cooperates.
    pub async fn calculate_ai_match_score(&self, job: &Job, candidate: &Candidate) -> MatchScore {
        let base = scoring::calculate_match_score(job, candidate);
        self.augmenter.try_augment(job, candidate, base).await
    }

    /// Ranks the eligible pool against `job_id`.
    ///
    /// Candidates that fail validation are skipped. Ties keep pool order.
    pub async fn find_matching_candidates(
        &self,
        job_id: Uuid,
        options: SearchOptions,
    ) -> Result<Vec<CandidateMatch>, MatchError> {
        let job = self.repository.fetch_job(job_id).await?;
        let pool = self
            .repository
            .fetch_candidates(&CandidateStatus::ELIGIBLE)
            .await?;
        let pool_size = pool.len();

        let scorable: Vec<Candidate> = pool
            .into_iter()
            .filter(|candidate| match candidate.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping candidate {} for job {}: {}", candidate.id, job_id, e);
                    false
                }
            })
            .collect();

        info!(
            "Scoring {} of {} candidates for job {} (concurrency {})",
            scorable.len(),
            pool_size,
            job_id,
            self.concurrency
        );

        let job = &job;
        let scored: Vec<CandidateMatch> = stream::iter(scorable)
            .map(|candidate| async move {
                let match_score = self.calculate_ai_match_score(job, &candidate).await;
                CandidateMatch {
                    candidate,
                    match_score,
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut results: Vec<CandidateMatch> = scored
            .into_iter()
            .filter(|m| m.match_score.overall >= options.min_score)
            .collect();
        results.sort_by(|a, b| b.match_score.overall.total_cmp(&a.match_score.overall));
        results.truncate(options.limit);

        info!(
            "Job {}: {} candidates at or above {}",
            job_id,
            results.len(),
            options.min_score
        );
        Ok(results)
    }

    /// AI-enhanced score for a single pair.
    pub async fn score_candidate_for_job(
        &self,
        job_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<MatchScore, MatchError> {
        let job = self.repository.fetch_job(job_id).await?;
        let candidate = self.repository.fetch_candidate(candidate_id).await?;
        candidate.validate()?;
        Ok(self.calculate_ai_match_score(&job, &candidate).await)
    }
}
