use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::{SemanticClient, SemanticError, SemanticMatchRequest, SemanticMatchResponse};
use crate::config::Config;
use crate::models::{Candidate, Job, MatchScore};

/// Points a 100% similarity adds on top of the 95-point base.
pub const SEMANTIC_MAX_POINTS: f64 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct AugmenterSettings {
    pub health_timeout: Duration,
    pub match_timeout: Duration,
}

impl Default for AugmenterSettings {
    fn default() -> Self {
        Self {
            health_timeout: Duration::from_secs(5),
            match_timeout: Duration::from_secs(15),
        }
    }
}

impl AugmenterSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            health_timeout: config.semantic_health_timeout,
            match_timeout: config.semantic_match_timeout,
        }
    }
}

/// Best-effort semantic boost for a deterministic score.
///
/// Availability is checked once at construction and cached. Every failure
/// path hands back the base score untouched.
pub struct SemanticAugmenter {
    client: Option<Arc<dyn SemanticClient>>,
    available: AtomicBool,
    settings: AugmenterSettings,
}

impl SemanticAugmenter {
    /// Checks `client` health once and caches the outcome.
    pub async fn connect(client: Arc<dyn SemanticClient>, settings: AugmenterSettings) -> Self {
        let augmenter = Self {
            client: Some(client),
            available: AtomicBool::new(false),
            settings,
        };
        augmenter.refresh_availability().await;
        augmenter
    }

    /// Augmenter that never calls out.
    pub fn disabled() -> Self {
        Self {
            client: None,
            available: AtomicBool::new(false),
            settings: AugmenterSettings::default(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Re-runs the health check. Only called explicitly by the owner.
    pub async fn refresh_availability(&self) -> bool {
        let Some(client) = &self.client else {
            return false;
        };

        let healthy = match timeout(self.settings.health_timeout, client.health_check()).await {
            Ok(Ok(())) => {
                info!("Semantic service is available");
                true
            }
            Ok(Err(e)) => {
                warn!("Semantic service health check failed: {}", e);
                false
            }
            Err(_) => {
                warn!(
                    "Semantic service health check timed out after {:?}",
                    self.settings.health_timeout
                );
                false
            }
        };

        self.available.store(healthy, Ordering::SeqCst);
        healthy
    }

    /// Adds the semantic boost to `base`, or returns `base` as-is.
    pub async fn try_augment(&self, job: &Job, candidate: &Candidate, base: MatchScore) -> MatchScore {
        match self.query(job, candidate).await {
            Ok(response) => {
                let points = semantic_points(response.weighted_score_percentage);
                debug!(
                    "Semantic boost for candidate {}: {} points ({}%)",
                    candidate.id, points, response.weighted_score_percentage
                );
                base.with_semantic(points, response.overall_similarity_percentage)
            }
            Err(SemanticError::Unavailable) => base,
            Err(e) => {
                warn!(
                    "Semantic augmentation failed for candidate {}, using base score: {}",
                    candidate.id, e
                );
                base
            }
        }
    }

    async fn query(
        &self,
        job: &Job,
        candidate: &Candidate,
    ) -> Result<SemanticMatchResponse, SemanticError> {
        let client = match &self.client {
            Some(client) if self.is_available() => client,
            _ => return Err(SemanticError::Unavailable),
        };

        let request = build_request(job, candidate);
        timeout(self.settings.match_timeout, client.match_candidate(&request))
            .await
            .map_err(|_| SemanticError::Timeout(self.settings.match_timeout))?
    }
}

/// round(percentage / 100 × 20)
pub fn semantic_points(percentage: f64) -> f64 {
    (percentage / 100.0 * SEMANTIC_MAX_POINTS).round()
}

fn build_request(job: &Job, candidate: &Candidate) -> SemanticMatchRequest {
    let candidate_skills = candidate.skills.all();
    // without a résumé body the skill list is the best text we have
    let resume_text = candidate
        .resume_text
        .clone()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| candidate_skills.join(", "));

    SemanticMatchRequest {
        job_description: job.description.clone(),
        resume_text,
        job_skills: job.required_skills.clone(),
        candidate_skills,
    }
}
