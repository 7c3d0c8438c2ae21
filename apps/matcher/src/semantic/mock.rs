use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{SemanticClient, SemanticError, SemanticMatchRequest, SemanticMatchResponse};

/// In-process stand-in for the similarity service.
///
/// Answers every match with the same percentage (or the same failure),
/// optionally after a delay, and counts calls.
#[derive(Debug, Default)]
pub struct StaticSemanticClient {
    healthy: bool,
    percentage: Option<f64>,
    delay: Option<Duration>,
    health_calls: AtomicUsize,
    match_calls: AtomicUsize,
}

impl StaticSemanticClient {
    /// Healthy service that always answers `percentage`.
    pub fn returning(percentage: f64) -> Self {
        Self {
            healthy: true,
            percentage: Some(percentage),
            ..Self::default()
        }
    }

    /// Service whose health check fails.
    pub fn unhealthy() -> Self {
        Self::default()
    }

    /// Healthy service whose match calls all fail.
    pub fn failing() -> Self {
        Self {
            healthy: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn match_calls(&self) -> usize {
        self.match_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SemanticClient for StaticSemanticClient {
    async fn health_check(&self) -> Result<(), SemanticError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        if self.healthy {
            Ok(())
        } else {
            Err(SemanticError::Unavailable)
        }
    }

    async fn match_candidate(
        &self,
        _request: &SemanticMatchRequest,
    ) -> Result<SemanticMatchResponse, SemanticError> {
        self.match_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let percentage = self.percentage.ok_or_else(|| SemanticError::Api {
            status: 500,
            message: "static failure".to_string(),
        })?;

        SemanticMatchResponse {
            weighted_score_percentage: percentage,
            overall_similarity_percentage: percentage,
            skill_similarity_percentage: None,
        }
        .validate()
    }
}
