//! Semantic similarity service: the only network I/O in the crate.
//!
//! `SemanticClient` is the seam. `HttpSemanticClient` talks to the real
//! service, `StaticSemanticClient` stands in for it in tests, and
//! `SemanticAugmenter` turns either into a best-effort score boost.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod adapter;
pub mod client;
pub mod mock;

pub use adapter::{AugmenterSettings, SemanticAugmenter, SEMANTIC_MAX_POINTS};
pub use client::HttpSemanticClient;
pub use mock::StaticSemanticClient;

#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Semantic service timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed semantic response: {0}")]
    Malformed(String),

    #[error("Semantic service unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatchRequest {
    pub job_description: String,
    pub resume_text: String,
    pub job_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatchResponse {
    pub weighted_score_percentage: f64,
    pub overall_similarity_percentage: f64,
    #[serde(default)]
    pub skill_similarity_percentage: Option<f64>,
}

impl SemanticMatchResponse {
    /// Rejects percentages that are non-finite or outside [0, 100].
    pub fn validate(self) -> Result<Self, SemanticError> {
        let fields = [
            ("weighted_score_percentage", Some(self.weighted_score_percentage)),
            (
                "overall_similarity_percentage",
                Some(self.overall_similarity_percentage),
            ),
            ("skill_similarity_percentage", self.skill_similarity_percentage),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(SemanticError::Malformed(format!(
                        "{name} out of range: {value}"
                    )));
                }
            }
        }
        Ok(self)
    }
}

/// Client for the external similarity service.
///
/// Carried by the augmenter as `Arc<dyn SemanticClient>`.
#[async_trait]
pub trait SemanticClient: Send + Sync {
    async fn health_check(&self) -> Result<(), SemanticError>;

    async fn match_candidate(
        &self,
        request: &SemanticMatchRequest,
    ) -> Result<SemanticMatchResponse, SemanticError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(weighted: f64) -> SemanticMatchResponse {
        SemanticMatchResponse {
            weighted_score_percentage: weighted,
            overall_similarity_percentage: 50.0,
            skill_similarity_percentage: None,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(response(0.0).validate().is_ok());
        assert!(response(100.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            response(100.5).validate(),
            Err(SemanticError::Malformed(_))
        ));
        assert!(response(-1.0).validate().is_err());
        assert!(response(f64::NAN).validate().is_err());

        let mut bad_skill = response(70.0);
        bad_skill.skill_similarity_percentage = Some(140.0);
        assert!(bad_skill.validate().is_err());
    }

    #[test]
    fn test_response_tolerates_missing_optional_field() {
        let json = r#"{"weighted_score_percentage": 72.5, "overall_similarity_percentage": 68.0}"#;
        let parsed: SemanticMatchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.weighted_score_percentage, 72.5);
        assert!(parsed.skill_similarity_percentage.is_none());
    }
}
