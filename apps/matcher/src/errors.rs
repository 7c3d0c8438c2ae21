use thiserror::Error;

/// Error type for the repository and ranking layers.
///
/// Semantic-service failures never appear here: the adapter degrades to the
/// deterministic score instead of surfacing them.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MatchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchError::NotFound(_))
    }
}
