use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Matching engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the semantic similarity service. `None` disables augmentation.
    pub semantic_service_url: Option<String>,
    pub semantic_health_timeout: Duration,
    pub semantic_match_timeout: Duration,
    /// Number of candidates scored concurrently during ranking.
    pub ranking_concurrency: usize,
    pub default_limit: usize,
    pub default_min_score: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ranking_concurrency = parse_or(&lookup, "RANKING_CONCURRENCY", 4usize)?;
        if ranking_concurrency == 0 {
            bail!("RANKING_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .context("Required environment variable 'DATABASE_URL' is not set")?,
            semantic_service_url: lookup("SEMANTIC_SERVICE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            semantic_health_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SEMANTIC_HEALTH_TIMEOUT_SECS",
                5u64,
            )?),
            semantic_match_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SEMANTIC_MATCH_TIMEOUT_SECS",
                15u64,
            )?),
            ranking_concurrency,
            default_limit: parse_or(&lookup, "MATCH_DEFAULT_LIMIT", 10usize)?,
            default_min_score: parse_or(&lookup, "MATCH_DEFAULT_MIN_SCORE", 40.0f64)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
