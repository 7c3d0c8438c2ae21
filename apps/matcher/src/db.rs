use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_JOBS: &str = r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        company TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        required_skills TEXT[] NOT NULL DEFAULT '{}',
        nice_to_have_skills TEXT[] NOT NULL DEFAULT '{}',
        experience_min INTEGER NOT NULL DEFAULT 0,
        experience_max INTEGER NOT NULL DEFAULT 0,
        location TEXT NOT NULL DEFAULT '',
        location_type TEXT NOT NULL DEFAULT 'onsite',
        salary_min BIGINT,
        salary_max BIGINT,
        salary_currency TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_CANDIDATES: &str = r#"
    CREATE TABLE IF NOT EXISTS candidates (
        id UUID PRIMARY KEY,
        full_name TEXT NOT NULL,
        email TEXT,
        location TEXT,
        total_experience DOUBLE PRECISION NOT NULL DEFAULT 0,
        expected_ctc TEXT,
        skills JSONB NOT NULL DEFAULT '{}',
        categories JSONB,
        resume_text TEXT,
        status TEXT NOT NULL DEFAULT 'active',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_candidates_status ON candidates(status)";

/// Statements run in order by `init_schema`.
const SCHEMA: [(&str, &str); 3] = [
    ("jobs table", CREATE_JOBS),
    ("candidates table", CREATE_CANDIDATES),
    ("candidates status index", CREATE_STATUS_INDEX),
];

/// Creates and returns the PostgreSQL pool backing the talent repository.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `jobs` and `candidates` tables read by `PgTalentRepository`.
///
/// Idempotent. `MatchEngine::from_config` runs it on startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for (name, statement) in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create {name}"))?;
    }

    info!("Talent schema ready");
    Ok(())
}
