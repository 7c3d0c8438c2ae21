//! Talent matching: skill extraction, discipline classification, explainable
//! job/candidate scoring with an optional semantic boost, and ranked search.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod semantic;
pub mod taxonomy;
pub mod telemetry;

pub use config::Config;
pub use errors::MatchError;
pub use ranking::{CandidateMatch, MatchEngine, SearchOptions};
pub use scoring::{calculate_match_score, parse_salary};
pub use taxonomy::{classify, extract_skills, CategorizedSkillSet, CategoryMatch, Discipline};
