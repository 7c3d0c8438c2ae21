//! Deterministic job/candidate scoring.
//!
//! Four sub-scores (skills 35, experience 30, location 15, salary 15) sum to
//! a 95-point base. No I/O happens here; the semantic boost is layered on by
//! `semantic::SemanticAugmenter`.

pub mod salary;
pub mod skills;

pub use salary::{assess_salary, parse_salary, SalaryAssessment};
pub use skills::{assess_skills, normalize_skill_name, SkillAssessment};

use crate::models::{
    Candidate, ExperienceRange, ExperienceStatus, Job, LocationType, MatchDetails, MatchScore,
    Recommendation, ScoreBreakdown,
};

pub const EXPERIENCE_MAX: f64 = 30.0;
pub const LOCATION_MAX: f64 = 15.0;
/// Highest possible overall before semantic augmentation.
pub const BASE_MAX: f64 =
    skills::SKILL_BASE_MAX + skills::NICE_TO_HAVE_BONUS_MAX + EXPERIENCE_MAX + LOCATION_MAX + salary::SALARY_MAX;

/// Scores `candidate` against `job`. Same inputs, same output.
pub fn calculate_match_score(job: &Job, candidate: &Candidate) -> MatchScore {
    let skills = assess_skills(
        &job.required_skills,
        &job.nice_to_have_skills,
        &candidate.skills.all(),
    );
    let experience = assess_experience(
        candidate.professional_details.total_experience,
        job.experience_years,
    );
    let location = assess_location(
        &job.location,
        job.location_type,
        candidate.personal_info.location.as_deref(),
    );
    let salary = assess_salary(
        job.salary_range.as_ref(),
        candidate.professional_details.expected_ctc.as_deref(),
    );

    let breakdown = ScoreBreakdown {
        skill_match: skills.score,
        experience_match: experience.score,
        location_match: location.score,
        salary_match: salary.score,
        semantic_match: None,
    };
    let overall = breakdown.base_total();

    MatchScore {
        overall,
        breakdown,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        experience_gap: experience.gap,
        recommendation: Recommendation::from_overall(overall),
        details: MatchDetails {
            skill_match_rate: skills.match_rate * 100.0,
            experience_status: experience.status,
            location_compatible: location.compatible,
            salary_alignment: salary.alignment,
            ai_enhanced: false,
            semantic_similarity: None,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceAssessment {
    pub score: f64,
    /// Negative below the range, positive above it.
    pub gap: f64,
    pub status: ExperienceStatus,
}

/// Non-finite or negative `years` count as no experience.
pub fn assess_experience(years: f64, range: ExperienceRange) -> ExperienceAssessment {
    let years = if years.is_finite() { years.max(0.0) } else { 0.0 };
    let min = f64::from(range.min);
    let max = f64::from(range.max);

    if years < min {
        let gap = min - years;
        ExperienceAssessment {
            score: (EXPERIENCE_MAX - gap * 5.0).max(0.0),
            gap: -gap,
            status: ExperienceStatus::Underqualified,
        }
    } else if years > max {
        // floor of 20: overqualification costs at most 10 points
        let gap = years - max;
        ExperienceAssessment {
            score: (EXPERIENCE_MAX - (gap * 2.0).min(10.0)).max(20.0),
            gap,
            status: ExperienceStatus::Overqualified,
        }
    } else {
        ExperienceAssessment {
            score: EXPERIENCE_MAX,
            gap: 0.0,
            status: ExperienceStatus::Perfect,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationAssessment {
    pub score: f64,
    pub compatible: bool,
}

pub fn assess_location(
    job_location: &str,
    location_type: LocationType,
    candidate_location: Option<&str>,
) -> LocationAssessment {
    let same_city = match (city_of(job_location), candidate_location.and_then(city_of)) {
        (Some(job_city), Some(candidate_city)) => job_city == candidate_city,
        _ => false,
    };

    match location_type {
        LocationType::Remote => LocationAssessment {
            score: LOCATION_MAX,
            compatible: true,
        },
        LocationType::Onsite if same_city => LocationAssessment {
            score: LOCATION_MAX,
            compatible: true,
        },
        LocationType::Onsite => LocationAssessment {
            score: 5.0,
            compatible: false,
        },
        LocationType::Hybrid => LocationAssessment {
            score: if same_city { LOCATION_MAX } else { 10.0 },
            compatible: true,
        },
    }
}

/// Text before the first comma, trimmed and lower-cased. No alias handling,
/// so "NYC" and "New York" are different cities.
fn city_of(location: &str) -> Option<String> {
    let city = location.split(',').next()?.trim().to_lowercase();
    (!city.is_empty()).then_some(city)
}
