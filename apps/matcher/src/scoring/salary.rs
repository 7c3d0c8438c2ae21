use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SalaryAlignment, SalaryRange};

pub const SALARY_MAX: f64 = 15.0;
/// Awarded when either side of the comparison is missing or unreadable.
pub const SALARY_NEUTRAL: f64 = 8.0;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:(lpa|lakhs?|lacs?|crores?|cr|k|mn|million|m)\b)?")
        .expect("salary pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryAssessment {
    pub score: f64,
    pub alignment: SalaryAlignment,
}

/// Parses a free-text salary expectation into an absolute amount.
///
/// The first number in the text is the value; the first unit suffix found
/// anywhere scales it. "8-10 LPA" reads as 800000. Currency symbols and codes
/// ("$", "120000USD") are ignored and no conversion happens.
pub fn parse_salary(text: &str) -> Option<u64> {
    let mut value = None;
    let mut multiplier = None;

    for caps in AMOUNT_RE.captures_iter(text) {
        if value.is_none() {
            value = caps[1].replace(',', "").parse::<f64>().ok();
        }
        if multiplier.is_none() {
            multiplier = caps.get(2).map(|unit| unit_multiplier(unit.as_str()));
        }
        if value.is_some() && multiplier.is_some() {
            break;
        }
    }

    let amount = value? * multiplier.unwrap_or(1.0);
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    Some(amount.round() as u64)
}

fn unit_multiplier(unit: &str) -> f64 {
    match unit.to_lowercase().as_str() {
        "lpa" | "lakh" | "lakhs" | "lac" | "lacs" => 100_000.0,
        "cr" | "crore" | "crores" => 10_000_000.0,
        "k" => 1_000.0,
        "m" | "mn" | "million" => 1_000_000.0,
        _ => 1.0,
    }
}

/// Compares the candidate's expectation with the job's ceiling.
pub fn assess_salary(range: Option<&SalaryRange>, expected: Option<&str>) -> SalaryAssessment {
    let unknown = SalaryAssessment {
        score: SALARY_NEUTRAL,
        alignment: SalaryAlignment::Unknown,
    };

    let Some(max) = range.map(|r| r.max).filter(|max| *max > 0) else {
        return unknown;
    };
    let Some(expected) = expected.and_then(parse_salary) else {
        return unknown;
    };

    let max = max as f64;
    let expected = expected as f64;
    let (score, alignment) = if expected <= max {
        (SALARY_MAX, SalaryAlignment::Perfect)
    } else if expected <= max * 1.1 {
        (12.0, SalaryAlignment::Negotiable)
    } else if expected <= max * 1.2 {
        (8.0, SalaryAlignment::Challenging)
    } else {
        (3.0, SalaryAlignment::Misaligned)
    };

    SalaryAssessment { score, alignment }
}
