mod rubric;
mod suggestion;

use serde::{Deserialize, Serialize};

use super::domain::EligibilityProfile;

/// Score at or above which a lead is eligible for admission counseling.
pub const ELIGIBILITY_THRESHOLD: u8 = 60;

/// Stateless engine applying the admission rubric to an applicant profile.
///
/// Scoring is a pure function of the profile: no I/O, no shared state, and
/// no failure path. Missing or malformed fields contribute the documented
/// default tier instead of raising an error, so the engine can run on the
/// raw payload at intake as well as on the verified profile later.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, profile: &EligibilityProfile) -> EligibilityResult {
        let categories = [
            rubric::score_education(profile),
            rubric::score_language(profile),
            rubric::score_work_experience(profile),
            rubric::score_financial(profile),
        ];

        let mut total: u32 = 0;
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for category in categories {
            total += category.points;
            strengths.extend(category.strengths);
            weaknesses.extend(category.weaknesses);
        }

        // The rubric tables top out above 100, so the upper clamp is live.
        let score = total.min(100) as u8;

        EligibilityResult {
            score,
            is_eligible: score >= ELIGIBILITY_THRESHOLD,
            strengths,
            weaknesses,
            suggestion: suggestion::for_score(score).to_string(),
        }
    }
}

/// Outcome of one rubric evaluation, newly constructed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub score: u8,
    pub is_eligible: bool,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestion: String,
}

/// Point contribution of a single rubric category plus its narrative notes.
///
/// Category scorers are pure; the engine concatenates their notes in fixed
/// evaluation order (education, language, work, financial).
#[derive(Debug, Default)]
pub(crate) struct CategoryScore {
    pub(crate) points: u32,
    pub(crate) strengths: Vec<String>,
    pub(crate) weaknesses: Vec<String>,
}

impl CategoryScore {
    pub(crate) fn points(points: u32) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub(crate) fn strength(mut self, note: String) -> Self {
        self.strengths.push(note);
        self
    }

    pub(crate) fn weakness(mut self, note: String) -> Self {
        self.weaknesses.push(note);
        self
    }
}
