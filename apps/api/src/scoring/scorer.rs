//! Scorer: measures a document's text against the session's required skills.
//!
//! Algorithm:
//! 1. Normalize the document text.
//! 2. For each required skill (in order), test substring containment.
//! 3. score = round(matched / required × 100, 1 decimal)
//! 4. Classify: High (≥70), Medium (40–69.9), Low (<40)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::normalize::normalize_text;

/// Qualitative tier of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            MatchLevel::High
        } else if score >= 40.0 {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::High => "High",
            MatchLevel::Medium => "Medium",
            MatchLevel::Low => "Low",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    /// 0.0 – 100.0, one decimal place.
    pub score: f64,
    /// Subset of the required skills, in required-skill order.
    pub matched_skills: Vec<String>,
    pub match_level: MatchLevel,
}

impl SkillScore {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched_skills: Vec::new(),
            match_level: MatchLevel::Low,
        }
    }
}

/// Scores `document_text` against `required_skills`.
///
/// An empty skill list short-circuits to 0.0 / Low.
pub fn score_document(document_text: &str, required_skills: &[String]) -> SkillScore {
    if required_skills.is_empty() {
        return SkillScore::empty();
    }

    let normalized = normalize_text(document_text);
    let mut matched_skills: Vec<String> = Vec::new();
    for skill in required_skills {
        if normalized.contains(skill.as_str()) && !matched_skills.contains(skill) {
            matched_skills.push(skill.clone());
        }
    }

    let ratio = matched_skills.len() as f64 / required_skills.len() as f64;
    let score = round_one_decimal(ratio * 100.0).clamp(0.0, 100.0);

    SkillScore {
        score,
        match_level: MatchLevel::from_score(score),
        matched_skills,
    }
}

/// Half-to-even rounding at one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
