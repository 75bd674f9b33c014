//! Data model shared with the application layer: the job-side inputs to
//! matching and the match record it gets back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Importance tier of a required skill. Maps to a fixed scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    #[serde(rename = "Must-Have")]
    MustHave,
    #[serde(rename = "Nice-to-Have")]
    NiceToHave,
}

impl Importance {
    pub fn weight(self) -> f64 {
        match self {
            Importance::MustHave => 1.0,
            Importance::NiceToHave => 0.5,
        }
    }
}

/// A single skill a job calls for. Immutable once the job is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub importance: Importance,
}

impl RequiredSkill {
    pub fn new(name: impl Into<String>, importance: Importance) -> Self {
        Self {
            name: name.into(),
            importance,
        }
    }
}

/// The job side of a match: free-text description, importance-weighted
/// required skills, and the minimum years of experience (0-20).
///
/// Scoring is only meaningful once at least one required skill exists; an
/// empty list degrades the skills score to zero rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub description: String,
    pub required_skills: Vec<RequiredSkill>,
    pub experience_required: u32,
}

/// One job keyword found in the résumé, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: u32,
}

/// Hiring recommendation derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Interview,
    #[serde(rename = "Phone Screen")]
    PhoneScreen,
    Reject,
}

/// Complete scoring record for one (job, résumé) pair.
///
/// Built in one shot by the aggregator after all four component scores are
/// available, never partially populated. Every score is a finite value in
/// `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<KeywordHit>,
    pub missing_keywords: Vec<String>,
    pub recommendation: Recommendation,
    pub created_at: DateTime<Utc>,
}
