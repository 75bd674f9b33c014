//! Aggregation of the four component scores into an overall score and a
//! hiring recommendation.

use serde::{Deserialize, Serialize};

use crate::models::Recommendation;

/// Relative weight of each component in the overall score. Skills and
/// semantic fit dominate raw keyword density.
///
/// These are defaults, not commitments; callers can supply their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub semantic: f64,
    pub keywords: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            semantic: 0.30,
            keywords: 0.20,
            experience: 0.15,
        }
    }
}

/// Overall-score cut points for the recommendation tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub interview: f64,
    pub phone_screen: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            interview: 75.0,
            phone_screen: 50.0,
        }
    }
}

/// Weighted average of the four component scores, clamped to `[0, 100]`.
/// Pure function: inputs are assumed finite and in range, as every component
/// scorer guarantees.
pub fn overall_score(
    keyword_score: f64,
    semantic_score: f64,
    skills_score: f64,
    experience_score: f64,
    weights: &ScoringWeights,
) -> f64 {
    (weights.skills * skills_score
        + weights.semantic * semantic_score
        + weights.keywords * keyword_score
        + weights.experience * experience_score)
        .clamp(0.0, 100.0)
}

pub fn recommend(overall: f64, thresholds: &RecommendationThresholds) -> Recommendation {
    if overall >= thresholds.interview {
        Recommendation::Interview
    } else if overall >= thresholds.phone_screen {
        Recommendation::PhoneScreen
    } else {
        Recommendation::Reject
    }
}
