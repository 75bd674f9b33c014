//! The match engine — the single operation the application layer consumes.

use chrono::Utc;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{JobSpec, MatchResult};
use crate::profile;
use crate::scoring::aggregate::{self, RecommendationThresholds, ScoringWeights};
use crate::scoring::skills::SynonymTable;
use crate::scoring::{experience, keywords, skills};
use crate::similarity::{SimilarityProvider, SimilaritySource};
use crate::text::Stopwords;

/// Scores résumés against job requirements.
///
/// Construction binds the stopword set, synonym table, weights, thresholds,
/// and similarity source as immutable data. The engine holds no mutable
/// state: one instance may score any number of (job, résumé) pairs
/// concurrently through `&self`.
pub struct MatchEngine {
    stopwords: Stopwords,
    synonyms: SynonymTable,
    weights: ScoringWeights,
    thresholds: RecommendationThresholds,
    similarity: SimilarityProvider,
}

impl MatchEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            stopwords: Stopwords::default(),
            synonyms: SynonymTable::default(),
            weights: ScoringWeights::default(),
            thresholds: RecommendationThresholds::default(),
            similarity: SimilarityProvider::from_config(config),
        }
    }

    /// Swaps the primary similarity source (tests plug a stub in here).
    pub fn with_similarity_source(mut self, source: Box<dyn SimilaritySource>) -> Self {
        self.similarity = SimilarityProvider::with_primary(source);
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_thresholds(mut self, thresholds: RecommendationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Scores one résumé against one job.
    ///
    /// Infallible by design: degenerate inputs zero out the affected
    /// component scores and a similarity-service failure degrades to the
    /// lexical estimate, so every call yields a complete [`MatchResult`]
    /// with finite scores in `[0, 100]`.
    pub async fn compute_match(&self, job: &JobSpec, resume_text: &str) -> MatchResult {
        let job_keywords = keywords::extract_keywords(&job.description, &self.stopwords);
        let keyword_report = keywords::match_keywords(&job_keywords, resume_text);
        let skill_report = skills::match_skills(&job.required_skills, resume_text, &self.synonyms);

        let stated_years = profile::extract_experience_years(resume_text);
        let experience_score = experience::score_experience(stated_years, job.experience_required);

        let semantic_score = self.similarity.score(&job.description, resume_text).await;

        let overall_score = aggregate::overall_score(
            keyword_report.score,
            semantic_score,
            skill_report.score,
            experience_score,
            &self.weights,
        );
        let recommendation = aggregate::recommend(overall_score, &self.thresholds);

        debug!(
            keyword = keyword_report.score,
            semantic = semantic_score,
            skills = skill_report.score,
            experience = experience_score,
            overall = overall_score,
            "match scored"
        );

        MatchResult {
            overall_score,
            keyword_score: keyword_report.score,
            semantic_score,
            skills_score: skill_report.score,
            experience_score,
            matched_skills: skill_report.matched,
            missing_skills: skill_report.missing,
            matched_keywords: keyword_report.matched,
            missing_keywords: keyword_report.missing,
            recommendation,
            created_at: Utc::now(),
        }
    }
}
