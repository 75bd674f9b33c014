//! Candidate screening engine.
//!
//! Scores a résumé's plain text against a job's declared requirements and
//! produces a multi-dimensional match record with a hiring recommendation.
//! The surrounding product (job/candidate storage, file upload, rendering)
//! lives elsewhere; this crate exposes one operation:
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use screening_engine::{EngineConfig, Importance, JobSpec, MatchEngine, RequiredSkill};
//!
//! let engine = MatchEngine::new(&EngineConfig::from_env()?);
//! let job = JobSpec {
//!     description: "Senior Rust engineer for backend services".into(),
//!     required_skills: vec![RequiredSkill::new("Rust", Importance::MustHave)],
//!     experience_required: 5,
//! };
//!
//! let result = engine.compute_match(&job, "Six years of Rust...").await;
//! println!("{:?} ({:.1})", result.recommendation, result.overall_score);
//! # Ok(())
//! # }
//! ```
//!
//! Scoring never fails: degenerate inputs score zero and a similarity-service
//! outage falls back to a local lexical estimate.

pub mod config;
pub mod engine;
pub mod models;
pub mod profile;
pub mod scoring;
pub mod similarity;
pub mod text;

pub use config::EngineConfig;
pub use engine::MatchEngine;
pub use models::{
    Importance, JobSpec, KeywordHit, MatchResult, Recommendation, RequiredSkill,
};
