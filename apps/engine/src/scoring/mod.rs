// Matching and scoring components: keyword, skill, and experience scorers
// plus the aggregation into an overall score and recommendation.
// Each is a pure function of its inputs and safe to evaluate concurrently.

pub mod aggregate;
pub mod experience;
pub mod keywords;
pub mod skills;
