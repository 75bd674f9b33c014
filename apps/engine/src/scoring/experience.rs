//! Experience-gap scoring: résumé-stated years against the job's minimum.

/// Jobs may require at most this many years; larger values are clamped.
pub const MAX_REQUIRED_YEARS: u32 = 20;

/// Scores stated experience against the required minimum, in `[0, 100]`.
///
/// A job with no minimum is a full match for anyone. Years beyond the
/// minimum earn no extra credit.
pub fn score_experience(stated_years: u32, required_years: u32) -> f64 {
    let required = required_years.min(MAX_REQUIRED_YEARS);
    if required == 0 {
        return 100.0;
    }

    (stated_years as f64 / required as f64).min(1.0) * 100.0
}
