//! Conversion of a core length into an ephemerality score.
//!
//! `score = max(0, 1 - (core_length / range_length) / threshold)`
//!
//! The threshold doubles as the baseline fraction: a uniform vector needs
//! about `threshold * range_length` bins to reach the threshold and scores
//! near 0, while a vector with its mass in a handful of bins scores near 1.

use crate::REACH_TOLERANCE;

/// Outcome of scoring one core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    /// Score clamped to [0, 1].
    pub score: f64,
    /// Unclamped formula value.
    pub raw: f64,
}

impl ScoreOutcome {
    /// True when the raw value was meaningfully below zero.
    ///
    /// Values below zero by less than the tolerance are ordinary rounding.
    pub fn clamped(&self) -> bool {
        self.raw < -REACH_TOLERANCE
    }
}

/// Score a core of `core_length` bins out of `range_length`.
///
/// `range_length` must be positive and `threshold` must lie in (0, 1].
pub fn score_core(core_length: usize, range_length: usize, threshold: f64) -> ScoreOutcome {
    let fraction = core_length as f64 / range_length as f64;
    let raw = 1.0 - fraction / threshold;
    ScoreOutcome {
        score: raw.max(0.0),
        raw,
    }
}
