//! Activity normalization.
//!
//! Turns a non-negative activity vector into a distribution summing to 1.
//! The caller's slice is never touched; the distribution is a private copy.

use super::error::{EphemeralityError, Result};
use crate::REACH_TOLERANCE;

/// A distribution over time bins that sums to 1 within [`REACH_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVector {
    values: Vec<f64>,
}

impl NormalizedVector {
    /// Bin masses in original order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all bin masses.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Check that every bin is finite and non-negative.
pub fn validate_activity(activity: &[f64]) -> Result<()> {
    for (index, &value) in activity.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(EphemeralityError::InvalidActivity { index, value });
        }
    }
    Ok(())
}

/// Normalize an activity vector.
///
/// Returns `Ok(None)` when the total is zero (including the empty vector):
/// such a vector carries no concentration information and is handled by the
/// aggregator as a degenerate case. A vector that already sums to 1 is copied
/// unchanged, so normalizing twice is a no-op.
pub fn normalize(activity: &[f64]) -> Result<Option<NormalizedVector>> {
    validate_activity(activity)?;

    let total: f64 = activity.iter().sum();
    // All bins are non-negative, so only an all-zero vector sums to zero.
    if total == 0.0 {
        return Ok(None);
    }

    let values = if (total - 1.0).abs() <= REACH_TOLERANCE {
        activity.to_vec()
    } else if total.is_finite() {
        activity.iter().map(|v| v / total).collect()
    } else {
        // Finite bins whose sum overflows: bring them into range first.
        let max = activity.iter().copied().fold(0.0, f64::max);
        let scaled: Vec<f64> = activity.iter().map(|v| v / max).collect();
        let scaled_total: f64 = scaled.iter().sum();
        scaled.iter().map(|v| v / scaled_total).collect()
    };

    Ok(Some(NormalizedVector { values }))
}
