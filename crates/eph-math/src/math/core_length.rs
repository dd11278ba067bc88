//! Core-length finders.
//!
//! A core is the minimal number of bins, under some traversal order, whose
//! combined mass reaches the threshold. Four orders are supported:
//!
//! - `Left`: bins in time order, from the first bin.
//! - `Right`: bins in reverse time order, from the last bin.
//! - `Middle`: time order, starting after the lower `(1 - t) / 2` tail.
//! - `Sorted`: bins by descending mass, ignoring position.
//!
//! All finders expect a distribution summing to 1 and a threshold already
//! checked to lie in (0, 1]. A scan that runs out of bins fails with
//! [`EphemeralityError::UnnormalizedInput`].

use serde::{Deserialize, Serialize};

use super::error::{EphemeralityError, Result};
use crate::REACH_TOLERANCE;

/// One of the four core traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreVariant {
    Left,
    Middle,
    Right,
    Sorted,
}

impl CoreVariant {
    /// All variants in canonical `lmrs` order.
    pub const ALL: [CoreVariant; 4] = [
        CoreVariant::Left,
        CoreVariant::Middle,
        CoreVariant::Right,
        CoreVariant::Sorted,
    ];

    /// Single-letter code used in variant selection strings.
    pub fn letter(self) -> char {
        match self {
            CoreVariant::Left => 'l',
            CoreVariant::Middle => 'm',
            CoreVariant::Right => 'r',
            CoreVariant::Sorted => 's',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'l' => Some(CoreVariant::Left),
            'm' => Some(CoreVariant::Middle),
            'r' => Some(CoreVariant::Right),
            's' => Some(CoreVariant::Sorted),
            _ => None,
        }
    }

    /// Run this variant's finder over a normalized distribution.
    pub fn core_length(self, distribution: &[f64], threshold: f64) -> Result<usize> {
        match self {
            CoreVariant::Left => left_core_length(distribution, threshold),
            CoreVariant::Middle => middle_core_length(distribution, threshold),
            CoreVariant::Right => right_core_length(distribution, threshold),
            CoreVariant::Sorted => sorted_core_length(distribution, threshold),
        }
    }
}

impl std::fmt::Display for CoreVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreVariant::Left => write!(f, "left"),
            CoreVariant::Middle => write!(f, "middle"),
            CoreVariant::Right => write!(f, "right"),
            CoreVariant::Sorted => write!(f, "sorted"),
        }
    }
}

/// A cumulative sum reaches `target` when it meets it or is within tolerance.
#[inline]
fn reached(sum: f64, target: f64) -> bool {
    sum >= target || (sum - target).abs() <= REACH_TOLERANCE
}

/// Count of leading masses needed to reach `threshold`.
///
/// On exhaustion returns the mass accumulated so far.
fn leading_count<I>(masses: I, threshold: f64) -> std::result::Result<usize, f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    for (i, mass) in masses.into_iter().enumerate() {
        sum += mass;
        if reached(sum, threshold) {
            return Ok(i + 1);
        }
    }
    Err(sum)
}

fn unnormalized(variant: CoreVariant, threshold: f64, reached: f64) -> EphemeralityError {
    EphemeralityError::UnnormalizedInput {
        variant,
        threshold,
        reached,
    }
}

/// Number of bins from the start needed to reach `threshold`.
pub fn left_core_length(distribution: &[f64], threshold: f64) -> Result<usize> {
    leading_count(distribution.iter().copied(), threshold)
        .map_err(|sum| unnormalized(CoreVariant::Left, threshold, sum))
}

/// Number of bins from the end needed to reach `threshold`.
pub fn right_core_length(distribution: &[f64], threshold: f64) -> Result<usize> {
    leading_count(distribution.iter().rev().copied(), threshold)
        .map_err(|sum| unnormalized(CoreVariant::Right, threshold, sum))
}

/// Number of bins needed to reach `threshold`, counted from the first bin
/// whose prefix mass strictly exceeds the lower tail `(1 - threshold) / 2`.
///
/// This is a two-pass scan anchored after the excluded tail, not a search for
/// the globally shortest window.
pub fn middle_core_length(distribution: &[f64], threshold: f64) -> Result<usize> {
    let lower_tail = (1.0 - threshold) / 2.0;

    let mut presum = 0.0;
    let start = distribution.iter().position(|&mass| {
        presum += mass;
        presum > lower_tail && (presum - lower_tail).abs() > REACH_TOLERANCE
    });
    let Some(start) = start else {
        return Err(unnormalized(CoreVariant::Middle, threshold, presum));
    };

    leading_count(distribution[start..].iter().copied(), threshold)
        .map_err(|sum| unnormalized(CoreVariant::Middle, threshold, sum))
}

/// Number of the largest bins needed to reach `threshold`, regardless of
/// their position.
pub fn sorted_core_length(distribution: &[f64], threshold: f64) -> Result<usize> {
    let mut descending = distribution.to_vec();
    descending.sort_by(|a, b| b.total_cmp(a));
    leading_count(descending, threshold)
        .map_err(|sum| unnormalized(CoreVariant::Sorted, threshold, sum))
}
