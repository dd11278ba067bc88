//! Non-fatal data-quality signals raised during a computation.

use serde::{Deserialize, Serialize};

use super::core_length::CoreVariant;

/// An advisory collected alongside a valid result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The core spans more than `threshold * range_length` bins, so the raw
    /// score was negative and has been clamped to 0. Usually the mass sits
    /// close to one boundary, or the vector is short and near-uniform.
    NegativeScoreClamped {
        variant: CoreVariant,
        raw_score: f64,
        core_length: usize,
        range_length: usize,
        threshold: f64,
    },
}

impl Diagnostic {
    /// Stable identifier for machine consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::NegativeScoreClamped { .. } => "negative_score_clamped",
        }
    }

    pub fn variant(&self) -> CoreVariant {
        match self {
            Diagnostic::NegativeScoreClamped { variant, .. } => *variant,
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::NegativeScoreClamped {
                variant,
                raw_score,
                core_length,
                range_length,
                threshold,
            } => format!(
                "{variant} core of {core_length} bins exceeds threshold x length ({threshold} x {range_length}); \
                 score {raw_score:.4} clamped to 0"
            ),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
