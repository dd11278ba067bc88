//! Error types for ephemerality computation.

use thiserror::Error;

use super::core_length::CoreVariant;

/// Result type alias for ephemerality operations.
pub type Result<T> = std::result::Result<T, EphemeralityError>;

/// Conditions that abort a single computation.
///
/// None of these leave a partial result behind. Clamped scores are not errors;
/// see [`crate::Diagnostic`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemeralityError {
    #[error("threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("activity at bin {index} must be finite and non-negative, got {value}")]
    InvalidActivity { index: usize, value: f64 },

    #[error("invalid core variant selection {0:?}: expected 1 to 4 distinct letters from l, m, r, s")]
    InvalidVariants(String),

    /// A finder ran out of bins before reaching the threshold. Only possible
    /// when the normalizer was bypassed.
    #[error(
        "{variant} core never reached threshold {threshold} (cumulative mass {reached}): input is not normalized"
    )]
    UnnormalizedInput {
        variant: CoreVariant,
        threshold: f64,
        reached: f64,
    },
}

impl EphemeralityError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            EphemeralityError::InvalidThreshold(_) => 20,
            EphemeralityError::InvalidActivity { .. } => 21,
            EphemeralityError::InvalidVariants(_) => 22,
            EphemeralityError::UnnormalizedInput { .. } => 29,
        }
    }

    /// Whether the failure points at a programming error rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, EphemeralityError::UnnormalizedInput { .. })
    }
}
