//! Ephemerality math utilities.

pub mod math;

pub use math::aggregate::{check_threshold, compute, compute_default, compute_normalized};
pub use math::core_length::{
    left_core_length, middle_core_length, right_core_length, sorted_core_length, CoreVariant,
};
pub use math::diagnostic::Diagnostic;
pub use math::error::{EphemeralityError, Result};
pub use math::normalize::{normalize, NormalizedVector};
pub use math::result::{CoreMeasure, EphemeralityReport, ResultSet};
pub use math::score::{score_core, ScoreOutcome};
pub use math::variants::VariantSet;

/// Conventional threshold: "most of the activity" means 80% of the mass.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Absolute tolerance for deciding that a cumulative sum has reached a target.
pub const REACH_TOLERANCE: f64 = 1e-9;
