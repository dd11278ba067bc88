//! Orchestration: threshold check, normalization, per-variant core and score.
//!
//! Each requested variant is computed independently of the others. The whole
//! pass is pure: the same activity, threshold and selection always produce
//! the same report.

use tracing::{debug, trace};

use super::core_length::CoreVariant;
use super::diagnostic::Diagnostic;
use super::error::{EphemeralityError, Result};
use super::normalize::{normalize, NormalizedVector};
use super::result::{CoreMeasure, EphemeralityReport, ResultSet};
use super::score::score_core;
use super::variants::VariantSet;
use crate::DEFAULT_THRESHOLD;

/// Reject thresholds outside (0, 1], including NaN.
pub fn check_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(EphemeralityError::InvalidThreshold(threshold))
    }
}

/// Compute ephemerality for an activity vector.
///
/// The threshold is checked before anything else. A vector with zero total
/// activity is not an error: every requested variant scores 1.0 with a core
/// length equal to the vector length.
pub fn compute(
    activity: &[f64],
    threshold: f64,
    variants: VariantSet,
) -> Result<EphemeralityReport> {
    check_threshold(threshold)?;

    match normalize(activity)? {
        Some(distribution) => compute_normalized(&distribution, threshold, variants),
        None => {
            debug!(
                bins = activity.len(),
                "zero total activity, reporting maximal ephemerality"
            );
            Ok(zero_activity_report(activity.len(), variants))
        }
    }
}

/// [`compute`] with the conventional threshold and all four variants.
pub fn compute_default(activity: &[f64]) -> Result<EphemeralityReport> {
    compute(activity, DEFAULT_THRESHOLD, VariantSet::all())
}

/// Compute the requested variants over an already normalized distribution.
pub fn compute_normalized(
    distribution: &NormalizedVector,
    threshold: f64,
    variants: VariantSet,
) -> Result<EphemeralityReport> {
    check_threshold(threshold)?;

    let range_length = distribution.len();
    let mut report = EphemeralityReport::default();

    for variant in variants.iter() {
        let (measure, diagnostic) =
            measure_variant(variant, distribution.as_slice(), range_length, threshold)?;
        report.results.insert(variant, measure);
        if let Some(diagnostic) = diagnostic {
            debug!(%variant, diagnostic = %diagnostic, "score clamped");
            report.diagnostics.push(diagnostic);
        }
    }

    Ok(report)
}

fn measure_variant(
    variant: CoreVariant,
    distribution: &[f64],
    range_length: usize,
    threshold: f64,
) -> Result<(CoreMeasure, Option<Diagnostic>)> {
    let core_length = variant.core_length(distribution, threshold)?;
    let outcome = score_core(core_length, range_length, threshold);
    trace!(%variant, core_length, score = outcome.score, "core measured");

    let diagnostic = outcome.clamped().then(|| Diagnostic::NegativeScoreClamped {
        variant,
        raw_score: outcome.raw,
        core_length,
        range_length,
        threshold,
    });

    Ok((
        CoreMeasure {
            length: core_length,
            score: outcome.score,
        },
        diagnostic,
    ))
}

fn zero_activity_report(range_length: usize, variants: VariantSet) -> EphemeralityReport {
    let mut results = ResultSet::default();
    for variant in variants.iter() {
        results.insert(
            variant,
            CoreMeasure {
                length: range_length,
                score: 1.0,
            },
        );
    }
    EphemeralityReport {
        results,
        diagnostics: Vec::new(),
    }
}
