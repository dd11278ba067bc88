//! Fuzz target for ephemerality computation.
//!
//! Arbitrary activity, threshold and variant letters must produce either a
//! report with scores in [0, 1] or an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use eph_math::{compute, VariantSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    activity: Vec<f64>,
    threshold: f64,
    variants: String,
}

fuzz_target!(|input: Input| {
    let Ok(variants) = input.variants.parse::<VariantSet>() else {
        return;
    };
    if let Ok(report) = compute(&input.activity, input.threshold, variants) {
        for (_, measure) in report.results.iter() {
            assert!((0.0..=1.0).contains(&measure.score));
            assert!(measure.length <= input.activity.len());
        }
    }
});
