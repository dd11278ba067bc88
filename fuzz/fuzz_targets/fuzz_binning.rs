//! Fuzz target for timestamp binning.

#![no_main]

use arbitrary::Arbitrary;
use eph_config::Granularity;
use eph_core::timestamps_to_activity;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    timestamps: Vec<f64>,
    range: Option<(f64, f64)>,
    granularity: String,
}

fuzz_target!(|input: Input| {
    let Ok(granularity) = input.granularity.parse::<Granularity>() else {
        return;
    };
    if let Ok(activity) = timestamps_to_activity(&input.timestamps, input.range, granularity) {
        let total: f64 = activity.iter().sum();
        assert!(total <= input.timestamps.len() as f64);
    }
});
