//! Fuzz target for config.json parsing.
//!
//! Parsing and validating arbitrary input must return an error, never panic.

#![no_main]

use eph_config::{validate_config, EphemeralityConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<EphemeralityConfig>(data) {
        let _ = validate_config(&config);
    }
});
