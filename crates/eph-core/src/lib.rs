//! Ephemerality Core Library
//!
//! This library wraps the pure computation in `eph-math` with what a host
//! (command-line tool, web service) needs around it:
//! - Configuration loading with provenance
//! - Timestamp-to-activity binning
//! - Named activity cases and a parallel batch runner
//! - Structured logging setup

pub mod batch;
pub mod binning;
pub mod case;
pub mod config;
pub mod logging;

pub use batch::{BatchReport, BatchRunner, CaseOutcome, CaseStatus};
pub use binning::{datetimes_to_activity, timestamps_to_activity, BinningError};
pub use case::ActivityCase;
pub use config::{load_config, ConfigError, ResolvedConfig};
