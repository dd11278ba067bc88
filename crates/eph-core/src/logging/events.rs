//! Structured event names and pipeline stages.

/// Processing stages in the eph-core pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Startup and configuration.
    Init,
    /// Timestamp binning.
    Bin,
    /// Per-case ephemerality computation.
    Compute,
    /// Batch scheduling and collection.
    Batch,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Bin => "bin",
            Stage::Compute => "compute",
            Stage::Batch => "batch",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used as tracing targets.
///
/// Every name starts with `eph_core::` so the crate-level filter directive
/// selects them.
pub mod event_names {
    // Config/init events
    pub const CONFIG_LOADED: &str = "eph_core::config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "eph_core::config.default_used";

    // Binning
    pub const BIN_FINISHED: &str = "eph_core::bin.finished";

    // Batch lifecycle
    pub const BATCH_STARTED: &str = "eph_core::batch.started";
    pub const BATCH_FINISHED: &str = "eph_core::batch.finished";

    // Per-case results
    pub const CASE_COMPUTED: &str = "eph_core::case.computed";
    pub const CASE_DIAGNOSTICS: &str = "eph_core::case.diagnostics";
    pub const CASE_FAILED: &str = "eph_core::case.failed";

    pub const INTERNAL_ERROR: &str = "eph_core::internal_error";
}

/// Correlation fields attached to every event of one run.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        LogContext {
            run_id: run_id.into(),
        }
    }
}
