//! Batch computation over many activity cases.
//!
//! Cases run on scoped worker threads, at most `max_parallel` at a time.
//! Each case is independent: a failure (or a panicking worker) only affects
//! that case's outcome. Outcomes are returned in input order.

use std::thread;

use chrono::{DateTime, Utc};
use eph_config::{BatchSettings, EphemeralityConfig};
use eph_math::{EphemeralityError, EphemeralityReport, VariantSet};
use tracing::Dispatch;
use serde::{Deserialize, Serialize};

use crate::case::ActivityCase;
use crate::logging::{event_names, generate_run_id, LogContext, Stage};

/// Error code reported for a case whose worker thread panicked.
pub const PANIC_CODE: u32 = 99;

/// Result of computing one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub name: String,
    pub threshold: f64,
    pub variants: VariantSet,
    #[serde(flatten)]
    pub status: CaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseStatus {
    Computed { report: EphemeralityReport },
    Failed { code: u32, message: String },
}

impl CaseOutcome {
    pub fn report(&self) -> Option<&EphemeralityReport> {
        match &self.status {
            CaseStatus::Computed { report } => Some(report),
            CaseStatus::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, CaseStatus::Failed { .. })
    }
}

/// Everything one `BatchRunner::run` produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn computed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Total diagnostics across all computed cases.
    pub fn diagnostic_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(CaseOutcome::report)
            .map(|r| r.diagnostics.len())
            .sum()
    }

    /// First outcome with the given name.
    pub fn get(&self, name: &str) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

/// Runs cases with bounded parallelism.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    settings: BatchSettings,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(BatchSettings::default())
    }
}

impl BatchRunner {
    pub fn new(settings: BatchSettings) -> Self {
        Self {
            settings: BatchSettings {
                max_parallel: settings.max_parallel.max(1),
            },
        }
    }

    pub fn from_config(config: &EphemeralityConfig) -> Self {
        Self::new(config.batch)
    }

    pub fn max_parallel(&self) -> usize {
        self.settings.max_parallel
    }

    /// Compute every case and collect the outcomes in input order.
    pub fn run(&self, cases: &[ActivityCase]) -> BatchReport {
        let ctx = &LogContext::new(generate_run_id());
        // Workers report to the caller's subscriber, not only the global one.
        let dispatch = &tracing::dispatcher::get_default(Dispatch::clone);
        let started_at = Utc::now();
        crate::log_event!(
            ctx,
            INFO,
            event_names::BATCH_STARTED,
            Stage::Batch,
            "batch started",
            cases = cases.len(),
            max_parallel = self.settings.max_parallel
        );

        let outcomes: Vec<CaseOutcome> = cases
            .chunks(self.settings.max_parallel)
            .flat_map(|chunk| {
                thread::scope(|s| {
                    let handles: Vec<_> = chunk
                        .iter()
                        .map(|case| {
                            s.spawn(move || {
                                tracing::dispatcher::with_default(dispatch, || {
                                    compute_case(ctx, case)
                                })
                            })
                        })
                        .collect();

                    handles
                        .into_iter()
                        .zip(chunk)
                        .map(|(h, case)| {
                            h.join().unwrap_or_else(|_| {
                                crate::log_event!(
                                    ctx,
                                    ERROR,
                                    event_names::INTERNAL_ERROR,
                                    Stage::Compute,
                                    "case worker panicked",
                                    case = case.name.as_str()
                                );
                                failed(case, PANIC_CODE, "worker thread panicked".to_string())
                            })
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let report = BatchReport {
            run_id: ctx.run_id.clone(),
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };
        crate::log_event!(
            ctx,
            INFO,
            event_names::BATCH_FINISHED,
            Stage::Batch,
            "batch finished",
            computed = report.computed_count(),
            failed = report.failed_count(),
            diagnostics = report.diagnostic_count()
        );
        report
    }
}

fn compute_case(ctx: &LogContext, case: &ActivityCase) -> CaseOutcome {
    match case.compute() {
        Ok(report) => {
            if report.has_diagnostics() {
                for diagnostic in &report.diagnostics {
                    crate::log_event!(
                        ctx,
                        INFO,
                        event_names::CASE_DIAGNOSTICS,
                        Stage::Compute,
                        diagnostic.message(),
                        case = case.name.as_str(),
                        kind = diagnostic.kind()
                    );
                }
            } else {
                crate::log_event!(
                    ctx,
                    DEBUG,
                    event_names::CASE_COMPUTED,
                    Stage::Compute,
                    "case computed",
                    case = case.name.as_str(),
                    bins = case.activity.len()
                );
            }
            CaseOutcome {
                name: case.name.clone(),
                threshold: case.threshold,
                variants: case.variants,
                status: CaseStatus::Computed { report },
            }
        }
        Err(e) => record_failure(ctx, case, &e),
    }
}

/// Failed outcome for `case`. Internal errors are logged as such.
fn record_failure(ctx: &LogContext, case: &ActivityCase, e: &EphemeralityError) -> CaseOutcome {
    if e.is_internal() {
        crate::log_event!(
            ctx,
            ERROR,
            event_names::INTERNAL_ERROR,
            Stage::Compute,
            "internal error computing case",
            case = case.name.as_str(),
            code = e.code(),
            error = tracing::field::display(e)
        );
    } else {
        crate::log_event!(
            ctx,
            WARN,
            event_names::CASE_FAILED,
            Stage::Compute,
            "case failed",
            case = case.name.as_str(),
            code = e.code(),
            error = tracing::field::display(e)
        );
    }
    failed(case, e.code(), e.to_string())
}

fn failed(case: &ActivityCase, code: u32, message: String) -> CaseOutcome {
    CaseOutcome {
        name: case.name.clone(),
        threshold: case.threshold,
        variants: case.variants,
        status: CaseStatus::Failed { code, message },
    }
}
