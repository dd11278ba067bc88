//! A named activity vector together with the parameters to score it with.

use chrono::NaiveDateTime;
use eph_config::{BinningSettings, ComputeSettings};
use eph_math::{EphemeralityReport, VariantSet, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::binning::{datetimes_to_activity, timestamps_to_activity, BinningError};

/// One unit of work for the batch runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCase {
    /// Caller-chosen identifier, echoed back in the outcome.
    pub name: String,
    pub activity: Vec<f64>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub variants: VariantSet,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl ActivityCase {
    /// Case with the default threshold and all four variants.
    pub fn new(name: impl Into<String>, activity: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            activity,
            threshold: DEFAULT_THRESHOLD,
            variants: VariantSet::all(),
        }
    }

    /// Case using the threshold and variants from config.
    pub fn with_settings(
        name: impl Into<String>,
        activity: Vec<f64>,
        settings: &ComputeSettings,
    ) -> Self {
        Self {
            name: name.into(),
            activity,
            threshold: settings.threshold,
            variants: settings.variants,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_variants(mut self, variants: VariantSet) -> Self {
        self.variants = variants;
        self
    }

    /// Build a case by binning Unix timestamps (seconds).
    pub fn from_timestamps(
        name: impl Into<String>,
        timestamps: &[f64],
        range: Option<(f64, f64)>,
        binning: &BinningSettings,
    ) -> Result<Self, BinningError> {
        let activity = timestamps_to_activity(timestamps, range, binning.granularity)?;
        Ok(Self::new(name, activity))
    }

    /// Build a case by binning naive datetimes at the configured UTC offset.
    pub fn from_datetimes(
        name: impl Into<String>,
        datetimes: &[NaiveDateTime],
        range: Option<(NaiveDateTime, NaiveDateTime)>,
        binning: &BinningSettings,
    ) -> Result<Self, BinningError> {
        let activity = datetimes_to_activity(
            datetimes,
            range,
            binning.granularity,
            binning.utc_offset_hours,
        )?;
        Ok(Self::new(name, activity))
    }

    pub fn compute(&self) -> eph_math::Result<EphemeralityReport> {
        eph_math::compute(&self.activity, self.threshold, self.variants)
    }
}
