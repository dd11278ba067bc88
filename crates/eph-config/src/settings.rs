//! Configuration types.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use eph_math::{VariantSet, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;
use crate::logging::LoggingSettings;
use crate::validate::ValidationError;

/// Default number of cases computed concurrently by the batch runner.
pub const DEFAULT_MAX_PARALLEL: usize = 4;

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemeralityConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub compute: ComputeSettings,

    #[serde(default)]
    pub binning: BinningSettings,

    #[serde(default)]
    pub batch: BatchSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

impl Default for EphemeralityConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            description: None,
            compute: ComputeSettings::default(),
            binning: BinningSettings::default(),
            batch: BatchSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Defaults applied to cases that do not carry their own values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputeSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub variants: VariantSet,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for ComputeSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            variants: VariantSet::all(),
        }
    }
}

/// Timestamp binning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BinningSettings {
    #[serde(default)]
    pub granularity: Granularity,

    /// Offset from UTC, in hours, applied to naive datetimes.
    #[serde(default)]
    pub utc_offset_hours: f64,
}

/// Batch runner options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
}

fn default_max_parallel() -> usize {
    DEFAULT_MAX_PARALLEL
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }
}

impl EphemeralityConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }
}
