//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::settings::EphemeralityConfig;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate a configuration semantically.
pub fn validate_config(config: &EphemeralityConfig) -> ValidationResult<()> {
    if config.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if let Err(e) = eph_math::check_threshold(config.compute.threshold) {
        return Err(ValidationError::InvalidValue {
            field: "compute.threshold".to_string(),
            message: e.to_string(),
        });
    }

    let width = config.binning.granularity.bin_width_secs();
    if !width.is_finite() || width <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "binning.granularity".to_string(),
            message: format!(
                "Bin width of {} is {} seconds; must be finite and positive",
                config.binning.granularity, width
            ),
        });
    }

    let offset = config.binning.utc_offset_hours;
    if !(-24.0..=24.0).contains(&offset) {
        return Err(ValidationError::InvalidValue {
            field: "binning.utc_offset_hours".to_string(),
            message: format!("Must be in [-24, 24], got {}", offset),
        });
    }

    if config.batch.max_parallel == 0 {
        return Err(ValidationError::InvalidValue {
            field: "batch.max_parallel".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&EphemeralityConfig::default()).unwrap();
    }

    #[test]
    fn threshold_out_of_range() {
        for t in [0.0, -1.0, 1.01, f64::NAN] {
            let mut config = EphemeralityConfig::default();
            config.compute.threshold = t;
            let err = validate_config(&config).unwrap_err();
            match err {
                ValidationError::InvalidValue { field, .. } => {
                    assert_eq!(field, "compute.threshold")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn offset_out_of_range() {
        let mut config = EphemeralityConfig::default();
        config.binning.utc_offset_hours = 25.0;
        assert_eq!(validate_config(&config).unwrap_err().code(), 65);

        config.binning.utc_offset_hours = -24.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn overflowing_bin_width_rejected() {
        let mut config = EphemeralityConfig::default();
        config.binning.granularity = "1e308d".parse().unwrap();
        match validate_config(&config).unwrap_err() {
            ValidationError::InvalidValue { field, .. } => {
                assert_eq!(field, "binning.granularity")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        config.binning.granularity = "0.25h".parse().unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let mut config = EphemeralityConfig::default();
        config.batch.max_parallel = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn schema_version_checked() {
        let mut config = EphemeralityConfig::default();
        config.schema_version = "0.9.0".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::VersionMismatch { .. })
        ));
    }
}
