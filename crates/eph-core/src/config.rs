//! Configuration loading for eph-core.
//!
//! This module handles:
//! - Config resolution order (explicit path > env > XDG > defaults)
//! - Loading config.json through eph-config
//! - Semantic validation before anything runs

use std::path::{Path, PathBuf};

use eph_config::resolve::{resolve_config, ConfigSource};
use eph_config::{validate_config, EphemeralityConfig, ValidationError};
use thiserror::Error;
use tracing::{debug, info};

use crate::logging::{event_names, Stage};

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid config {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Semantic validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl ConfigError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::NotFound { .. } => 10,
            ConfigError::Invalid { source, .. } => source.code(),
            ConfigError::ValidationError(e) => e.code(),
        }
    }
}

/// Resolved configuration with provenance information.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The loaded configuration.
    pub config: EphemeralityConfig,
    /// Path to the config file (None if using defaults).
    pub path: Option<PathBuf>,
    /// Where the config came from.
    pub source: ConfigSource,
}

/// Load and validate configuration with the standard resolution order.
///
/// An explicit path that does not exist is an error rather than a silent
/// fallback to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
    }

    let paths = resolve_config(explicit);
    let resolved = match paths.config {
        Some(path) => {
            let config =
                EphemeralityConfig::from_file(&path).map_err(|source| ConfigError::Invalid {
                    path: path.clone(),
                    source,
                })?;
            info!(
                target: event_names::CONFIG_LOADED,
                stage = %Stage::Init,
                path = %path.display(),
                source = %paths.source,
                "config loaded"
            );
            ResolvedConfig {
                config,
                path: Some(path),
                source: paths.source,
            }
        }
        None => {
            debug!(
                target: event_names::CONFIG_DEFAULT_USED,
                stage = %Stage::Init,
                "using built-in config"
            );
            ResolvedConfig {
                config: EphemeralityConfig::default(),
                path: None,
                source: ConfigSource::BuiltinDefault,
            }
        }
    };

    validate_config(&resolved.config)?;
    Ok(resolved)
}
