//! Ephemerality configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for config.json
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation

pub mod granularity;
pub mod logging;
pub mod resolve;
pub mod settings;
pub mod validate;

pub use granularity::Granularity;
pub use logging::{LogFormat, LogLevel, LoggingSettings};
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use settings::{BatchSettings, BinningSettings, ComputeSettings, EphemeralityConfig};
pub use validate::{validate_config, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
