//! Logging configuration.
//!
//! Values come from the `logging` section of config.json, then the
//! environment, then explicit overrides from the host:
//! - `EPHEMERALITY_LOG`: level for eph-core and eph-math
//! - `RUST_LOG`: a full filter directive, used only when `EPHEMERALITY_LOG`
//!   is unset and no level was passed explicitly
//! - `EPHEMERALITY_LOG_FORMAT`: `human` or `jsonl`

use eph_config::LoggingSettings;
use tracing_subscriber::EnvFilter;

pub use eph_config::{LogFormat, LogLevel};

pub const ENV_LOG_LEVEL: &str = "EPHEMERALITY_LOG";
pub const ENV_LOG_FORMAT: &str = "EPHEMERALITY_LOG_FORMAT";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Whether to include timestamps in human output.
    pub timestamps: bool,
    /// Raw `RUST_LOG` directive, when it is the one in charge.
    pub rust_log: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_settings(&LoggingSettings::default())
    }
}

impl LogConfig {
    /// Config-file values, without looking at the environment.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        LogConfig {
            format: settings.format,
            level: settings.level,
            timestamps: settings.timestamps,
            rust_log: None,
        }
    }

    /// Config-file values overridden by the process environment.
    pub fn from_settings_and_env(settings: &LoggingSettings) -> Self {
        Self::from_settings(settings).with_env(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by the environment, then by explicit values.
    pub fn from_env(level: Option<LogLevel>, format: Option<LogFormat>) -> Self {
        let mut config = Self::from_settings_and_env(&LoggingSettings::default());
        if let Some(level) = level {
            config = config.with_level(level);
        }
        if let Some(format) = format {
            config.format = format;
        }
        config
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Unparseable values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_LOG_LEVEL) {
            Some(val) => {
                if let Ok(level) = val.parse::<LogLevel>() {
                    self.level = level;
                }
                self.rust_log = None;
            }
            None => {
                self.rust_log = lookup(ENV_RUST_LOG).filter(|v| !v.trim().is_empty());
            }
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT).and_then(|v| v.parse().ok()) {
            self.format = format;
        }
        self
    }

    /// Set the level; this also takes precedence over `RUST_LOG`.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.rust_log = None;
        self
    }

    /// Directive string for the crates that emit events.
    pub fn filter_directives(&self) -> String {
        format!("eph_core={level},eph_math={level}", level = self.level)
    }

    /// The filter `init_logging` installs.
    ///
    /// A `RUST_LOG` directive that fails to parse falls back to the level.
    pub fn env_filter(&self) -> EnvFilter {
        self.rust_log
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(self.filter_directives()))
    }
}
