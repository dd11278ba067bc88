//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG path → defaults.

use std::path::{Path, PathBuf};

/// Discovered configuration file path.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to config.json (or None if not found).
    pub config: Option<PathBuf>,

    /// Where the config was found (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the caller.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_CONFIG_PATH: &str = "EPHEMERALITY_CONFIG";
pub const ENV_CONFIG_DIR: &str = "EPHEMERALITY_CONFIG_DIR";

/// Standard config file name.
pub const CONFIG_FILENAME: &str = "config.json";

/// Application name for XDG directories.
const APP_NAME: &str = "ephemerality";

/// Resolve the configuration path.
///
/// Resolution order:
/// 1. Explicit path (if provided and present)
/// 2. `EPHEMERALITY_CONFIG` environment variable
/// 3. `EPHEMERALITY_CONFIG_DIR` environment variable + filename
/// 4. XDG config directory (~/.config/ephemerality/)
/// 5. Built-in defaults (None)
pub fn resolve_config(cli_config: Option<&Path>) -> ConfigPaths {
    // 1. CLI argument
    if let Some(path) = cli_config {
        if path.exists() {
            return found(path.to_path_buf(), ConfigSource::CliArgument);
        }
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(CONFIG_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 4. XDG config directory
    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::XdgConfig);
        }
    }

    // 5. Built-in default
    ConfigPaths::default()
}

fn found(path: PathBuf, source: ConfigSource) -> ConfigPaths {
    ConfigPaths {
        config: Some(path),
        source,
    }
}

/// Get the XDG config directory for ephemerality.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
