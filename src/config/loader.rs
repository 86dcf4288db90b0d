//! Configuration file loading with precedence handling.

use crate::model::DEFAULT_REUSE_IDENTIFIER;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LISTBIND_CONFIG";

/// Environment variable overriding the default reuse identifier.
pub const REUSE_IDENTIFIER_ENV_VAR: &str = "LISTBIND_DEFAULT_REUSE_ID";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, defaults are used.
/// Corresponds to `~/.config/listbind/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reuse identifier for rows that do not name one.
    #[serde(default)]
    pub default_reuse_identifier: Option<String>,

    /// Trip a debug assertion when a stale coordinate is queried.
    #[serde(default)]
    pub fail_fast_on_stale: Option<bool>,

    /// Render section footers.
    #[serde(default)]
    pub show_footers: Option<bool>,

    /// Catalog file opened when none is given on the command line.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Reuse identifier for rows that do not name one.
    pub default_reuse_identifier: String,
    /// Trip a debug assertion on stale coordinates.
    pub fail_fast_on_stale: bool,
    /// Render section footers.
    pub show_footers: bool,
    /// Catalog file, if any.
    pub catalog_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_reuse_identifier: DEFAULT_REUSE_IDENTIFIER.to_string(),
            fail_fast_on_stale: true,
            show_footers: true,
            catalog_path: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/listbind/listbind.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory if no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("listbind").join("listbind.log")
    } else {
        PathBuf::from("listbind.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/listbind/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("listbind").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LISTBIND_CONFIG` environment variable
/// 3. Default path `~/.config/listbind/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        default_reuse_identifier: config
            .default_reuse_identifier
            .unwrap_or(defaults.default_reuse_identifier),
        fail_fast_on_stale: config
            .fail_fast_on_stale
            .unwrap_or(defaults.fail_fast_on_stale),
        show_footers: config.show_footers.unwrap_or(defaults.show_footers),
        catalog_path: config.catalog_path.or(defaults.catalog_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LISTBIND_DEFAULT_REUSE_ID`: Override the default reuse identifier
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(reuse_identifier) = std::env::var(REUSE_IDENTIFIER_ENV_VAR) {
        if !reuse_identifier.trim().is_empty() {
            config.default_reuse_identifier = reuse_identifier;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set are
/// passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    catalog_override: Option<PathBuf>,
    fail_fast_override: Option<bool>,
    hide_footers_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(catalog) = catalog_override {
        config.catalog_path = Some(catalog);
    }

    if let Some(fail_fast) = fail_fast_override {
        config.fail_fast_on_stale = fail_fast;
    }

    if let Some(hide_footers) = hide_footers_override {
        config.show_footers = !hide_footers;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
