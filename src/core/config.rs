//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::query::{Filter, SortKey, SortOrder};
use crate::core::toast::DEFAULT_TOAST_TIMEOUT_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub toast_timeout_ms: Option<u64>,
    pub default_filter: Option<Filter>,
    pub default_sort: Option<SortKey>,
    pub default_order: Option<SortOrder>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "taskdeck.log";

const ENV_TOAST_TIMEOUT_MS: &str = "TASKDECK_TOAST_TIMEOUT_MS";
const ENV_LOG_LEVEL: &str = "TASKDECK_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub filter: Filter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub toast_timeout_ms: u64,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub filter: Option<Filter>,
    pub sort_key: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub toast_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Io(io) => io,
            ConfigError::Parse(_) => std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    }
}

// ============================================================================
// Startup Notes
// ============================================================================

/// Diagnostics produced while loading and resolving config.
///
/// The logger is configured from the resolved values, so it cannot exist
/// yet when these are produced. They are held here and replayed once the
/// logger is installed.
#[derive(Debug, Default)]
pub struct ConfigNotes {
    entries: Vec<(Level, String)>,
}

impl ConfigNotes {
    fn push(&mut self, level: Level, message: String) {
        self.entries.push((level, message));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Emits every held message through the installed logger.
    pub fn replay(self) {
        for (level, message) in self.entries {
            log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdeck").join("config.toml"))
}

/// Load config from `~/.taskdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TaskdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut ConfigNotes) -> Result<TaskdeckConfig, ConfigError> {
    let Some(path) = config_path() else {
        notes.push(
            Level::Warn,
            "Could not determine home directory, using default config".to_string(),
        );
        return Ok(TaskdeckConfig::default());
    };
    load_config_from(&path, notes)
}

pub fn load_config_from(
    path: &Path,
    notes: &mut ConfigNotes,
) -> Result<TaskdeckConfig, ConfigError> {
    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notes);
        return Ok(TaskdeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TaskdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Taskdeck Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# toast_timeout_ms = 2000            # Or set TASKDECK_TOAST_TIMEOUT_MS
# default_filter = "all"             # "all", "todo", "in_progress", "done"
# default_sort = "created"           # "created" or "due_date"
# default_order = "asc"              # "asc" or "desc"
# log_level = "info"                 # Or set TASKDECK_LOG_LEVEL
# log_file = "taskdeck.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut ConfigNotes) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &TaskdeckConfig,
    cli: &CliOverrides,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notes)
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env(
    config: &TaskdeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Toast timeout: CLI → env → config → default
    let toast_timeout_ms = cli
        .toast_timeout_ms
        .or_else(|| {
            env(ENV_TOAST_TIMEOUT_MS).and_then(|v| parse_millis(ENV_TOAST_TIMEOUT_MS, &v, notes))
        })
        .or(config.general.toast_timeout_ms)
        .unwrap_or(defaults.toast_timeout_ms);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_level(&level, notes))
        .unwrap_or(defaults.log_level);

    ResolvedConfig {
        filter: cli
            .filter
            .or(config.general.default_filter)
            .unwrap_or(defaults.filter),
        sort_key: cli
            .sort_key
            .or(config.general.default_sort)
            .unwrap_or(defaults.sort_key),
        sort_order: cli
            .sort_order
            .or(config.general.default_order)
            .unwrap_or(defaults.sort_order),
        toast_timeout_ms,
        log_level,
        log_file: config
            .general
            .log_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file),
    }
}

fn parse_millis(name: &str, value: &str, notes: &mut ConfigNotes) -> Option<u64> {
    match value.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            notes.push(Level::Warn, format!("Ignoring {name}={value:?}: {e}"));
            None
        }
    }
}

fn parse_level(value: &str, notes: &mut ConfigNotes) -> Option<LevelFilter> {
    match value.trim().parse() {
        Ok(level) => Some(level),
        Err(_) => {
            notes.push(
                Level::Warn,
                format!("Unknown log level {value:?}, using default"),
            );
            None
        }
    }
}
