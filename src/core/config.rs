//! # Configuration
//!
//! Settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.contact-manager/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all
//! options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ManagerConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub contacts_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.csv";
pub const DEFAULT_LOG_FILE: &str = "contact-manager.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub contacts_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Startup Notes
// ============================================================================

/// A message raised while loading config, before the logger is installed.
/// `main` replays these once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupNote {
    pub level: Level,
    pub message: String,
}

fn note(notes: &mut Vec<StartupNote>, level: Level, message: String) {
    notes.push(StartupNote { level, message });
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

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.contact-manager/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".contact-manager").join("config.toml"))
}

/// Load config from `~/.contact-manager/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ManagerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut Vec<StartupNote>) -> Result<ManagerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            note(
                notes,
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            return Ok(ManagerConfig::default());
        }
    };

    if !path.exists() {
        note(
            notes,
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, notes);
        return Ok(ManagerConfig::default());
    }

    let config = load_config_from(&path)?;
    note(notes, Level::Info, format!("Loaded config from {}", path.display()));
    note(notes, Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ManagerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path, notes: &mut Vec<StartupNote>) {
    let default_content = r#"# Contact Manager Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [storage]
# contacts_file = "contacts.csv"       # Relative paths resolve against the working directory

# [logging]
# log_file = "contact-manager.log"
# level = "info"                       # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        note(notes, Level::Warn, format!("Failed to create config directory: {}", e));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        note(notes, Level::Warn, format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_file` and `cli_level` come from CLI flags (None = not specified).
pub fn resolve(
    config: &ManagerConfig,
    cli_file: Option<&Path>,
    cli_level: Option<&str>,
    notes: &mut Vec<StartupNote>,
) -> ResolvedConfig {
    let contacts_file = cli_file
        .map(Path::to_path_buf)
        .or_else(|| config.storage.contacts_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTACTS_FILE));

    let log_file = config
        .logging
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = cli_level
        .or(config.logging.level.as_deref())
        .map(|name| parse_level(name, notes))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        contacts_file,
        log_file,
        log_level,
    }
}

/// Unknown level names fall back to the default rather than failing startup.
fn parse_level(name: &str, notes: &mut Vec<StartupNote>) -> LevelFilter {
    name.parse().unwrap_or_else(|_| {
        note(
            notes,
            Level::Warn,
            format!("Unknown log level '{}', using {}", name, DEFAULT_LOG_LEVEL),
        );
        DEFAULT_LOG_LEVEL
    })
}
