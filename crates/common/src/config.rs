//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CasteditError, CasteditResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Editing behaviour shared by every command.
    pub editing: EditingDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults applied to every transformation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingDefaults {
    /// Validate the decoded cast before applying a transformation.
    pub strict: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "castedit_editor=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A missing file yields the defaults; a malformed one is an error so the
    /// caller can report it once logging is set up.
    pub fn load() -> CasteditResult<Self> {
        Self::load_or_default(&config_file_path())
    }

    /// Load config from `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> CasteditResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> CasteditResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CasteditError::path_io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| CasteditError::config(format!("{}: {e}", path.display())))
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("castedit").join("config.json")
}
