//! The asciicast header: first line of every v2 cast.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Version number written by this crate and required by the validator.
pub const FORMAT_VERSION: u8 = 2;

/// Recording metadata.
///
/// Unknown top-level fields are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    /// Format version (must be `2`).
    pub version: u8,

    /// Initial terminal width (columns).
    pub width: u32,

    /// Initial terminal height (rows).
    pub height: u32,

    /// Unix timestamp of the beginning of the recording session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,

    /// Command that was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Title of the cast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Maximum idle time between events applied by players.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_time_limit: Option<f64>,

    /// Color theme of the recorded terminal.
    #[serde(default, skip_serializing_if = "Theme::is_empty")]
    pub theme: Theme,

    /// Captured environment variables (the official recorder keeps `SHELL`
    /// and `TERM`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// Terminal color theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Normal text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,

    /// Normal background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,

    /// 8 or 16 colors separated by `:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.palette.is_none()
    }
}

impl Header {
    /// A minimal v2 header for the given terminal geometry.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            version: FORMAT_VERSION,
            width,
            height,
            timestamp: None,
            command: None,
            title: None,
            idle_time_limit: None,
            theme: Theme::default(),
            env: BTreeMap::new(),
        }
    }

    /// Captured `SHELL`, if any.
    pub fn shell(&self) -> Option<&str> {
        self.env.get("SHELL").map(String::as_str)
    }

    /// Captured `TERM`, if any.
    pub fn term(&self) -> Option<&str> {
        self.env.get("TERM").map(String::as_str)
    }
}
