//! asciicast v1 reader.
//!
//! v1 casts are a single JSON document whose `stdout` array holds
//! `[delay, data]` frames, each delay relative to the previous frame.
//! They are converted to v2 recordings (absolute times) before editing.

use std::collections::BTreeMap;
use std::io::Read;

use castedit_common::clock::round_micros;
use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::event::{Event, TimeSecs};
use crate::header::{Header, Theme, FORMAT_VERSION};
use crate::recording::Recording;

/// Version number of the legacy format.
pub const V1_FORMAT_VERSION: u8 = 1;

/// A decoded v1 cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastV1 {
    pub version: u8,
    pub width: u32,
    pub height: u32,

    /// Total duration in seconds as stored by the recorder.
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Output frames.
    pub stdout: Vec<FrameV1>,
}

/// One v1 frame: delay since the previous frame, then the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameV1(pub TimeSecs, pub String);

impl CastV1 {
    /// Read a whole v1 document.
    pub fn from_reader<R: Read>(reader: R) -> CastResult<Self> {
        let cast: Self =
            serde_json::from_reader(reader).map_err(|source| CastError::Document { source })?;
        if cast.version != V1_FORMAT_VERSION {
            return Err(CastError::UnsupportedVersion {
                found: cast.version,
                expected: V1_FORMAT_VERSION,
            });
        }
        Ok(cast)
    }

    /// Convert to a v2 recording with absolute, microsecond-rounded times.
    pub fn into_recording(self) -> Recording {
        let header = Header {
            version: FORMAT_VERSION,
            width: self.width,
            height: self.height,
            timestamp: None,
            command: self.command,
            title: self.title,
            idle_time_limit: None,
            theme: Theme::default(),
            env: self.env,
        };

        let mut elapsed = 0.0;
        let events = self
            .stdout
            .into_iter()
            .map(|FrameV1(delay, data)| {
                elapsed = round_micros(elapsed + delay);
                Event::output(elapsed, data)
            })
            .collect::<Vec<_>>();

        tracing::debug!(events = events.len(), "converted v1 cast");
        Recording::new(header, events)
    }
}
