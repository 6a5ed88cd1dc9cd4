//! asciicast v2 codec.
//!
//! A v2 cast is newline-delimited JSON: the first line holds the header
//! object, every following line is one `[time, code, data]` event.

use std::io::{BufRead, Write};

use crate::error::{CastError, CastResult};
use crate::event::Event;
use crate::header::Header;
use crate::recording::Recording;

/// Decode a complete cast, reading until end of input.
///
/// Blank lines are skipped. Errors carry the 1-based line number.
pub fn decode<R: BufRead>(reader: R) -> CastResult<Recording> {
    let mut header: Option<Header> = None;
    let mut events = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if header.is_none() {
            let parsed = serde_json::from_str(trimmed).map_err(|source| CastError::Header {
                line: line_no,
                source,
            })?;
            header = Some(parsed);
            continue;
        }

        let event: Event = serde_json::from_str(trimmed).map_err(|source| CastError::Event {
            line: line_no,
            source,
        })?;
        events.push(event);
    }

    let header = header.ok_or(CastError::MissingHeader)?;
    tracing::debug!(
        width = header.width,
        height = header.height,
        events = events.len(),
        "decoded cast"
    );
    Ok(Recording::new(header, events))
}

/// Decode a cast held in memory.
pub fn decode_str(content: &str) -> CastResult<Recording> {
    decode(content.as_bytes())
}

/// Encode a recording: header line first, then one line per event.
pub fn encode<W: Write>(mut writer: W, recording: &Recording) -> CastResult<()> {
    serde_json::to_writer(&mut writer, &recording.header).map_err(CastError::Encode)?;
    writer.write_all(b"\n")?;

    for event in &recording.events {
        serde_json::to_writer(&mut writer, event).map_err(CastError::Encode)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    tracing::debug!(events = recording.len(), "encoded cast");
    Ok(())
}

/// Encode a recording into a string.
pub fn encode_to_string(recording: &Recording) -> CastResult<String> {
    let mut buf = Vec::new();
    encode(&mut buf, recording)?;
    String::from_utf8(buf).map_err(|e| {
        CastError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
