//! Structural validation of recordings.
//!
//! Editing operators assume a valid stream but do not run these checks
//! themselves; callers that want strict-format guarantees validate first.

use crate::error::ValidationError;
use crate::event::Event;
use crate::header::{Header, FORMAT_VERSION};
use crate::recording::Recording;

/// Check the header: version 2 and a non-zero terminal size.
pub fn validate_header(header: &Header) -> Result<(), ValidationError> {
    if header.version != FORMAT_VERSION {
        return Err(ValidationError::invalid_header(format!(
            "version must be {FORMAT_VERSION}, got {}",
            header.version
        )));
    }
    if header.width == 0 {
        return Err(ValidationError::invalid_header(
            "width must be greater than zero",
        ));
    }
    if header.height == 0 {
        return Err(ValidationError::invalid_header(
            "height must be greater than zero",
        ));
    }
    Ok(())
}

/// Check a single event.
///
/// The kind tag is already guaranteed by [`crate::EventKind`]; what is left
/// is the timestamp itself.
pub fn validate_event(event: &Event) -> Result<(), ValidationError> {
    if !event.time.is_finite() {
        return Err(ValidationError::invalid_event(format!(
            "time must be a finite number, got {}",
            event.time
        )));
    }
    Ok(())
}

/// Check every event and the ordering invariant in one pass.
///
/// Times must be non-decreasing, starting from 0. An empty stream is valid.
pub fn validate_event_stream(events: &[Event]) -> Result<(), ValidationError> {
    let mut last_time = 0.0;
    for (index, event) in events.iter().enumerate() {
        validate_event(event).map_err(|e| e.at_index(index))?;
        if event.time < last_time {
            return Err(ValidationError::UnorderedStream {
                index,
                time: event.time,
                previous: last_time,
            });
        }
        last_time = event.time;
    }
    Ok(())
}

/// Validate header and event stream, stopping at the first problem.
pub fn validate(recording: &Recording) -> Result<(), ValidationError> {
    validate_header(&recording.header)?;
    validate_event_stream(&recording.events)?;
    tracing::debug!(events = recording.len(), "recording is valid");
    Ok(())
}
