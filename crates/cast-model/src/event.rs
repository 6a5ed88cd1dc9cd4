//! Event types for the asciicast event stream.
//!
//! On the wire each event is a 3-element JSON array `[time, code, data]`,
//! one per line, e.g. `[0.248848, "o", "hello\r\n"]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fractional seconds since the start of the recording.
pub type TimeSecs = f64;

/// Direction of the recorded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Data written to the terminal (stdout).
    #[serde(rename = "o")]
    Output,
    /// Data read from the keyboard (stdin).
    #[serde(rename = "i")]
    Input,
}

impl EventKind {
    /// The single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Output => "o",
            Self::Input => "i",
        }
    }

    /// Parse a wire code. Anything other than `"o"` or `"i"` is an invalid event.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "o" => Ok(Self::Output),
            "i" => Ok(Self::Input),
            other => Err(ValidationError::invalid_event(format!(
                "unknown event kind `{other}`, expected `o` or `i`"
            ))),
        }
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single recorded terminal event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EventTriple", into = "EventTriple")]
pub struct Event {
    /// Seconds since recording start.
    pub time: TimeSecs,

    /// Output or input.
    pub kind: EventKind,

    /// Raw terminal data (may contain escape sequences).
    pub data: String,
}

/// Wire shape of an event: `[time, kind, data]`.
#[derive(Serialize, Deserialize)]
struct EventTriple(TimeSecs, EventKind, String);

impl From<EventTriple> for Event {
    fn from(EventTriple(time, kind, data): EventTriple) -> Self {
        Self { time, kind, data }
    }
}

impl From<Event> for EventTriple {
    fn from(event: Event) -> Self {
        EventTriple(event.time, event.kind, event.data)
    }
}

impl Event {
    pub fn new(time: TimeSecs, kind: EventKind, data: impl Into<String>) -> Self {
        Self {
            time,
            kind,
            data: data.into(),
        }
    }

    /// Create an output event.
    pub fn output(time: TimeSecs, data: impl Into<String>) -> Self {
        Self::new(time, EventKind::Output, data)
    }

    /// Create an input event.
    pub fn input(time: TimeSecs, data: impl Into<String>) -> Self {
        Self::new(time, EventKind::Input, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_as_triple() {
        let event = Event::output(1.5, "foo");
        assert_eq!(serde_json::to_string(&event).unwrap(), r#"[1.5,"o","foo"]"#);

        let event = Event::input(2.0, "ls\r");
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"[2.0,"i","ls\r"]"#
        );
    }

    #[test]
    fn test_event_parses_from_triple() {
        let event: Event = serde_json::from_str(r#"[0.248848, "o", "\u001b[1;31mHi"]"#).unwrap();
        assert_eq!(event.time, 0.248848);
        assert_eq!(event.kind, EventKind::Output);
        assert_eq!(event.data, "\u{1b}[1;31mHi");
    }

    #[test]
    fn test_event_integer_time_is_accepted() {
        let event: Event = serde_json::from_str(r#"[1,"i","x"]"#).unwrap();
        assert_eq!(event.time, 1.0);
        assert_eq!(event.kind, EventKind::Input);
    }

    #[test]
    fn test_event_rejects_unknown_kind() {
        assert!(serde_json::from_str::<Event>(r#"[1,"x","data"]"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"[1,"","data"]"#).is_err());
    }

    #[test]
    fn test_event_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<Event>(r#"[1,"o"]"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"[1,"o","a","b"]"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"["1","o","a"]"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"[1,"o",2]"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"time":1}"#).is_err());
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!("o".parse::<EventKind>().unwrap(), EventKind::Output);
        assert_eq!("i".parse::<EventKind>().unwrap(), EventKind::Input);
        assert_eq!(EventKind::Input.to_string(), "i");

        let err = EventKind::from_code("abc").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEvent { .. }));
        assert!(EventKind::from_code("").is_err());
    }
}
