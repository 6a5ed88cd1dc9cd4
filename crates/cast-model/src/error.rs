//! Errors raised while decoding, encoding, or validating casts.

/// Structural problems found by the validator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error(
        "invalid event{}: {reason}",
        .index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    InvalidEvent {
        /// Position in the event stream, when known.
        index: Option<usize>,
        reason: String,
    },

    #[error("unordered event stream: event {index} at {time}s comes before {previous}s")]
    UnorderedStream {
        index: usize,
        time: f64,
        previous: f64,
    },
}

impl ValidationError {
    pub fn invalid_header(reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            reason: reason.into(),
        }
    }

    pub fn invalid_event(reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            index: None,
            reason: reason.into(),
        }
    }

    /// Attach a stream position to an `InvalidEvent`; other kinds pass through.
    pub fn at_index(self, at: usize) -> Self {
        match self {
            Self::InvalidEvent { reason, .. } => Self::InvalidEvent {
                index: Some(at),
                reason,
            },
            other => other,
        }
    }
}

/// Errors from the asciicast codecs.
#[derive(Debug, thiserror::Error)]
pub enum CastError {
    #[error("cast is empty: missing header line")]
    MissingHeader,

    #[error("malformed header on line {line}: {source}")]
    Header {
        line: usize,
        source: serde_json::Error,
    },

    #[error("malformed event on line {line}: {source}")]
    Event {
        line: usize,
        source: serde_json::Error,
    },

    #[error("malformed cast document: {source}")]
    Document { source: serde_json::Error },

    #[error("unsupported asciicast version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    #[error("failed to encode cast: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for codec operations.
pub type CastResult<T> = Result<T, CastError>;
