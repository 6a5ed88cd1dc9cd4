//! Editing errors.

use std::fmt;

use castedit_cast_model::{TimeSecs, ValidationError};

/// Which end of an edit interval a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Initial,
    Final,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// Errors raised by the editing operators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("a cast with a non-empty event stream must be supplied")]
    EmptyEventStream,

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("couldn't find {bound} frame: no event at exactly {time}s")]
    FrameNotFound { bound: Bound, time: TimeSecs },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for editing operations.
pub type EditResult<T> = Result<T, EditError>;

impl EditError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub(crate) fn not_found(bound: Bound, time: TimeSecs) -> Self {
        Self::FrameNotFound { bound, time }
    }
}
