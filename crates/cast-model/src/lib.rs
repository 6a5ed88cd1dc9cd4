//! castedit Cast Model
//!
//! Defines the core data contracts for asciicast recordings:
//! - **Header:** Terminal geometry and descriptive metadata
//! - **Events:** Timestamped terminal output/input frames
//! - **Recording:** Header plus the ordered event stream
//! - **Validation:** Structural invariants checked before editing
//! - **Codec:** The asciicast v2 line-delimited JSON format, plus a v1 reader
//!
//! Timestamps are fractional seconds since the start of the recording.

pub mod codec;
pub mod error;
pub mod event;
pub mod header;
pub mod recording;
pub mod v1;
pub mod validate;

pub use codec::{decode, decode_str, encode, encode_to_string};
pub use error::*;
pub use event::*;
pub use header::*;
pub use recording::*;
pub use validate::{validate, validate_event, validate_event_stream, validate_header};
