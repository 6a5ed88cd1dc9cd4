//! castedit Editor: the event-stream transformation engine
//!
//! Rewrites event timestamps of a [`Recording`] in place:
//! - **Cut:** Remove a closed time interval and close the gap
//! - **Quantize:** Clamp delays that fall into ranges down to the range floor
//! - **Speed:** Rescale delays inside a sub-range by a factor
//!
//! This crate is pure computation: no I/O, no decoding. Every operator checks
//! its preconditions before touching the stream, so a failed call leaves the
//! recording unchanged.
//!
//! [`Recording`]: castedit_cast_model::Recording

pub mod cut;
pub mod error;
pub mod quantize;
pub mod speed;

pub use cut::cut;
pub use error::{Bound, EditError, EditResult};
pub use quantize::{quantize, QuantizeRange};
pub use speed::{speed, speed_span, SpeedSpan};
