//! castedit Common Utilities
//!
//! Shared infrastructure for all castedit crates:
//! - Error types and result aliases
//! - Clock and time rounding utilities for event timestamps
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
