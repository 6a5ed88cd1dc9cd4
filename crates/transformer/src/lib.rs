//! castedit Transformer: run one edit over a cast stream
//!
//! The pipeline is strictly sequential:
//!
//! ```text
//! input ==> decode ==> [validate] ==> transformation ==> encode ==> output
//! ```
//!
//! Input is read to EOF before the transformation runs. Validation only
//! happens when the transformation is wrapped in [`Validated`].

pub mod error;
pub mod ops;
pub mod pipeline;
pub mod streams;
pub mod transformation;

pub use error::{PipelineError, PipelineResult};
pub use ops::{Cut, Quantize, Speed};
pub use pipeline::{convert_v1, run, Summary, Transformer};
pub use streams::{open_input, open_output, InputStream, OutputStream};
pub use transformation::{Transformation, Validated};
