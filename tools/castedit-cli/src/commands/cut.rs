//! Remove a range of frames.

use std::path::PathBuf;

use castedit_transformer::Cut;

pub fn run(
    start: f64,
    end: f64,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    tracing::debug!(start, end, "cutting");
    super::transform(Cut { from: start, to: end }, input, output, strict)
}
