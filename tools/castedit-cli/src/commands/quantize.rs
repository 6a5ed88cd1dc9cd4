//! Cap the delays between frames.

use std::path::PathBuf;

use castedit_editor::QuantizeRange;
use castedit_transformer::Quantize;

pub fn run(
    ranges: Vec<QuantizeRange>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    let quantize = Quantize::new(ranges);
    for (i, j) in quantize.overlapping() {
        tracing::warn!(
            first = %quantize.ranges[i],
            second = %quantize.ranges[j],
            "quantize ranges overlap; the first one wins"
        );
    }
    super::transform(quantize, input, output, strict)
}
