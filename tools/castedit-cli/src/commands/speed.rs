//! Change playback speed of a range of frames.

use std::path::PathBuf;

use castedit_editor::SpeedSpan;
use castedit_transformer::Speed;

pub fn run(
    factor: f64,
    start: Option<f64>,
    end: Option<f64>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    let speed = Speed {
        factor,
        span: SpeedSpan::new(start, end),
    };
    super::transform(speed, input, output, strict)
}
