//! [`Transformation`] adaptors for the editing operators.

use castedit_cast_model::{Recording, TimeSecs};
use castedit_editor::{cut, quantize, speed_span, EditResult, QuantizeRange, SpeedSpan};

use crate::transformation::Transformation;

/// Remove `[from, to]` from the stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    pub from: TimeSecs,
    pub to: TimeSecs,
}

impl Transformation for Cut {
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
        cut(recording, self.from, self.to)
    }

    fn name(&self) -> &str {
        "cut"
    }
}

/// Clamp delays into the given ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantize {
    pub ranges: Vec<QuantizeRange>,
}

impl Quantize {
    pub fn new(ranges: Vec<QuantizeRange>) -> Self {
        Self { ranges }
    }

    /// Index pairs `(i, j)`, `i < j`, of ranges that overlap each other.
    ///
    /// Overlaps are legal (the earlier range wins) but usually a typo.
    pub fn overlapping(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.intersects(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl Transformation for Quantize {
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
        quantize(recording, &self.ranges)
    }

    fn name(&self) -> &str {
        "quantize"
    }
}

/// Rescale delays in a span by `factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    pub factor: f64,
    pub span: SpeedSpan,
}

impl Transformation for Speed {
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
        speed_span(recording, self.factor, self.span)
    }

    fn name(&self) -> &str {
        "speed"
    }
}
