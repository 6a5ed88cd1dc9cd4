//! Speed: rescale the delays inside a sub-range of the stream.

use castedit_cast_model::{Recording, TimeSecs};

use crate::error::{Bound, EditError, EditResult};

/// Slowest allowed factor (10x faster playback).
pub const MIN_FACTOR: f64 = 0.1;
/// Largest allowed factor (10x slower playback).
pub const MAX_FACTOR: f64 = 10.0;

/// Multiply every delay between the events at `from` and `to` by `factor`.
///
/// A factor above 1 slows the section down, below 1 speeds it up. Events
/// after `to` are shifted by the total change so their spacing is kept;
/// events before `from` are untouched. Both bounds must match recorded
/// timestamps exactly; with duplicates the last matching event is used.
pub fn speed(
    recording: &mut Recording,
    factor: f64,
    from: TimeSecs,
    to: TimeSecs,
) -> EditResult<()> {
    if recording.is_empty() {
        return Err(EditError::EmptyEventStream);
    }
    if !(MIN_FACTOR..=MAX_FACTOR).contains(&factor) {
        return Err(EditError::invalid_argument(format!(
            "factor must be within {MIN_FACTOR} and {MAX_FACTOR}, got {factor}"
        )));
    }
    if from.partial_cmp(&to) != Some(std::cmp::Ordering::Less) {
        return Err(EditError::invalid_argument(format!(
            "`from` ({from}) must be smaller than `to` ({to})"
        )));
    }

    let from_idx = recording
        .last_index_at(from)
        .ok_or_else(|| EditError::not_found(Bound::Initial, from))?;
    let to_idx = recording
        .last_index_at(to)
        .ok_or_else(|| EditError::not_found(Bound::Final, to))?;
    if from_idx > to_idx {
        return Err(EditError::invalid_argument(
            "event stream is not ordered by time",
        ));
    }

    let events = &mut recording.events;
    let mut accumulated = 0.0;
    let deltas: Vec<TimeSecs> = events[from_idx..=to_idx]
        .windows(2)
        .map(|w| {
            let delta = w[1].time - w[0].time;
            let scaled = delta * factor;
            accumulated += scaled - delta;
            scaled
        })
        .collect();

    for (offset, delta) in deltas.into_iter().enumerate() {
        let i = from_idx + offset;
        events[i + 1].time = events[i].time + delta;
    }
    for event in &mut events[to_idx + 1..] {
        event.time += accumulated;
    }

    tracing::debug!(factor, from, to, accumulated, "rescaled delays");
    Ok(())
}

/// Optional bounds for [`speed_span`].
///
/// A missing start resolves to the first event's time, a missing end to the
/// last event's time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedSpan {
    pub start: Option<TimeSecs>,
    pub end: Option<TimeSecs>,
}

impl SpeedSpan {
    pub fn new(start: Option<TimeSecs>, end: Option<TimeSecs>) -> Self {
        Self { start, end }
    }

    /// The whole stream.
    pub fn whole() -> Self {
        Self::default()
    }

    /// Concrete `(from, to)` for `recording`, or `None` when it has no events.
    pub fn resolve(&self, recording: &Recording) -> Option<(TimeSecs, TimeSecs)> {
        let start = self.start.or_else(|| recording.first_time())?;
        let end = self.end.or_else(|| recording.last_time())?;
        Some((start, end))
    }
}

/// [`speed`] with bounds that may be left open.
pub fn speed_span(recording: &mut Recording, factor: f64, span: SpeedSpan) -> EditResult<()> {
    let (from, to) = span
        .resolve(recording)
        .ok_or(EditError::EmptyEventStream)?;
    speed(recording, factor, from, to)
}
