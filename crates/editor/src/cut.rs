//! Cut: remove a closed time interval from the event stream.

use castedit_cast_model::{Recording, TimeSecs};
use castedit_common::clock::round_millis;

use crate::error::{Bound, EditError, EditResult};

/// Remove every event with `from <= time <= to` and shift later events left.
///
/// Both bounds must match recorded timestamps exactly. The event following
/// the cut takes the time of the first removed event; everything after it
/// keeps its relative spacing. Shifted times are rounded to milliseconds so
/// repeated cuts do not accumulate float drift, but never below the last
/// event kept before the cut.
pub fn cut(recording: &mut Recording, from: TimeSecs, to: TimeSecs) -> EditResult<()> {
    if recording.is_empty() {
        return Err(EditError::EmptyEventStream);
    }
    if from > to {
        return Err(EditError::invalid_argument(format!(
            "`from` ({from}) can't be bigger than `to` ({to})"
        )));
    }

    // First match, not last: duplicates at `from` fall inside the cut too.
    let from_idx = recording
        .first_index_at(from)
        .ok_or_else(|| EditError::not_found(Bound::Initial, from))?;
    let to_idx = recording
        .last_index_at(to)
        .ok_or_else(|| EditError::not_found(Bound::Final, to))?;
    if from_idx > to_idx {
        return Err(EditError::invalid_argument(
            "event stream is not ordered by time",
        ));
    }

    if let Some(next) = recording.events.get(to_idx + 1) {
        let delta = next.time - recording.events[from_idx].time;
        let floor = from_idx
            .checked_sub(1)
            .map_or(f64::NEG_INFINITY, |i| recording.events[i].time);
        for event in &mut recording.events[to_idx + 1..] {
            event.time = round_millis(event.time - delta).max(floor);
        }
        tracing::debug!(delta, shifted = recording.len() - to_idx - 1, "rebased tail");
    }

    let removed = recording.events.drain(from_idx..=to_idx).count();
    tracing::debug!(from, to, removed, remaining = recording.len(), "cut events");
    Ok(())
}
