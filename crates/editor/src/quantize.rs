//! Quantize: clamp inter-event delays down to the floor of a range.
//!
//! A range `[from, to)` maps every delay `d` with `from <= d < to` to `from`.
//! With ranges `0.3,1`, `1,2` and `2` a cast keeps all its short pauses,
//! while anything longer collapses onto one of three pause lengths.

use std::fmt;
use std::str::FromStr;

use castedit_cast_model::{Recording, TimeSecs};

use crate::error::{EditError, EditResult};

/// Upper bound used by ranges given without one.
pub const UNBOUNDED: TimeSecs = f64::MAX;

/// Half-open delay range `[from, to)`.
///
/// Constructed only through [`QuantizeRange::new`] or [`FromStr`], both of
/// which enforce `0 <= from < to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizeRange {
    from: TimeSecs,
    to: TimeSecs,
}

impl QuantizeRange {
    /// Build a range; `to = None` means unbounded.
    pub fn new(from: TimeSecs, to: Option<TimeSecs>) -> EditResult<Self> {
        if !from.is_finite() || from < 0.0 {
            return Err(EditError::invalid_argument(format!(
                "range lower bound must be a non-negative number, got {from}"
            )));
        }
        let to = match to {
            Some(to) if !to.is_finite() => {
                return Err(EditError::invalid_argument(format!(
                    "range upper bound must be a finite number, got {to}"
                )));
            }
            Some(to) => to,
            None => UNBOUNDED,
        };
        if from >= to {
            return Err(EditError::invalid_argument(format!(
                "range lower bound ({from}) must be smaller than its upper bound ({to})"
            )));
        }
        Ok(Self { from, to })
    }

    /// Range with no upper bound.
    pub fn unbounded(from: TimeSecs) -> EditResult<Self> {
        Self::new(from, None)
    }

    pub fn from(&self) -> TimeSecs {
        self.from
    }

    pub fn to(&self) -> TimeSecs {
        self.to
    }

    pub fn is_unbounded(&self) -> bool {
        self.to == UNBOUNDED
    }

    /// `from <= x < to`.
    pub fn in_range(&self, x: TimeSecs) -> bool {
        self.from <= x && x < self.to
    }

    /// Whether either endpoint of `other` falls inside this range.
    pub fn overlaps(&self, other: &QuantizeRange) -> bool {
        self.in_range(other.from) || self.in_range(other.to)
    }

    /// Whether the two half-open ranges share at least one delay value.
    ///
    /// Unlike [`overlaps`](Self::overlaps), ranges that merely touch
    /// (`[0.3, 1)` and `[1, 2)`) do not intersect.
    pub fn intersects(&self, other: &QuantizeRange) -> bool {
        self.from < other.to && other.from < self.to
    }
}

impl FromStr for QuantizeRange {
    type Err = EditError;

    /// Parse `from[,to]`, e.g. `"2"` or `"0.3,1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EditError::invalid_argument("range must not be empty"));
        }

        let mut parts = s.split(',');
        let from = parts.next().unwrap_or_default();
        let to = parts.next();
        if parts.next().is_some() {
            return Err(EditError::invalid_argument(format!(
                "invalid range format `{s}`: must be `value[,value]`"
            )));
        }

        let from = parse_bound(from)?;
        let to = to.map(parse_bound).transpose()?;
        Self::new(from, to)
    }
}

fn parse_bound(raw: &str) -> EditResult<TimeSecs> {
    raw.trim().parse::<f64>().map_err(|_| {
        EditError::invalid_argument(format!("malformed range: not a number `{raw}`"))
    })
}

impl fmt::Display for QuantizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{}, inf)", self.from)
        } else {
            write!(f, "[{}, {})", self.from, self.to)
        }
    }
}

/// Clamp every delay found in `ranges` to that range's lower bound.
///
/// Ranges are tried in order and the first match wins, so overlapping
/// ranges resolve by declaration order. All delays are computed from the
/// original times before any event moves; the first event's time is kept.
pub fn quantize(recording: &mut Recording, ranges: &[QuantizeRange]) -> EditResult<()> {
    if recording.is_empty() {
        return Err(EditError::EmptyEventStream);
    }
    if ranges.is_empty() {
        return Err(EditError::invalid_argument(
            "at least one quantize range must be specified",
        ));
    }

    let mut clamped = 0usize;
    let deltas: Vec<TimeSecs> = recording
        .delays()
        .map(|delay| match ranges.iter().find(|r| r.in_range(delay)) {
            Some(range) => {
                clamped += 1;
                range.from
            }
            None => delay,
        })
        .collect();

    for (i, delta) in deltas.into_iter().enumerate() {
        recording.events[i + 1].time = recording.events[i].time + delta;
    }

    tracing::debug!(
        ranges = ranges.len(),
        clamped,
        duration = recording.duration(),
        "quantized delays"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use castedit_cast_model::{Event, Header};

    fn recording(times: &[f64]) -> Recording {
        Recording::new(
            Header::new(80, 24),
            times.iter().map(|&t| Event::output(t, "x")).collect(),
        )
    }

    fn times(rec: &Recording) -> Vec<f64> {
        rec.events.iter().map(|e| e.time).collect()
    }

    fn range(from: f64, to: f64) -> QuantizeRange {
        QuantizeRange::new(from, Some(to)).unwrap()
    }

    #[test]
    fn test_parameter_validation() {
        let mut empty = recording(&[]);
        assert_eq!(
            quantize(&mut empty, &[range(1.0, 2.0)]),
            Err(EditError::EmptyEventStream)
        );

        let mut single = recording(&[0.0]);
        assert!(matches!(
            quantize(&mut single, &[]),
            Err(EditError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_in_range_is_half_open() {
        let r = range(1.0, 2.0);
        assert!(r.in_range(1.5));
        assert!(r.in_range(1.0));
        assert!(!r.in_range(2.0));
        assert!(!r.in_range(2.1));
        assert!(!r.in_range(0.9));
    }

    #[test]
    fn test_overlaps() {
        let r = range(1.0, 2.0);
        assert!(!r.overlaps(&range(30.0, 40.0)));
        assert!(r.overlaps(&range(1.5, 3.0)));
        assert!(r.overlaps(&range(0.9, 1.5)));
        assert!(range(2.0, 3.0).overlaps(&range(1.0, 2.0)));
    }

    #[test]
    fn test_intersects_ignores_touching_ranges() {
        assert!(!range(2.0, 3.0).intersects(&range(1.0, 2.0)));
        assert!(!range(1.0, 2.0).intersects(&range(2.0, 3.0)));
        assert!(range(1.0, 5.0).intersects(&range(2.0, 3.0)));
        assert!(range(2.0, 3.0).intersects(&range(1.0, 5.0)));
    }

    #[test]
    fn test_single_range() {
        let mut rec = recording(&[1.0, 2.0, 5.0, 9.0, 10.0, 11.0]);
        quantize(&mut rec, &[range(2.0, 6.0)]).unwrap();
        assert_eq!(times(&rec), vec![1.0, 2.0, 4.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_unbounded_range_caps_every_long_pause() {
        let mut rec = recording(&[0.0, 0.5, 10.0, 100.0]);
        quantize(&mut rec, &[QuantizeRange::unbounded(1.0).unwrap()]).unwrap();
        assert_eq!(times(&rec), vec![0.0, 0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_first_matching_range_wins() {
        let mut rec = recording(&[0.0, 3.0]);
        quantize(&mut rec, &[range(1.0, 5.0), range(2.0, 4.0)]).unwrap();
        assert_eq!(times(&rec), vec![0.0, 1.0]);

        let mut rec = recording(&[0.0, 3.0]);
        quantize(&mut rec, &[range(2.0, 4.0), range(1.0, 5.0)]).unwrap();
        assert_eq!(times(&rec), vec![0.0, 2.0]);
    }

    #[test]
    fn test_quantize_is_idempotent() {
        let ranges = [range(2.0, 6.0), QuantizeRange::unbounded(6.0).unwrap()];
        let mut rec = recording(&[1.0, 2.0, 5.0, 9.0, 10.0, 30.0]);
        quantize(&mut rec, &ranges).unwrap();
        let once = times(&rec);
        quantize(&mut rec, &ranges).unwrap();
        assert_eq!(times(&rec), once);
    }

    #[test]
    fn test_parse_unbounded() {
        let r: QuantizeRange = "1.2".parse().unwrap();
        assert_eq!(r.from(), 1.2);
        assert_eq!(r.to(), f64::MAX);
        assert!(r.is_unbounded());
        assert_eq!(r.to_string(), "[1.2, inf)");
    }

    #[test]
    fn test_parse_bounded() {
        let r: QuantizeRange = " 0.3, 1 ".parse().unwrap();
        assert_eq!(r, range(0.3, 1.0));
        assert_eq!(r.to_string(), "[0.3, 1)");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "1a", "a", "1,a", ",1", "1,", "1,2,3", "-1.2", "2,1", "2,2", "inf", "1,inf", "NaN"] {
            assert!(
                input.parse::<QuantizeRange>().is_err(),
                "`{input}` should be rejected"
            );
        }
    }
}
