//! The in-memory recording: header plus ordered event stream.

use crate::event::{Event, EventKind, TimeSecs};
use crate::header::Header;

/// A complete terminal session capture.
///
/// Editing operations take `&mut Recording`; a recording is never shared
/// between concurrent edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    /// Recording metadata.
    pub header: Header,

    /// Events in non-decreasing time order.
    pub events: Vec<Event>,
}

/// Summary numbers about an event stream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamStats {
    pub output_events: usize,
    pub input_events: usize,
    pub output_bytes: usize,
    pub input_bytes: usize,
    /// Largest gap between consecutive events, with the index of the later event.
    pub longest_delay: Option<(usize, TimeSecs)>,
}

impl Recording {
    pub fn new(header: Header, events: Vec<Event>) -> Self {
        Self { header, events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time of the first event.
    pub fn first_time(&self) -> Option<TimeSecs> {
        self.events.first().map(|e| e.time)
    }

    /// Time of the last event.
    pub fn last_time(&self) -> Option<TimeSecs> {
        self.events.last().map(|e| e.time)
    }

    /// Playback length: the time of the last event.
    pub fn duration(&self) -> TimeSecs {
        self.last_time().unwrap_or(0.0)
    }

    /// Index of the first event recorded exactly at `time`.
    ///
    /// This is an exact float comparison, not a nearest-time search.
    pub fn first_index_at(&self, time: TimeSecs) -> Option<usize> {
        self.events.iter().position(|e| e.time == time)
    }

    /// Index of the last event recorded exactly at `time`.
    pub fn last_index_at(&self, time: TimeSecs) -> Option<usize> {
        self.events.iter().rposition(|e| e.time == time)
    }

    /// Number of events whose time lies in the closed interval `[from, to]`.
    pub fn count_between(&self, from: TimeSecs, to: TimeSecs) -> usize {
        self.events
            .iter()
            .filter(|e| e.time >= from && e.time <= to)
            .count()
    }

    /// Delays between consecutive events.
    pub fn delays(&self) -> impl Iterator<Item = TimeSecs> + '_ {
        self.events.windows(2).map(|w| w[1].time - w[0].time)
    }

    pub fn stats(&self) -> StreamStats {
        let mut stats = StreamStats::default();
        for event in &self.events {
            match event.kind {
                EventKind::Output => {
                    stats.output_events += 1;
                    stats.output_bytes += event.data.len();
                }
                EventKind::Input => {
                    stats.input_events += 1;
                    stats.input_bytes += event.data.len();
                }
            }
        }
        for (i, delay) in self.delays().enumerate() {
            if stats.longest_delay.map_or(true, |(_, d)| delay > d) {
                stats.longest_delay = Some((i + 1, delay));
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recording {
        Recording::new(
            Header::new(80, 24),
            vec![
                Event::output(1.0, "a"),
                Event::input(1.2, "b"),
                Event::output(1.2, "c"),
                Event::output(4.0, "dd"),
            ],
        )
    }

    #[test]
    fn test_exact_lookups() {
        let rec = sample();
        assert_eq!(rec.first_index_at(1.2), Some(1));
        assert_eq!(rec.last_index_at(1.2), Some(2));
        assert_eq!(rec.first_index_at(1.19), None);
        assert_eq!(rec.last_index_at(4.0), Some(3));
    }

    #[test]
    fn test_time_queries() {
        let rec = sample();
        assert_eq!(rec.first_time(), Some(1.0));
        assert_eq!(rec.last_time(), Some(4.0));
        assert_eq!(rec.duration(), 4.0);
        assert_eq!(rec.count_between(1.2, 4.0), 3);

        let empty = Recording::new(Header::new(80, 24), vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.duration(), 0.0);
        assert_eq!(empty.first_time(), None);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.output_events, 3);
        assert_eq!(stats.input_events, 1);
        assert_eq!(stats.output_bytes, 4);
        assert_eq!(stats.input_bytes, 1);
        let (idx, delay) = stats.longest_delay.unwrap();
        assert_eq!(idx, 3);
        assert!((delay - 2.8).abs() < 1e-9);
    }
}
