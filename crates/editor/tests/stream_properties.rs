use castedit_cast_model::{Event, Header, Recording};
use castedit_editor::{cut, quantize, speed, QuantizeRange};
use proptest::prelude::*;

/// Non-decreasing microsecond timestamps with occasional duplicates.
fn ordered_times() -> impl Strategy<Value = Vec<f64>> {
    let step = prop_oneof![Just(0u32), 0u32..1_000, 0u32..3_000_000];
    prop::collection::vec(step, 1..40).prop_map(|steps| {
        let mut t = 0u32;
        steps
            .into_iter()
            .map(|step| {
                t += step;
                f64::from(t) / 1_000_000.0
            })
            .collect()
    })
}

fn recording(times: &[f64]) -> Recording {
    Recording::new(
        Header::new(80, 24),
        times.iter().map(|&t| Event::output(t, "x")).collect(),
    )
}

fn is_ordered(rec: &Recording) -> bool {
    rec.events.windows(2).all(|w| w[0].time <= w[1].time)
}

proptest! {
    #[test]
    fn cut_removes_exactly_the_interval(times in ordered_times(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let (lo, hi) = {
            let (x, y) = (a.index(times.len()), b.index(times.len()));
            (x.min(y), x.max(y))
        };
        let (from, to) = (times[lo], times[hi]);
        let mut rec = recording(&times);
        let expected = rec.len() - rec.count_between(from, to);
        let head = rec.first_index_at(from).unwrap();

        cut(&mut rec, from, to).unwrap();

        prop_assert_eq!(rec.len(), expected);
        prop_assert!(is_ordered(&rec));
        prop_assert!(castedit_cast_model::validate(&rec).is_ok());
        for i in 0..head {
            prop_assert_eq!(rec.events[i].time, times[i]);
        }
    }

    #[test]
    fn quantize_is_idempotent_on_whole_seconds(steps in prop::collection::vec(0u32..20, 1..40), floor in 1u32..5, width in 1u32..10) {
        let mut t = 0u32;
        let times: Vec<f64> = steps.into_iter().map(|s| { t += s; f64::from(t) }).collect();
        let ranges = [
            QuantizeRange::new(f64::from(floor), Some(f64::from(floor + width))).unwrap(),
            QuantizeRange::unbounded(f64::from(floor + width)).unwrap(),
        ];
        let mut rec = recording(&times);

        quantize(&mut rec, &ranges).unwrap();
        let once = rec.clone();
        quantize(&mut rec, &ranges).unwrap();

        prop_assert_eq!(&rec, &once);
        prop_assert!(is_ordered(&rec));
        prop_assert_eq!(rec.events[0].time, times[0]);
    }

    #[test]
    fn speed_keeps_order_and_head(times in ordered_times(), factor in 0.1f64..=10.0, a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let (from, to) = {
            let (x, y) = (times[a.index(times.len())], times[b.index(times.len())]);
            (x.min(y), x.max(y))
        };
        prop_assume!(from < to);
        let mut rec = recording(&times);
        let head = rec.last_index_at(from).unwrap();

        speed(&mut rec, factor, from, to).unwrap();

        prop_assert_eq!(rec.len(), times.len());
        prop_assert!(is_ordered(&rec));
        for i in 0..=head {
            prop_assert_eq!(rec.events[i].time, times[i]);
        }
    }
}
