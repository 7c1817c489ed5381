//! Property-based tests for the merge engine using proptest.
//!
//! Ranges are generated on the quarter hour so labels are a pure function of
//! the time: equal times always render identically. Any start and end pair is
//! allowed, so overnight and around-the-clock ranges are covered too.

use proptest::prelude::*;
use truck_combiner::{combine, parse_range, ParsedRange, TimeOfDay};

fn label(minutes: u32) -> String {
    let hour24 = minutes / 60;
    let minute = minutes % 60;
    let meridiem = if hour24 < 12 { "a.m." } else { "p.m." };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    if minute == 0 {
        format!("{} {}", hour12, meridiem)
    } else {
        format!("{}:{:02} {}", hour12, minute, meridiem)
    }
}

/// A range with both ends on the quarter hour, in either order.
fn arb_range() -> impl Strategy<Value = String> {
    (0u32..96, 0u32..96)
        .prop_map(|(start, end)| format!("{} - {}", label(start * 15), label(end * 15)))
}

fn parsed(range: &str) -> ParsedRange {
    parse_range(range).unwrap()
}

fn quarter_hours() -> impl Iterator<Item = TimeOfDay> {
    (0u32..96).map(|q| TimeOfDay::new(q / 4, (q % 4) * 15).unwrap())
}

proptest! {
    #[test]
    fn singleton_roundtrip(range in arb_range()) {
        let empty: [&str; 0] = [];
        prop_assert_eq!(combine(&empty, &range).unwrap(), vec![range]);
    }

    #[test]
    fn merging_with_self_is_idempotent(range in arb_range()) {
        let empty: [&str; 0] = [];
        let once = combine(&empty, &range).unwrap();
        let twice = combine(&once, &range).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn overlapping_pair_merges_the_same_either_way(a in arb_range(), b in arb_range()) {
        prop_assume!(parsed(&a).touches(&parsed(&b)));

        let ab = combine(&[a.as_str()], &b).unwrap();
        let ba = combine(&[b.as_str()], &a).unwrap();
        prop_assert_eq!(ab.len(), 1);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn no_two_entries_touch_after_any_sequence(ranges in prop::collection::vec(arb_range(), 1..12)) {
        let mut day: Vec<String> = Vec::new();
        for range in &ranges {
            day = combine(&day, range).unwrap();
        }

        let entries: Vec<ParsedRange> = day.iter().map(|r| parsed(r)).collect();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                prop_assert!(
                    !entries[i].touches(&entries[j]),
                    "entries {:?} and {:?} touch in {:?}", day[i], day[j], day
                );
            }
        }
    }

    #[test]
    fn every_input_range_is_covered(ranges in prop::collection::vec(arb_range(), 1..12)) {
        let mut day: Vec<String> = Vec::new();
        for range in &ranges {
            day = combine(&day, range).unwrap();
        }

        let entries: Vec<ParsedRange> = day.iter().map(|r| parsed(r)).collect();
        for range in &ranges {
            let input = parsed(range);
            for point in quarter_hours().filter(|&p| input.contains(p)) {
                prop_assert!(
                    entries.iter().any(|entry| entry.contains(point)),
                    "{:?} from {} not covered by {:?}", point, range, day
                );
            }
        }
    }
}
