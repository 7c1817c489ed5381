//! Tests for the minutes-since-midnight timeline.

use chrono::NaiveTime;
use truck_combiner::clock::{contains, span_minutes, touch_offset, wraps_midnight, TimeOfDay};

fn t(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

#[test]
fn rejects_out_of_range_components() {
    assert!(TimeOfDay::new(24, 0).is_none());
    assert!(TimeOfDay::new(23, 60).is_none());
    assert_eq!(t(23, 59).minutes(), 1439);
    assert_eq!(t(0, 0).minutes(), 0);
}

#[test]
fn components_are_read_through_accessors() {
    let time = t(15, 45);
    assert_eq!(time.hour(), 15);
    assert_eq!(time.minute(), 45);
    assert_eq!(time.minutes(), 945);
}

#[test]
fn wrapping_span_extends_past_midnight() {
    assert!(wraps_midnight(t(22, 0), t(2, 0)));
    assert_eq!(span_minutes(t(22, 0), t(2, 0)), (1320, 1560));
    assert_eq!(span_minutes(t(11, 0), t(15, 0)), (660, 900));
}

#[test]
fn equal_endpoints_cover_the_whole_day() {
    assert!(wraps_midnight(t(9, 0), t(9, 0)));
    assert_eq!(span_minutes(t(9, 0), t(9, 0)), (540, 1980));
    assert!(contains(t(9, 0), t(9, 0), t(9, 0)));
    assert!(contains(t(9, 0), t(9, 0), t(9, 1)));
    assert!(contains(t(9, 0), t(9, 0), t(3, 0)));
}

#[test]
fn wrapping_containment_covers_both_sides_of_midnight() {
    assert!(contains(t(22, 0), t(2, 0), t(23, 30)));
    assert!(contains(t(22, 0), t(2, 0), t(0, 0)));
    assert!(contains(t(22, 0), t(2, 0), t(22, 0)));
    assert!(!contains(t(22, 0), t(2, 0), t(12, 0)));
}

#[test]
fn touching_spans_count_as_overlap() {
    assert_eq!(touch_offset((660, 900), (900, 1140)), Some(0));
    assert_eq!(touch_offset((900, 1140), (660, 900)), Some(0));
    assert_eq!(touch_offset((420, 600), (660, 900)), None);
}

#[test]
fn overnight_tail_meets_early_morning_span() {
    // 10 p.m. - 2 a.m. against 1 a.m. - 3 a.m.
    assert_eq!(touch_offset((1320, 1560), (60, 180)), Some(1440));
    assert_eq!(touch_offset((60, 180), (1320, 1560)), Some(-1440));
    // 10 p.m. - 2 a.m. against 3 a.m. - 5 a.m.
    assert_eq!(touch_offset((1320, 1560), (180, 300)), None);
}

#[test]
fn converts_to_and_from_naive_time() {
    let nt: NaiveTime = t(15, 30).into();
    assert_eq!(nt, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
    assert_eq!(TimeOfDay::from_timelike(&nt), t(15, 30));
}
