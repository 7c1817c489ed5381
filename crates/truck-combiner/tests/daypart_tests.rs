//! Tests for morning/afternoon/evening classification.
//!
//! The boundary rows are deliberately asymmetric: a range ending at 5:30 a.m.
//! is a morning range, a range starting at noon is not.

use truck_combiner::{
    day_parts, is_open_in_afternoon, is_open_in_evening, is_open_in_morning, DayPart,
};

#[test]
fn is_open_in_morning_table() {
    let cases = [
        ("3 a.m. - 4 a.m.", false),
        ("3 a.m. - 5 a.m.", false),
        ("3 a.m. - 5:30 a.m.", true),
        ("7 a.m. - 11 a.m.", true),
        ("10 a.m. - 12 p.m.", true),
        ("12 p.m. - 1 p.m.", false),
        ("12:01 p.m. - 1 p.m.", false),
    ];
    for (range, expected) in cases {
        assert_eq!(is_open_in_morning(range).unwrap(), expected, "{}", range);
    }
}

#[test]
fn is_open_in_afternoon_table() {
    let cases = [
        ("3 a.m. - 4 a.m.", false),
        ("3 a.m. - 5 a.m.", false),
        ("3 a.m. - 5:30 a.m.", false),
        ("7 a.m. - 11 a.m.", false),
        ("10 a.m. - 12 p.m.", false),
        ("12 p.m. - 1 p.m.", true),
        ("12:01 p.m. - 1 p.m.", true),
        ("12 p.m. - 5 p.m.", true),
        ("4 p.m. - 5 p.m.", true),
        ("5 p.m. - 6 p.m.", false),
    ];
    for (range, expected) in cases {
        assert_eq!(is_open_in_afternoon(range).unwrap(), expected, "{}", range);
    }
}

#[test]
fn is_open_in_evening_table() {
    let cases = [
        ("3 a.m. - 4 a.m.", false),
        ("3 a.m. - 5 a.m.", false),
        ("3 a.m. - 5:30 a.m.", false),
        ("7 a.m. - 11 a.m.", false),
        ("10 a.m. - 12 p.m.", false),
        ("12 p.m. - 1 p.m.", false),
        ("12:01 p.m. - 1 p.m.", false),
        ("12 p.m. - 5 p.m.", false),
        ("4 p.m. - 5 p.m.", false),
        ("5 p.m. - 6 p.m.", true),
        ("5 p.m. - 9 p.m.", true),
    ];
    for (range, expected) in cases {
        assert_eq!(is_open_in_evening(range).unwrap(), expected, "{}", range);
    }
}

#[test]
fn evening_window_has_no_upper_bound() {
    assert!(is_open_in_evening("9 p.m. - 11:59 p.m.").unwrap());
    assert!(is_open_in_evening("5:01 p.m. - 11:59 p.m.").unwrap());
}

#[test]
fn overnight_ranges_are_classified_on_raw_endpoints() {
    // Ends at 2 a.m., which is before the evening window opens.
    assert!(!is_open_in_evening("10 p.m. - 2 a.m.").unwrap());
    // Starts at 11 p.m., which is after noon.
    assert!(!is_open_in_morning("11 p.m. - 6 a.m.").unwrap());
    assert!(day_parts("10 p.m. - 2 a.m.").unwrap().is_empty());
    // Starts before noon and ends after 5:30 a.m.
    assert!(is_open_in_morning("11 a.m. - 6 a.m.").unwrap());
}

#[test]
fn all_day_range_falls_in_every_window() {
    assert_eq!(
        day_parts("6 a.m. - 9 p.m.").unwrap(),
        vec![DayPart::Morning, DayPart::Afternoon, DayPart::Evening]
    );
}

#[test]
fn lunch_range_spans_morning_and_afternoon() {
    assert_eq!(
        day_parts("11 a.m. - 3 p.m.").unwrap(),
        vec![DayPart::Morning, DayPart::Afternoon]
    );
}

#[test]
fn pre_dawn_range_falls_in_no_window() {
    assert!(day_parts("3 a.m. - 4 a.m.").unwrap().is_empty());
}

#[test]
fn day_part_names_roundtrip() {
    for part in DayPart::all() {
        assert_eq!(part.to_string().parse::<DayPart>().unwrap(), part);
    }
    assert_eq!("Evening".parse::<DayPart>().unwrap(), DayPart::Evening);
    assert!("night".parse::<DayPart>().is_err());
}

#[test]
fn malformed_range_is_an_error() {
    assert!(is_open_in_morning("sometime").is_err());
    assert!(day_parts("13 p.m. - 2 p.m.").is_err());
}
