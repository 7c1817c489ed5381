//! Wall-clock times and the minutes-since-midnight timeline.
//!
//! Every comparison in the combiner happens on minutes since midnight
//! (0..1440). A range whose end reads earlier than its start spans midnight;
//! such ranges are laid out on an extended timeline where the end is pushed
//! one day forward, so `start <= end` always holds for the numeric span.
//! A range whose end equals its start is open around the clock and spans a
//! full day.
//!
//! Two spans on the extended timeline may describe overlapping wall-clock
//! time even when their numbers do not meet: the after-midnight tail of
//! `"10 p.m. - 2 a.m."` sits at 1440..1560 while `"1 a.m. - 3 a.m."` sits at
//! 60..180. [`touch_offset`] lines the second span up with the first by
//! trying it one day later and one day earlier as well.

use chrono::{NaiveTime, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A local wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Build a time, returning `None` when hour or minute is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// 0..=23
    pub fn hour(self) -> u32 {
        self.hour
    }

    /// 0..=59
    pub fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes since midnight, in `0..1440`.
    pub fn minutes(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Read hour and minute off any chrono time-like value. Seconds are dropped.
    pub fn from_timelike<T: Timelike>(point: &T) -> Self {
        Self {
            hour: point.hour(),
            minute: point.minute(),
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        // hour < 24 and minute < 60 hold for every constructed value.
        NaiveTime::from_hms_opt(t.hour, t.minute, 0).unwrap_or_default()
    }
}

/// True when a range from `start` to `end` crosses midnight. Equal endpoints
/// count: the range runs all the way round.
pub fn wraps_midnight(start: TimeOfDay, end: TimeOfDay) -> bool {
    end.minutes() <= start.minutes()
}

/// The numeric span `(start, end)` on the extended timeline.
///
/// Non-wrapping ranges map straight to their minutes. Wrapping ranges get
/// [`MINUTES_PER_DAY`] added to the end.
pub fn span_minutes(start: TimeOfDay, end: TimeOfDay) -> (u32, u32) {
    let s = start.minutes();
    let e = end.minutes();
    if wraps_midnight(start, end) {
        (s, e + MINUTES_PER_DAY)
    } else {
        (s, e)
    }
}

/// Inclusive containment of `point` in the range `start..=end`.
///
/// A wrapping range contains everything from its start to midnight and
/// everything from midnight to its end.
pub fn contains(start: TimeOfDay, end: TimeOfDay, point: TimeOfDay) -> bool {
    let (s, e, p) = (start.minutes(), end.minutes(), point.minutes());
    if wraps_midnight(start, end) {
        p >= s || p <= e
    } else {
        s <= p && p <= e
    }
}

/// The shift (0, one day later, or one day earlier, tried in that order)
/// that makes span `b` overlap or touch span `a`, or `None` when the two
/// never meet on the wall clock.
pub fn touch_offset(a: (u32, u32), b: (u32, u32)) -> Option<i64> {
    let day = i64::from(MINUTES_PER_DAY);
    let (a0, a1) = (i64::from(a.0), i64::from(a.1));
    [0, day, -day].into_iter().find(|&shift| {
        let (b0, b1) = (i64::from(b.0) + shift, i64::from(b.1) + shift);
        a0 <= b1 && b0 <= a1
    })
}
