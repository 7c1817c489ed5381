//! Availability string → [`ParsedRange`].
//!
//! The feed writes hours as `"<start> - <end>"` where each side is
//! `H[:MM] a.m.` or `H[:MM] p.m.`, e.g. `"11 a.m. - 3 p.m."` or
//! `"10:30 a.m. - 2 p.m."`. The meridiem marker is case-insensitive.
//!
//! Each endpoint keeps the exact token it was parsed from so a merged range
//! can be re-rendered with the feed's own formatting instead of a numeric
//! reconstruction.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use crate::clock::{self, TimeOfDay};
use crate::error::{ParseError, Result};

/// Separator between the two sides of a range.
const RANGE_SEPARATOR: &str = " - ";

/// A parsed availability range with its original endpoint labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// The start token as written, e.g. `"11 a.m."`.
    pub start_label: String,
    /// The end token as written, e.g. `"3:30 p.m."`.
    pub end_label: String,
}

impl ParsedRange {
    /// True when the range crosses midnight (`"10 p.m. - 2 a.m."`) or runs
    /// around the clock.
    pub fn wraps(&self) -> bool {
        clock::wraps_midnight(self.start, self.end)
    }

    /// The `(start, end)` minutes on the extended timeline.
    pub fn span(&self) -> (u32, u32) {
        clock::span_minutes(self.start, self.end)
    }

    /// Inclusive, wrap-aware containment of a wall-clock time.
    pub fn contains(&self, point: TimeOfDay) -> bool {
        clock::contains(self.start, self.end, point)
    }

    /// True when the range is open around the clock (`"6 a.m. - 6 a.m."`).
    pub fn is_full_day(&self) -> bool {
        self.start == self.end
    }

    /// True when the two ranges overlap or share an endpoint on the wall
    /// clock, including across midnight.
    pub fn touches(&self, other: &ParsedRange) -> bool {
        clock::touch_offset(self.span(), other.span()).is_some()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start.into()
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end.into()
    }
}

impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start_label, RANGE_SEPARATOR, self.end_label)
    }
}

impl FromStr for ParsedRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_range(s)
    }
}

/// Parse an availability string such as `"11 a.m. - 3 p.m."`.
///
/// Fails with [`ParseError`] when the string is not two dash-separated time
/// tokens, or when an hour or minute is out of range.
pub fn parse_range(input: &str) -> Result<ParsedRange> {
    let trimmed = input.trim();
    let (start_raw, end_raw) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
        ParseError::MalformedRange {
            input: input.to_string(),
        }
    })?;

    let start_label = start_raw.trim();
    let end_label = end_raw.trim();
    if end_label.contains(RANGE_SEPARATOR) {
        return Err(ParseError::MalformedRange {
            input: input.to_string(),
        });
    }

    Ok(ParsedRange {
        start: parse_time(start_label)?,
        end: parse_time(end_label)?,
        start_label: start_label.to_string(),
        end_label: end_label.to_string(),
    })
}

/// Parse a single `H[:MM] a.m.|p.m.` token into a 24-hour [`TimeOfDay`].
///
/// `12 a.m.` is midnight and `12 p.m.` is noon; every other p.m. hour gains 12.
pub fn parse_time(token: &str) -> Result<TimeOfDay> {
    let malformed = || ParseError::MalformedTime {
        token: token.to_string(),
    };

    let (clock_part, meridiem) = token.trim().rsplit_once(' ').ok_or_else(malformed)?;
    let is_pm = match meridiem.to_ascii_lowercase().as_str() {
        "a.m." => false,
        "p.m." => true,
        _ => return Err(malformed()),
    };

    let (hour_str, minute_str) = match clock_part.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (clock_part, None),
    };

    let hour = parse_digits(hour_str).ok_or_else(malformed)?;
    let minute = match minute_str {
        Some(m) if m.len() == 2 => parse_digits(m).ok_or_else(malformed)?,
        Some(_) => return Err(malformed()),
        None => 0,
    };

    if !(1..=12).contains(&hour) {
        return Err(ParseError::HourOutOfRange {
            token: token.to_string(),
            hour,
        });
    }
    if minute > 59 {
        return Err(ParseError::MinuteOutOfRange {
            token: token.to_string(),
            minute,
        });
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    // Both components were range-checked above.
    TimeOfDay::new(hour, minute).ok_or_else(malformed)
}

/// Start of an availability string as a wall-clock time.
pub fn start_time(availability: &str) -> Result<NaiveTime> {
    Ok(parse_range(availability)?.start_time())
}

/// End of an availability string as a wall-clock time. For an overnight
/// range this is the early-morning time, e.g. 02:00 for `"10 p.m. - 2 a.m."`.
pub fn end_time(availability: &str) -> Result<NaiveTime> {
    Ok(parse_range(availability)?.end_time())
}

/// Whether the wall-clock part of `point` falls inside `availability`.
///
/// Both ends are inclusive. Overnight ranges contain everything from their
/// start through midnight to their end.
pub fn date_within_availability<T: Timelike>(availability: &str, point: &T) -> Result<bool> {
    let range = parse_range(availability)?;
    Ok(range.contains(TimeOfDay::from_timelike(point)))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
