//! Morning / afternoon / evening classification.
//!
//! | Window    | From       | To         | Test                          |
//! |-----------|------------|------------|-------------------------------|
//! | morning   | 5:30 a.m.  | 12:00 p.m. | `end >= from && start < to`   |
//! | afternoon | 12:00 p.m. | 5:00 p.m.  | `end > from && start < to`    |
//! | evening   | 5:00 p.m.  | none       | `end > from`                  |
//!
//! The morning lower bound is inclusive while the others are strict: a range
//! ending at 5:30 a.m. is a morning range, and a range starting at noon is an
//! afternoon range but not a morning one. The evening window has no upper
//! bound.
//!
//! Every test reads the endpoints as written, in minutes since midnight, with
//! no overnight adjustment. `"10 p.m. - 2 a.m."` ends at 2 a.m., so it is not
//! an evening range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::{parse_range, ParsedRange};

const MORNING_START: u32 = 5 * 60 + 30;
const NOON: u32 = 12 * 60;
const EVENING_START: u32 = 17 * 60;

/// A fixed daily time band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// All windows in day order.
    pub fn all() -> [DayPart; 3] {
        [DayPart::Morning, DayPart::Afternoon, DayPart::Evening]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        }
    }

    /// Whether `range` falls in this window.
    pub fn overlaps(self, range: &ParsedRange) -> bool {
        let (start, end) = (range.start.minutes(), range.end.minutes());
        match self {
            DayPart::Morning => end >= MORNING_START && start < NOON,
            DayPart::Afternoon => end > NOON && start < EVENING_START,
            DayPart::Evening => end > EVENING_START,
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayPart {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(DayPart::Morning),
            "afternoon" => Ok(DayPart::Afternoon),
            "evening" => Ok(DayPart::Evening),
            other => Err(format!(
                "Unknown day part: '{}'. Expected morning, afternoon or evening",
                other
            )),
        }
    }
}

/// Every window the availability string falls in, in day order.
pub fn day_parts(availability: &str) -> Result<Vec<DayPart>> {
    let range = parse_range(availability)?;
    Ok(DayPart::all()
        .into_iter()
        .filter(|part| part.overlaps(&range))
        .collect())
}

pub fn is_open_in_morning(availability: &str) -> Result<bool> {
    Ok(DayPart::Morning.overlaps(&parse_range(availability)?))
}

pub fn is_open_in_afternoon(availability: &str) -> Result<bool> {
    Ok(DayPart::Afternoon.overlaps(&parse_range(availability)?))
}

pub fn is_open_in_evening(availability: &str) -> Result<bool> {
    Ok(DayPart::Evening.overlaps(&parse_range(availability)?))
}
