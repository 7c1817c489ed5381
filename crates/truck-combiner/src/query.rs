//! "What is open now?" lookups over consolidated records.

use chrono::Timelike;

use crate::clock::TimeOfDay;
use crate::daypart::DayPart;
use crate::error::Result;
use crate::parser::parse_range;
use crate::record::CombinedRecord;

impl CombinedRecord {
    /// True iff one of `day`'s ranges contains the wall-clock time `point`.
    pub fn is_open_at<T: Timelike>(&self, day: &str, point: &T) -> Result<bool> {
        let point = TimeOfDay::from_timelike(point);
        for range in self.days.get(day).unwrap_or_default() {
            if parse_range(range)?.contains(point) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True iff one of `day`'s ranges falls in `part`.
    pub fn is_open_during(&self, day: &str, part: DayPart) -> Result<bool> {
        for range in self.days.get(day).unwrap_or_default() {
            if part.overlaps(&parse_range(range)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The records open on `day` at `point`, in their original order.
pub fn open_at<'a, T: Timelike>(
    records: &'a [CombinedRecord],
    day: &str,
    point: &T,
) -> Result<Vec<&'a CombinedRecord>> {
    let mut open = Vec::new();
    for record in records {
        if record.is_open_at(day, point)? {
            open.push(record);
        }
    }
    Ok(open)
}

/// The records open on `day` during `part`, in their original order.
pub fn open_during<'a>(
    records: &'a [CombinedRecord],
    day: &str,
    part: DayPart,
) -> Result<Vec<&'a CombinedRecord>> {
    let mut open = Vec::new();
    for record in records {
        if record.is_open_during(day, part)? {
            open.push(record);
        }
    }
    Ok(open)
}
