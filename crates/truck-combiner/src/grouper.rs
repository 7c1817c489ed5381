//! Fold a flat list of raw slots into one record per truck location.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::merge;
use crate::record::{CombinedRecord, RawRecord, TruckKey};

/// Group raw records by `(title, location, lat, lng)` and merge each day's
/// ranges.
///
/// Records come out in the order their identity was first seen. The first
/// record seen for an identity supplies `notes` and `website`. Days are
/// merged independently: a Thursday range never absorbs a Friday one.
///
/// A malformed availability string aborts the whole pass.
pub fn combine_trucks(records: &[RawRecord]) -> Result<Vec<CombinedRecord>> {
    let mut index: HashMap<TruckKey, usize> = HashMap::new();
    let mut combined: Vec<CombinedRecord> = Vec::new();

    for raw in records {
        let slot = *index.entry(raw.key()).or_insert_with(|| {
            debug!(title = %raw.title, location = %raw.location, "new truck location");
            combined.push(CombinedRecord::from_first(raw));
            combined.len() - 1
        });

        let truck = &mut combined[slot];
        if !truck.days.contains_day(&raw.day) {
            debug!(title = %raw.title, day = %raw.day, "new day bucket");
        }
        let bucket = truck.days.bucket_mut(&raw.day);
        *bucket = merge::combine(bucket.as_slice(), &raw.availability)?;
    }

    debug!(
        raw = records.len(),
        combined = combined.len(),
        "combined truck records"
    );
    Ok(combined)
}
