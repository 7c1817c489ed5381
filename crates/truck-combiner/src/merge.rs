//! Fold a new availability range into one day's list of ranges.
//!
//! A day's list never holds two ranges that overlap or touch. Adding a range
//! either widens the entry it touches or is appended as a new entry. Merged
//! endpoints reuse the label of whichever range supplied them, so
//! `"7 a.m. - 11 a.m."` folded into `["11 a.m. - 3 p.m."]` renders as
//! `"7 a.m. - 3 p.m."` with both tokens exactly as the feed wrote them.
//!
//! Overnight ranges meet early-morning ranges across midnight. A merge whose
//! coverage reaches 24 hours becomes an around-the-clock range such as
//! `"2 a.m. - 2 a.m."`.

use tracing::trace;

use crate::clock::{self, MINUTES_PER_DAY};
use crate::error::Result;
use crate::parser::{parse_range, ParsedRange};

/// True iff `candidate` overlaps or touches at least one range in `existing`.
pub fn can_combine<S: AsRef<str>>(existing: &[S], candidate: &str) -> Result<bool> {
    let candidate = parse_range(candidate)?;
    for entry in existing {
        if parse_range(entry.as_ref())?.touches(&candidate) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Fold `candidate` into `existing`, returning the new list.
///
/// The entry touched by the candidate is replaced in place by the merged
/// range. If the candidate bridges several entries they collapse into one at
/// the position of the first. Untouched entries keep their position and
/// their original text. With nothing to merge the candidate is appended.
pub fn combine<S: AsRef<str>>(existing: &[S], candidate: &str) -> Result<Vec<String>> {
    let candidate = parse_range(candidate)?;
    let parsed: Vec<ParsedRange> = existing
        .iter()
        .map(|entry| parse_range(entry.as_ref()))
        .collect::<Result<_>>()?;

    let mut merged = candidate.clone();
    let mut absorbed = vec![false; parsed.len()];

    // Widening can bring further entries into reach; repeat until stable.
    let mut changed = true;
    while changed {
        changed = false;
        for (i, range) in parsed.iter().enumerate() {
            if !absorbed[i] && range.touches(&merged) {
                trace!(existing = %range, candidate = %merged, "merging touching ranges");
                merged = widen(range, &merged);
                absorbed[i] = true;
                changed = true;
            }
        }
    }

    let Some(first) = absorbed.iter().position(|&a| a) else {
        trace!(candidate = %candidate, "no touching range; appending");
        let mut out: Vec<String> = existing.iter().map(|e| e.as_ref().to_string()).collect();
        out.push(candidate.to_string());
        return Ok(out);
    };

    Ok(existing
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            if i == first {
                Some(merged.to_string())
            } else if absorbed[i] {
                None
            } else {
                Some(entry.as_ref().to_string())
            }
        })
        .collect())
}

/// The smallest range covering both `base` and `other`.
///
/// `other` is first lined up with `base` across midnight, so the tail of
/// `"10 p.m. - 2 a.m."` meets `"1 a.m. - 3 a.m."`. Each endpoint comes from
/// `base` unless `other` strictly wins the comparison, so ties keep the label
/// already in the list. A union reaching a full day collapses to the
/// around-the-clock range starting at the merged start.
fn widen(base: &ParsedRange, other: &ParsedRange) -> ParsedRange {
    if base.is_full_day() {
        return base.clone();
    }
    if other.is_full_day() {
        return other.clone();
    }

    let (base_start, base_end) = base.span();
    let (other_start, other_end) = other.span();
    let shift = clock::touch_offset(base.span(), other.span()).unwrap_or(0);
    let (base_start, base_end) = (i64::from(base_start), i64::from(base_end));
    let (other_start, other_end) = (i64::from(other_start) + shift, i64::from(other_end) + shift);

    let (start, start_label, merged_start) = if other_start < base_start {
        (other.start, &other.start_label, other_start)
    } else {
        (base.start, &base.start_label, base_start)
    };
    let (end, end_label, merged_end) = if other_end > base_end {
        (other.end, &other.end_label, other_end)
    } else {
        (base.end, &base.end_label, base_end)
    };

    if merged_end - merged_start >= i64::from(MINUTES_PER_DAY) {
        return ParsedRange {
            start,
            end: start,
            start_label: start_label.clone(),
            end_label: start_label.clone(),
        };
    }

    ParsedRange {
        start,
        end,
        start_label: start_label.clone(),
        end_label: end_label.clone(),
    }
}
