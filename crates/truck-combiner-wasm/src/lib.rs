//! WASM bindings for truck-combiner.
//!
//! Exposes schedule combining, day-part classification and open-now checks
//! to the map front end via `wasm-bindgen`. Lists and records cross the
//! boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p truck-combiner-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/truck_combiner_wasm.wasm
//! ```

use chrono::NaiveTime;
use truck_combiner::RawRecord;
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse a JSON array of availability strings.
fn parse_ranges_json(json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid availability list JSON: {}", e)))
}

/// Parse `HH:MM` (24-hour) into a wall-clock time.
fn parse_clock(s: &str) -> Result<NaiveTime, JsValue> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| JsValue::from_str(&format!("Invalid time '{}': {}", s, e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Fold raw slot records into one record per truck location.
///
/// `records_json` is a JSON array of `{day, title, location, notes, website,
/// availability, lat, lng}` objects. Returns a JSON array of
/// `{title, location, notes, website, lat, lng, days}` objects.
#[wasm_bindgen(js_name = "combineTrucks")]
pub fn combine_trucks(records_json: &str) -> Result<String, JsValue> {
    let records: Vec<RawRecord> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;

    let combined = truck_combiner::combine_trucks(&records).map_err(js_error)?;

    serde_json::to_string(&combined)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether `candidate` touches or overlaps a range in the JSON list.
#[wasm_bindgen(js_name = "canCombineAvailability")]
pub fn can_combine_availability(existing_json: &str, candidate: &str) -> Result<bool, JsValue> {
    let existing = parse_ranges_json(existing_json)?;
    truck_combiner::can_combine(&existing, candidate).map_err(js_error)
}

/// Fold `candidate` into the JSON list of ranges, returning the new list as JSON.
#[wasm_bindgen(js_name = "combineAvailabilities")]
pub fn combine_availabilities(existing_json: &str, candidate: &str) -> Result<String, JsValue> {
    let existing = parse_ranges_json(existing_json)?;
    let combined = truck_combiner::combine(&existing, candidate).map_err(js_error)?;

    serde_json::to_string(&combined)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The day parts a range falls in, as a JSON array of names.
#[wasm_bindgen(js_name = "dayParts")]
pub fn day_parts(availability: &str) -> Result<String, JsValue> {
    let parts = truck_combiner::day_parts(availability).map_err(js_error)?;
    serde_json::to_string(&parts)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen(js_name = "isOpenInMorning")]
pub fn is_open_in_morning(availability: &str) -> Result<bool, JsValue> {
    truck_combiner::is_open_in_morning(availability).map_err(js_error)
}

#[wasm_bindgen(js_name = "isOpenInAfternoon")]
pub fn is_open_in_afternoon(availability: &str) -> Result<bool, JsValue> {
    truck_combiner::is_open_in_afternoon(availability).map_err(js_error)
}

#[wasm_bindgen(js_name = "isOpenInEvening")]
pub fn is_open_in_evening(availability: &str) -> Result<bool, JsValue> {
    truck_combiner::is_open_in_evening(availability).map_err(js_error)
}

/// Whether the range contains the wall-clock time `at` (`"HH:MM"`).
#[wasm_bindgen(js_name = "dateWithinAvailability")]
pub fn date_within_availability(availability: &str, at: &str) -> Result<bool, JsValue> {
    let at = parse_clock(at)?;
    truck_combiner::date_within_availability(availability, &at).map_err(js_error)
}
