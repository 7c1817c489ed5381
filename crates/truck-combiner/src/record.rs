//! Raw feed records and consolidated truck-location records.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One schedule slot as delivered by the feed adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Weekday name, e.g. `"Monday"`.
    pub day: String,
    /// Truck name.
    pub title: String,
    /// Location name.
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Availability string, e.g. `"11 a.m. - 3 p.m."`.
    pub availability: String,
    pub lat: f64,
    pub lng: f64,
}

impl RawRecord {
    pub fn key(&self) -> TruckKey {
        TruckKey::new(&self.title, &self.location, self.lat, self.lng)
    }
}

/// Identity of a truck at a location: `(title, location, lat, lng)`.
///
/// Coordinates are compared by bit pattern, with `-0.0` folded into `0.0`
/// so the key agrees with numeric equality for every value JSON can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruckKey {
    pub title: String,
    pub location: String,
    lat_bits: u64,
    lng_bits: u64,
}

impl TruckKey {
    pub fn new(title: &str, location: &str, lat: f64, lng: f64) -> Self {
        Self {
            title: title.to_string(),
            location: location.to_string(),
            lat_bits: coordinate_bits(lat),
            lng_bits: coordinate_bits(lng),
        }
    }
}

fn coordinate_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Weekday name → that day's ranges, iterated in insertion order.
///
/// Serializes as a JSON object whose keys appear in the order days were
/// first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    entries: Vec<(String, Vec<String>)>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| d == day)
            .map(|(_, ranges)| ranges.as_slice())
    }

    /// The ranges for `day`, inserting an empty bucket at the end if absent.
    pub fn bucket_mut(&mut self, day: &str) -> &mut Vec<String> {
        let idx = match self.entries.iter().position(|(d, _)| d == day) {
            Some(idx) => idx,
            None => {
                self.entries.push((day.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn contains_day(&self, day: &str) -> bool {
        self.get(day).is_some()
    }

    /// Day names in insertion order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(d, ranges)| (d.as_str(), ranges.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: Into<String>, R: Into<String>> FromIterator<(D, Vec<R>)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (D, Vec<R>)>>(iter: I) -> Self {
        let mut schedule = DaySchedule::new();
        for (day, ranges) in iter {
            let day = day.into();
            let bucket = schedule.bucket_mut(&day);
            bucket.extend(ranges.into_iter().map(Into::into));
        }
        schedule
    }
}

impl Serialize for DaySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, ranges) in &self.entries {
            map.serialize_entry(day, ranges)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DaySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DayScheduleVisitor;

        impl<'de> Visitor<'de> for DayScheduleVisitor {
            type Value = DaySchedule;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of day names to lists of availability strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = DaySchedule::new();
                while let Some((day, ranges)) = access.next_entry::<String, Vec<String>>()? {
                    schedule.bucket_mut(&day).extend(ranges);
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(DayScheduleVisitor)
    }
}

/// One truck at one location with all of its days folded together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub title: String,
    pub location: String,
    pub notes: String,
    pub website: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub days: DaySchedule,
}

impl CombinedRecord {
    /// An empty record carrying `raw`'s identity, notes and website.
    pub fn from_first(raw: &RawRecord) -> Self {
        Self {
            title: raw.title.clone(),
            location: raw.location.clone(),
            notes: raw.notes.clone(),
            website: raw.website.clone(),
            lat: raw.lat,
            lng: raw.lng,
            days: DaySchedule::new(),
        }
    }

    pub fn key(&self) -> TruckKey {
        TruckKey::new(&self.title, &self.location, self.lat, self.lng)
    }
}
