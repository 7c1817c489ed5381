//! ArcGIS FeatureServer payload → raw truck records.
//!
//! The city publishes the schedule as a FeatureServer query result. Each
//! feature's attributes carry one slot, with coordinates in Web Mercator
//! (EPSG:3857) metres. Features without coordinates are dropped.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;
use truck_combiner::RawRecord;

/// WGS84 semi-major axis, the sphere radius Web Mercator projects onto.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

#[derive(Debug, Deserialize)]
struct FeedPayload {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    attributes: Attributes,
}

#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Truck")]
    truck: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Notes", default)]
    notes: Option<String>,
    #[serde(rename = "Link", default)]
    link: Option<String>,
    #[serde(rename = "Hours")]
    hours: String,
    #[serde(rename = "POINT_X", default)]
    point_x: Option<f64>,
    #[serde(rename = "POINT_Y", default)]
    point_y: Option<f64>,
}

/// Convert a FeatureServer JSON payload into raw records, in feed order.
pub fn records_from_feed(json: &str) -> Result<Vec<RawRecord>> {
    let payload: FeedPayload =
        serde_json::from_str(json).context("Failed to parse ArcGIS feature payload")?;

    let records = payload
        .features
        .into_iter()
        .filter_map(|feature| {
            let attrs = feature.attributes;
            let (x, y) = match (attrs.point_x, attrs.point_y) {
                (Some(x), Some(y)) if x != 0.0 && y != 0.0 => (x, y),
                _ => {
                    warn!(truck = %attrs.truck, location = %attrs.title, day = %attrs.day,
                        "dropping feature without coordinates");
                    return None;
                }
            };
            let (lng, lat) = web_mercator_to_wgs84(x, y);
            Some(RawRecord {
                day: attrs.day,
                title: attrs.truck,
                location: attrs.title,
                notes: attrs.notes.unwrap_or_default(),
                website: attrs.link.filter(|link| !link.is_empty()),
                availability: attrs.hours,
                lat,
                lng,
            })
        })
        .collect();

    Ok(records)
}

/// Inverse spherical Mercator: EPSG:3857 metres → `(lng, lat)` degrees.
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lng = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees();
    (lng, lat)
}
