//! # truck-combiner
//!
//! Consolidates food-truck schedule slots into one record per truck location.
//!
//! The feed publishes one slot per truck, location, weekday and time block,
//! each with a free-text range such as `"11 a.m. - 3 p.m."`. This crate parses
//! those ranges, classifies them into morning/afternoon/evening windows, and
//! folds slots for the same truck location together, merging ranges on the
//! same day that touch or overlap.
//!
//! ```rust
//! use truck_combiner::combine;
//!
//! let merged = combine(&["11 a.m. - 3 p.m."], "7 a.m. - 11 a.m.").unwrap();
//! assert_eq!(merged, vec!["7 a.m. - 3 p.m."]);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — availability string → [`ParsedRange`]
//! - [`clock`] — minutes since midnight, overnight wrap, containment
//! - [`daypart`] — morning/afternoon/evening classification
//! - [`merge`] — fold a range into one day's list of ranges
//! - [`grouper`] — raw slots → consolidated truck-location records
//! - [`query`] — open-now lookups over consolidated records
//! - [`record`] — raw and consolidated record types
//! - [`error`] — error types

pub mod clock;
pub mod daypart;
pub mod error;
pub mod grouper;
pub mod merge;
pub mod parser;
pub mod query;
pub mod record;

pub use clock::TimeOfDay;
pub use daypart::{day_parts, is_open_in_afternoon, is_open_in_evening, is_open_in_morning, DayPart};
pub use error::ParseError;
pub use grouper::combine_trucks;
pub use merge::{can_combine, combine};
pub use parser::{date_within_availability, parse_range, ParsedRange};
pub use query::{open_at, open_during};
pub use record::{CombinedRecord, DaySchedule, RawRecord, TruckKey};
