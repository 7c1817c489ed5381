//! Error types for availability parsing.

use thiserror::Error;

/// A malformed availability string.
///
/// Feed data is expected to be well formed, so any of these is a data-quality
/// defect upstream. Callers get the offending text back rather than a coerced
/// value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not `<start> - <end>`.
    #[error("Malformed availability range: '{input}'")]
    MalformedRange { input: String },

    /// One side of the range is not `H[:MM] a.m.` or `H[:MM] p.m.`.
    #[error("Malformed time '{token}': expected H[:MM] a.m. or H[:MM] p.m.")]
    MalformedTime { token: String },

    #[error("Hour {hour} out of range in '{token}' (expected 1-12)")]
    HourOutOfRange { token: String, hour: u32 },

    #[error("Minute {minute} out of range in '{token}' (expected 0-59)")]
    MinuteOutOfRange { token: String, minute: u32 },
}

pub type Result<T> = std::result::Result<T, ParseError>;
