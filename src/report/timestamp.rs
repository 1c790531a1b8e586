//! # Timestamp Decoder
//!
//! Decodes the report timestamp format: `YYYYMMDDHH` followed by a trailing
//! digit group encoding **total seconds since the top of the hour**. This
//! split-minute encoding is deliberate in the source data format; minute and
//! second are derived here, never parsed as `MMSS`.

use chrono::{NaiveDate, NaiveDateTime};

use super::schema::TIMESTAMP_MIN_DIGITS;
use crate::error::{IngestError, Result};

/// Decode a digit string into a naive calendar timestamp
///
/// # Arguments
///
/// * `digits` - At least 12 ASCII digits: `YYYYMMDDHH` + seconds-since-hour
///
/// # Returns
///
/// * `Result<NaiveDateTime>` - Decoded timestamp (no timezone attached;
///   the storage layer pins UTC at the emission boundary)
///
/// # Errors
///
/// Returns error if:
/// - Fewer than 12 digits, or any character is not an ASCII digit (`Format`)
/// - Month, day, or hour is out of calendar range (`Range`)
/// - The seconds group implies a minute of 60 or more (`Range`)
pub fn decode_timestamp(digits: &str) -> Result<NaiveDateTime> {
    if digits.len() < TIMESTAMP_MIN_DIGITS {
        return Err(IngestError::Format(format!(
            "timestamp too short: expected at least {} digits, got {}",
            TIMESTAMP_MIN_DIGITS,
            digits.len()
        )));
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IngestError::Format(format!(
            "timestamp contains non-digit characters: `{digits}`"
        )));
    }

    let parse = |slice: &str| -> Result<u32> {
        slice
            .parse::<u32>()
            .map_err(|_| IngestError::Format(format!("invalid digit group `{slice}`")))
    };

    let year = parse(&digits[0..4])? as i32;
    let month = parse(&digits[4..6])?;
    let day = parse(&digits[6..8])?;
    let hour = parse(&digits[8..10])?;

    // Everything after the hour is one group of total seconds since the top
    // of the hour ([10..12] for the canonical 12-digit form).
    let total_seconds = parse(&digits[10..])?;
    let minute = total_seconds / 60;
    let second = total_seconds % 60;

    if minute >= 60 {
        return Err(IngestError::Range(format!(
            "seconds since hour out of range: {total_seconds} implies minute {minute}"
        )));
    }

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        IngestError::Range(format!("invalid calendar date {year:04}-{month:02}-{day:02}"))
    })?;

    date.and_hms_opt(hour, minute, second).ok_or_else(|| {
        IngestError::Range(format!("invalid time of day {hour:02}:{minute:02}:{second:02}"))
    })
}
