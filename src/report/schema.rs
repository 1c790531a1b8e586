//! # Report Schema Constants and Types
//!
//! Core definitions for the buoy sensor report format.

use chrono::NaiveDateTime;

/// Field separator inside the decoded payload text
pub const FIELD_SEPARATOR: char = ';';

/// Number of positional fields in the payload schema
/// Payload structure: id;timestamp;lat;lon;panel_voltage;panel_current;
/// battery_voltage;battery_current;logic_1;logic_2;logic_3;logic_4;
/// light_pattern_alarm
pub const PAYLOAD_FIELD_COUNT: usize = 13;

/// Minimum digit count for an encoded timestamp (`YYYYMMDDHH` + seconds group)
pub const TIMESTAMP_MIN_DIGITS: usize = 12;

/// Tag key carried on every emitted record
pub const BUOY_TAG_KEY: &str = "Boya";

/// Measurement name for transport metadata records
pub const MEASUREMENT_TX: &str = "TX";

/// Measurement name for electrical records
pub const MEASUREMENT_ELECTRICAL: &str = "Electrical";

/// Measurement name for environmental records
pub const MEASUREMENT_ENVIRONMENT: &str = "Environment";

/// Measurement name for logic-state records
pub const MEASUREMENT_LOGIC: &str = "Logic";

/// Measurement name for alarm records
pub const MEASUREMENT_ALARM: &str = "Alarm";

/// Decoded payload fields, keyed by the fixed positional schema.
///
/// The wire format carries no field names; each field is filled from the
/// token at its schema position. A payload shorter than the schema leaves
/// trailing fields as `None` (lenient truncation), which the partition
/// projections surface as `MissingField` errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedFields {
    pub id: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub panel_voltage: Option<f64>,
    pub panel_current: Option<f64>,
    pub battery_voltage: Option<f64>,
    pub battery_current: Option<f64>,
    pub logic_1: Option<f64>,
    pub logic_2: Option<f64>,
    pub logic_3: Option<f64>,
    pub logic_4: Option<f64>,
    pub light_pattern_alarm: Option<f64>,
}

/// Electrical measurement group (panel and battery readings)
#[derive(Debug, Clone, PartialEq)]
pub struct Electrical {
    pub timestamp: NaiveDateTime,
    pub panel_voltage: f64,
    pub panel_current: f64,
    pub battery_voltage: f64,
    pub battery_current: f64,
}

/// Environmental measurement group (position fix from the payload)
#[derive(Debug, Clone, PartialEq)]
pub struct Environmental {
    pub timestamp: NaiveDateTime,
    pub lat: f64,
    pub lon: f64,
}

/// Logic-state measurement group (four digital lines)
#[derive(Debug, Clone, PartialEq)]
pub struct Logic {
    pub timestamp: NaiveDateTime,
    pub logic_1: f64,
    pub logic_2: f64,
    pub logic_3: f64,
    pub logic_4: f64,
}

/// Alarm measurement group
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub timestamp: NaiveDateTime,
    pub light_pattern_alarm: f64,
}

/// Transport metadata group, lifted from the Iridium SBD envelope.
///
/// Carries the payload-derived timestamp, not a re-parse of `transmit_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct TxMetadata {
    pub timestamp: NaiveDateTime,
    pub imei: String,
    pub serial: i64,
    pub momsn: i64,
    pub transmit_time: String,
    pub iridium_latitude: f64,
    pub iridium_longitude: f64,
    pub iridium_cep: f64,
}
