//! # Payload Decoder
//!
//! Decodes the hex-encoded sensor payload carried in the envelope's `data`
//! field into the fixed 13-field report schema.

use super::schema::{DecodedFields, FIELD_SEPARATOR, PAYLOAD_FIELD_COUNT};
use super::timestamp::decode_timestamp;
use crate::error::{IngestError, Result};

/// Payload field names in wire order
const PAYLOAD_FIELDS: [&str; PAYLOAD_FIELD_COUNT] = [
    "id",
    "timestamp",
    "lat",
    "lon",
    "panel_voltage",
    "panel_current",
    "battery_voltage",
    "battery_current",
    "logic_1",
    "logic_2",
    "logic_3",
    "logic_4",
    "light_pattern_alarm",
];

/// Decode a hex-encoded payload into the report schema
///
/// Interprets `hex` as hexadecimal byte pairs, decodes the bytes as UTF-8
/// text, splits on `;`, and coerces each token to its schema type by
/// position: `id` stays text, `timestamp` goes through the timestamp
/// decoder, everything else parses as `f64`.
///
/// Truncation is lenient: a payload with fewer tokens than the schema leaves
/// the trailing fields unset, and extra tokens beyond the schema are
/// ignored. Downstream projections reject unset fields by name.
///
/// # Arguments
///
/// * `hex` - Hex-encoded payload text
///
/// # Returns
///
/// * `Result<DecodedFields>` - Decoded fields, or error if invalid
///
/// # Errors
///
/// Returns error if:
/// - `hex` is not valid hexadecimal or not valid UTF-8 (`Format`)
/// - The timestamp token fails to decode (`Format`/`Range`)
/// - A numeric token is not parseable as a number (`Type`)
pub fn decode_payload(hex: &str) -> Result<DecodedFields> {
    let bytes = hex::decode(hex)
        .map_err(|e| IngestError::Format(format!("invalid hex payload: {e}")))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| IngestError::Format(format!("payload is not valid UTF-8: {e}")))?;

    let mut fields = DecodedFields::default();

    // Zip stops at the shorter side: short payloads leave trailing fields
    // unset, extra tokens fall off the end of the schema.
    for (position, token) in text.split(FIELD_SEPARATOR).take(PAYLOAD_FIELD_COUNT).enumerate() {
        let name = PAYLOAD_FIELDS[position];
        match position {
            0 => fields.id = Some(token.to_string()),
            1 => fields.timestamp = Some(decode_timestamp(token)?),
            2 => fields.lat = Some(numeric(name, token)?),
            3 => fields.lon = Some(numeric(name, token)?),
            4 => fields.panel_voltage = Some(numeric(name, token)?),
            5 => fields.panel_current = Some(numeric(name, token)?),
            6 => fields.battery_voltage = Some(numeric(name, token)?),
            7 => fields.battery_current = Some(numeric(name, token)?),
            8 => fields.logic_1 = Some(numeric(name, token)?),
            9 => fields.logic_2 = Some(numeric(name, token)?),
            10 => fields.logic_3 = Some(numeric(name, token)?),
            11 => fields.logic_4 = Some(numeric(name, token)?),
            12 => fields.light_pattern_alarm = Some(numeric(name, token)?),
            _ => break,
        }
    }

    Ok(fields)
}

/// Coerce one payload token to a numeric field value
fn numeric(field: &'static str, token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| IngestError::Type {
        field,
        value: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn hex_of(text: &str) -> String {
        hex::encode(text.as_bytes())
    }

    const FULL_REPORT: &str = "B12;202401151530;10.5;-20.3;12.1;0.5;13.2;1.1;1;0;1;0;0";

    #[test]
    fn test_decode_full_payload() {
        let fields = decode_payload(&hex_of(FULL_REPORT)).unwrap();

        assert_eq!(fields.id.as_deref(), Some("B12"));
        let ts = fields.timestamp.unwrap();
        assert_eq!(
            ts.date(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (15, 0, 30));
        assert_eq!(fields.lat, Some(10.5));
        assert_eq!(fields.lon, Some(-20.3));
        assert_eq!(fields.panel_voltage, Some(12.1));
        assert_eq!(fields.panel_current, Some(0.5));
        assert_eq!(fields.battery_voltage, Some(13.2));
        assert_eq!(fields.battery_current, Some(1.1));
        assert_eq!(fields.logic_1, Some(1.0));
        assert_eq!(fields.logic_2, Some(0.0));
        assert_eq!(fields.logic_3, Some(1.0));
        assert_eq!(fields.logic_4, Some(0.0));
        assert_eq!(fields.light_pattern_alarm, Some(0.0));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let hex = hex_of(FULL_REPORT);
        assert_eq!(decode_payload(&hex).unwrap(), decode_payload(&hex).unwrap());
    }

    #[test]
    fn test_decode_truncated_payload_leaves_trailing_fields_unset() {
        // 10 of 13 tokens: logic_3, logic_4, light_pattern_alarm absent
        let hex = hex_of("B12;202401151530;10.5;-20.3;12.1;0.5;13.2;1.1;1;0");
        let fields = decode_payload(&hex).unwrap();

        assert_eq!(fields.logic_2, Some(0.0));
        assert_eq!(fields.logic_3, None);
        assert_eq!(fields.logic_4, None);
        assert_eq!(fields.light_pattern_alarm, None);
    }

    #[test]
    fn test_decode_ignores_extra_tokens() {
        let hex = hex_of(&format!("{FULL_REPORT};99;98"));
        let fields = decode_payload(&hex).unwrap();
        assert_eq!(fields.light_pattern_alarm, Some(0.0));
    }

    #[test]
    fn test_decode_odd_length_hex() {
        let result = decode_payload("4231323");
        assert!(matches!(result, Err(IngestError::Format(_))));
    }

    #[test]
    fn test_decode_non_hex_characters() {
        let result = decode_payload("zz31323b");
        assert!(matches!(result, Err(IngestError::Format(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        // 0xFF is never valid UTF-8
        let result = decode_payload("ff");
        assert!(matches!(result, Err(IngestError::Format(_))));
    }

    #[test]
    fn test_decode_non_numeric_field() {
        let hex = hex_of("B12;202401151530;north;-20.3");
        let result = decode_payload(&hex);
        assert!(matches!(
            result,
            Err(IngestError::Type { field: "lat", .. })
        ));
    }

    #[test]
    fn test_decode_bad_timestamp_token() {
        let hex = hex_of("B12;2024;10.5");
        let result = decode_payload(&hex);
        assert!(matches!(result, Err(IngestError::Format(_))));
    }
}
