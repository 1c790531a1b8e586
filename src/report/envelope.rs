//! # Envelope Extractor
//!
//! Lifts transport-level metadata (device identity, session sequence number,
//! transmit time, ranging quality) out of the Iridium SBD envelope that
//! surrounds the hex payload.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::schema::TxMetadata;
use crate::error::{IngestError, Result};

/// One raw report as delivered by the satellite gateway.
///
/// Every key is optional at the deserialization layer so that an absent key
/// surfaces as a `MissingField` error from the pipeline, not as a transport
/// parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    /// Hex-encoded sensor payload
    pub data: Option<String>,
    /// Modem identity (envelope-level; not the buoy identity)
    pub imei: Option<String>,
    /// Modem serial number
    pub serial: Option<i64>,
    /// Mobile-originated message sequence number
    pub momsn: Option<i64>,
    /// Gateway transmit time, passed through verbatim
    pub transmit_time: Option<String>,
    /// Ranging position estimate
    pub iridium_latitude: Option<f64>,
    /// Ranging position estimate
    pub iridium_longitude: Option<f64>,
    /// Ranging position uncertainty (circular error probable, km)
    pub iridium_cep: Option<f64>,
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(IngestError::MissingField(name))
}

/// Extract the TX metadata group from the envelope
///
/// Copies the envelope fields verbatim and attaches the payload-derived
/// `timestamp`; `transmit_time` is carried as an opaque string, never
/// re-parsed.
///
/// # Errors
///
/// Returns `MissingField` naming the first absent envelope key.
pub fn extract_tx_metadata(raw: &RawMessage, timestamp: NaiveDateTime) -> Result<TxMetadata> {
    Ok(TxMetadata {
        timestamp,
        imei: require(raw.imei.clone(), "imei")?,
        serial: require(raw.serial, "serial")?,
        momsn: require(raw.momsn, "momsn")?,
        transmit_time: require(raw.transmit_time.clone(), "transmit_time")?,
        iridium_latitude: require(raw.iridium_latitude, "iridium_latitude")?,
        iridium_longitude: require(raw.iridium_longitude, "iridium_longitude")?,
        iridium_cep: require(raw.iridium_cep, "iridium_cep")?,
    })
}
