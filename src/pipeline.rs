//! # Ingest Pipeline
//!
//! Orchestrates one report: decode the hex payload, partition the fields
//! into measurement groups, lift the transport metadata, and hand the five
//! resulting records to the record emitter. Any failure aborts the whole
//! ingest before a single record is written.

use crate::error::{IngestError, Result};
use crate::report::envelope::{extract_tx_metadata, RawMessage};
use crate::report::{decoder, partition};
use crate::report::schema::{
    Alarm, Electrical, Environmental, Logic, TxMetadata, MEASUREMENT_ALARM,
    MEASUREMENT_ELECTRICAL, MEASUREMENT_ENVIRONMENT, MEASUREMENT_LOGIC, MEASUREMENT_TX,
};
use crate::storage::emitter::{Record, RecordEmitter, RecordValue};

/// One fully decoded report: buoy identity plus the five measurement groups
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedReport {
    /// Buoy identity from the payload `id` field (never the envelope `imei`)
    pub buoy_id: String,
    pub tx: TxMetadata,
    pub electrical: Electrical,
    pub environmental: Environmental,
    pub logic: Logic,
    pub alarm: Alarm,
}

/// Decode one raw message into a complete report
///
/// The payload decoder runs first; the envelope extractor needs the
/// payload-derived timestamp. Fails atomically: either every group decodes
/// or the report is rejected.
///
/// # Errors
///
/// Propagates the originating decode/projection error (`Format`, `Range`,
/// `Type`, or `MissingField`).
pub fn process(raw: &RawMessage) -> Result<DecodedReport> {
    let hex = raw.data.as_deref().ok_or(IngestError::MissingField("data"))?;
    let fields = decoder::decode_payload(hex)?;

    let buoy_id = fields.id.clone().ok_or(IngestError::MissingField("id"))?;
    let timestamp = fields.timestamp.ok_or(IngestError::MissingField("timestamp"))?;

    Ok(DecodedReport {
        buoy_id,
        tx: extract_tx_metadata(raw, timestamp)?,
        electrical: partition::electrical(&fields)?,
        environmental: partition::environmental(&fields)?,
        logic: partition::logic(&fields)?,
        alarm: partition::alarm(&fields)?,
    })
}

impl DecodedReport {
    /// Render the report as five emission-ready records.
    ///
    /// Field names change here to the storage wire contract (`panel_voltage`
    /// becomes `panelVoltage`, and so on). The renames must be preserved
    /// exactly for compatibility with existing dashboards.
    pub fn into_records(self) -> [Record; 5] {
        let tag = |measurement, fields, timestamp| Record {
            measurement,
            buoy_id: self.buoy_id.clone(),
            fields,
            timestamp,
        };

        [
            tag(
                MEASUREMENT_TX,
                vec![
                    ("imei", RecordValue::Text(self.tx.imei.clone())),
                    ("serial", RecordValue::Integer(self.tx.serial)),
                    ("momsn", RecordValue::Integer(self.tx.momsn)),
                    ("transmit_time", RecordValue::Text(self.tx.transmit_time.clone())),
                    ("iridium_latitude", RecordValue::Float(self.tx.iridium_latitude)),
                    ("iridium_longitude", RecordValue::Float(self.tx.iridium_longitude)),
                    ("iridium_cep", RecordValue::Float(self.tx.iridium_cep)),
                ],
                self.tx.timestamp,
            ),
            tag(
                MEASUREMENT_ELECTRICAL,
                vec![
                    ("panelVoltage", RecordValue::Float(self.electrical.panel_voltage)),
                    ("panelCurrent", RecordValue::Float(self.electrical.panel_current)),
                    ("batteryVoltage", RecordValue::Float(self.electrical.battery_voltage)),
                    ("batteryCurrent", RecordValue::Float(self.electrical.battery_current)),
                ],
                self.electrical.timestamp,
            ),
            tag(
                MEASUREMENT_LOGIC,
                vec![
                    ("Logic1", RecordValue::Float(self.logic.logic_1)),
                    ("Logic2", RecordValue::Float(self.logic.logic_2)),
                    ("Logic3", RecordValue::Float(self.logic.logic_3)),
                    ("Logic4", RecordValue::Float(self.logic.logic_4)),
                ],
                self.logic.timestamp,
            ),
            tag(
                MEASUREMENT_ENVIRONMENT,
                vec![
                    ("Lat", RecordValue::Float(self.environmental.lat)),
                    ("Lon", RecordValue::Float(self.environmental.lon)),
                ],
                self.environmental.timestamp,
            ),
            tag(
                MEASUREMENT_ALARM,
                vec![(
                    "LightPatternAlarm",
                    RecordValue::Float(self.alarm.light_pattern_alarm),
                )],
                self.alarm.timestamp,
            ),
        ]
    }
}

/// Ingest one raw message: decode, then emit all five records sequentially
///
/// Returns the buoy identity on success. A decode failure produces zero
/// writes; an emitter failure propagates without retry.
pub async fn ingest(raw: &RawMessage, emitter: &dyn RecordEmitter) -> Result<String> {
    let report = process(raw)?;
    let buoy_id = report.buoy_id.clone();

    for record in report.into_records() {
        emitter.emit(&record).await?;
    }

    Ok(buoy_id)
}
