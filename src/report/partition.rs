//! # Measurement Partitioner
//!
//! Pure projections of `DecodedFields` into the four payload-derived
//! measurement groups. Each group selects a disjoint field subset (the
//! timestamp is shared by all of them) and rejects a missing field by name,
//! which is how lenient payload truncation surfaces downstream.

use chrono::NaiveDateTime;

use super::schema::{Alarm, DecodedFields, Electrical, Environmental, Logic};
use crate::error::{IngestError, Result};

fn require<T: Copy>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(IngestError::MissingField(name))
}

fn require_timestamp(fields: &DecodedFields) -> Result<NaiveDateTime> {
    require(fields.timestamp, "timestamp")
}

/// Project the electrical group: panel and battery voltage/current
pub fn electrical(fields: &DecodedFields) -> Result<Electrical> {
    Ok(Electrical {
        timestamp: require_timestamp(fields)?,
        panel_voltage: require(fields.panel_voltage, "panel_voltage")?,
        panel_current: require(fields.panel_current, "panel_current")?,
        battery_voltage: require(fields.battery_voltage, "battery_voltage")?,
        battery_current: require(fields.battery_current, "battery_current")?,
    })
}

/// Project the environmental group: position fix
pub fn environmental(fields: &DecodedFields) -> Result<Environmental> {
    Ok(Environmental {
        timestamp: require_timestamp(fields)?,
        lat: require(fields.lat, "lat")?,
        lon: require(fields.lon, "lon")?,
    })
}

/// Project the logic group: four digital lines
pub fn logic(fields: &DecodedFields) -> Result<Logic> {
    Ok(Logic {
        timestamp: require_timestamp(fields)?,
        logic_1: require(fields.logic_1, "logic_1")?,
        logic_2: require(fields.logic_2, "logic_2")?,
        logic_3: require(fields.logic_3, "logic_3")?,
        logic_4: require(fields.logic_4, "logic_4")?,
    })
}

/// Project the alarm group
pub fn alarm(fields: &DecodedFields) -> Result<Alarm> {
    Ok(Alarm {
        timestamp: require_timestamp(fields)?,
        light_pattern_alarm: require(fields.light_pattern_alarm, "light_pattern_alarm")?,
    })
}
