//! Trait abstraction for record emission to enable testing

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::Result;

/// One metric field value on an emitted record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Float(f64),
    Integer(i64),
    Text(String),
}

/// One timestamped, tagged point destined for a measurement category
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Measurement category name (`TX`, `Electrical`, ...)
    pub measurement: &'static str,
    /// Buoy identity, written as the partition tag
    pub buoy_id: String,
    /// Renamed output fields, in wire order
    pub fields: Vec<(&'static str, RecordValue)>,
    /// Source timestamp shared by all records of one report
    pub timestamp: NaiveDateTime,
}

/// Trait for the record emission boundary
#[async_trait]
pub trait RecordEmitter: Send + Sync {
    /// Write one record to the time-series store
    async fn emit(&self, record: &Record) -> Result<()>;
}
