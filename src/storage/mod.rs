//! # Storage Module
//!
//! InfluxDB 2.x record emitter.
//!
//! This module handles:
//! - Converting emitted records into line-protocol data points
//! - Tagging every point with the buoy identity
//! - Writing points to the configured bucket
//! - Startup health probing of the InfluxDB server

pub mod emitter;

use async_trait::async_trait;
use influxdb2::models::DataPoint;
use influxdb2::Client;
use tracing::{debug, info};

use crate::config::InfluxDbConfig;
use crate::error::{IngestError, Result};
use crate::report::schema::BUOY_TAG_KEY;
use emitter::{Record, RecordEmitter, RecordValue};

/// InfluxDB-backed record emitter.
///
/// Constructed once at startup and shared by the ingest loop; connection
/// credentials are never re-read per report.
pub struct InfluxWriter {
    client: Client,
    bucket: String,
    url: String,
}

impl InfluxWriter {
    /// Create a new writer from the InfluxDB configuration
    pub fn new(config: &InfluxDbConfig) -> Self {
        info!(
            url = %config.url,
            org = %config.org,
            bucket = %config.bucket,
            "Creating InfluxDB client"
        );

        Self {
            client: Client::new(&config.url, &config.org, &config.token),
            bucket: config.bucket.clone(),
            url: config.url.clone(),
        }
    }

    /// Probe the InfluxDB `/health` endpoint
    ///
    /// # Errors
    ///
    /// Returns `Storage` error if the server is unreachable or unhealthy.
    pub async fn health_check(&self) -> Result<()> {
        let health_url = format!("{}/health", self.url);

        let response = reqwest::get(&health_url)
            .await
            .map_err(|e| IngestError::Storage(format!("health check failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            info!(status = %status, "InfluxDB health check passed");
            Ok(())
        } else {
            Err(IngestError::Storage(format!(
                "InfluxDB health check failed with status: {status}"
            )))
        }
    }
}

/// Convert one record into an InfluxDB data point
fn to_data_point(record: &Record) -> Result<DataPoint> {
    let nanos = record
        .timestamp
        .and_utc()
        .timestamp_nanos_opt()
        .ok_or_else(|| {
            IngestError::Range(format!(
                "timestamp {} is outside the nanosecond-representable range",
                record.timestamp
            ))
        })?;

    let mut point = DataPoint::builder(record.measurement)
        .tag(BUOY_TAG_KEY, record.buoy_id.as_str())
        .timestamp(nanos);

    for (name, value) in &record.fields {
        point = match value {
            RecordValue::Float(v) => point.field(*name, *v),
            RecordValue::Integer(v) => point.field(*name, *v),
            RecordValue::Text(v) => point.field(*name, v.clone()),
        };
    }

    point
        .build()
        .map_err(|e| IngestError::Storage(format!("failed to build data point: {e}")))
}

#[async_trait]
impl RecordEmitter for InfluxWriter {
    async fn emit(&self, record: &Record) -> Result<()> {
        let point = to_data_point(record)?;

        self.client
            .write(&self.bucket, futures::stream::iter(vec![point]))
            .await
            .map_err(|e| IngestError::Storage(format!("write failed: {e}")))?;

        debug!(
            measurement = record.measurement,
            buoy_id = %record.buoy_id,
            "Wrote data point to InfluxDB"
        );

        Ok(())
    }
}
