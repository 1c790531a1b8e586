//! # Buoy Ingest Library
//!
//! Decode Iridium SBD buoy telemetry reports and persist them to InfluxDB.
//!
//! This library provides the core functionality for turning one hex-encoded
//! sensor payload plus its transport envelope into five typed, time-stamped
//! measurement records (TX metadata, electrical, environmental, logic state,
//! alarm) partitioned by measurement category and tagged by buoy identity.

pub mod config;
pub mod error;
pub mod report;
pub mod pipeline;
pub mod storage;
