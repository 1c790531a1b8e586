//! # Buoy Report Module
//!
//! Implementation of the buoy sensor report wire format.
//!
//! This module handles:
//! - Hex payload decoding into the fixed 13-field report schema
//! - Split-minute timestamp decoding (total seconds since the top of the hour)
//! - Partitioning decoded fields into disjoint measurement groups
//! - Extracting transport metadata from the Iridium SBD envelope

pub mod schema;
pub mod timestamp;
pub mod decoder;
pub mod partition;
pub mod envelope;
