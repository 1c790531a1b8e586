//! # Buoy Ingest
//!
//! Ingest service for Iridium SBD buoy telemetry reports.
//!
//! This binary reads one JSON report per line from stdin (the shape the
//! satellite gateway webhook relays), decodes the hex sensor payload plus
//! transport envelope, and writes five measurement records per report to
//! InfluxDB. Each report is handled independently and synchronously; a
//! rejected report never produces partial writes.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use buoy_ingest::config::Config;
use buoy_ingest::pipeline;
use buoy_ingest::report::envelope::RawMessage;
use buoy_ingest::storage::InfluxWriter;

/// Default configuration file path
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Buoy Ingest v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load configuration from {config_path}"))?;

    // One long-lived writer for the whole process; credentials are read once.
    let writer = InfluxWriter::new(&config.influxdb);
    writer
        .health_check()
        .await
        .context("InfluxDB is not reachable")?;

    info!("Reading reports from stdin (one JSON document per line)");
    info!("Press Ctrl+C to exit");

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();
    let mut accepted: u64 = 0;
    let mut rejected: u64 = 0;

    loop {
        line.clear();

        tokio::select! {
            read = reader.read_line(&mut line) => {
                match read {
                    Ok(0) => {
                        info!("End of input");
                        break;
                    }
                    Ok(_) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }

                        let raw: RawMessage = match serde_json::from_str(trimmed) {
                            Ok(raw) => raw,
                            Err(e) => {
                                warn!(error = %e, "Rejected report: not a valid JSON envelope");
                                rejected += 1;
                                continue;
                            }
                        };

                        match pipeline::ingest(&raw, &writer).await {
                            Ok(buoy_id) => {
                                accepted += 1;
                                info!(buoy_id = %buoy_id, "Report ingested");
                            }
                            Err(e) => {
                                rejected += 1;
                                error!(kind = e.kind(), error = %e, "Report rejected");
                            }
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Error reading from stdin");
                        break;
                    }
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    info!(accepted, rejected, "Buoy Ingest stopped");
    Ok(())
}
