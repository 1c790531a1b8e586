//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//! The InfluxDB token may be overridden from the environment so secrets can
//! stay out of the config file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub influxdb: InfluxDbConfig,
}

/// InfluxDB connection configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InfluxDbConfig {
    #[serde(default = "default_influxdb_url")]
    pub url: String,

    pub org: String,

    pub bucket: String,

    #[serde(default)]
    pub token: String,
}

fn default_influxdb_url() -> String { "http://localhost:8086".to_string() }

impl Config {
    /// Load configuration from a TOML file
    ///
    /// The `INFLUXDB_TOKEN` environment variable overrides the token from
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| IngestError::Config(e.to_string()))?;

        if let Ok(token) = std::env::var("INFLUXDB_TOKEN") {
            tracing::info!("Using INFLUXDB_TOKEN from environment");
            config.influxdb.token = token;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.influxdb.url.starts_with("http://") && !self.influxdb.url.starts_with("https://") {
            return Err(IngestError::Config(format!(
                "invalid InfluxDB URL: {} (must start with http:// or https://)",
                self.influxdb.url
            )));
        }

        if self.influxdb.org.is_empty() {
            return Err(IngestError::Config("influxdb org cannot be empty".to_string()));
        }

        if self.influxdb.bucket.is_empty() {
            return Err(IngestError::Config("influxdb bucket cannot be empty".to_string()));
        }

        if self.influxdb.token.is_empty() {
            return Err(IngestError::Config(
                "influxdb token cannot be empty (set it in the config file or INFLUXDB_TOKEN)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_config() -> Config {
        Config {
            influxdb: InfluxDbConfig {
                url: default_influxdb_url(),
                org: "buoys".to_string(),
                bucket: "telemetry".to_string(),
                token: "test-token".to_string(),
            },
        }
    }

    #[test]
    fn test_default_config() {
        assert!(create_valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = create_valid_config();
        config.influxdb.url = "ftp://localhost:8086".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_org() {
        let mut config = create_valid_config();
        config.influxdb.org = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_bucket() {
        let mut config = create_valid_config();
        config.influxdb.bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_token() {
        let mut config = create_valid_config();
        config.influxdb.token = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let toml_content = r#"
[influxdb]
url = "http://influx.local:8086"
org = "buoys"
bucket = "telemetry"
token = "file-token"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.influxdb.url, "http://influx.local:8086");
        assert_eq!(config.influxdb.bucket, "telemetry");
    }

    #[test]
    fn test_default_functions() {
        assert_eq!(default_influxdb_url(), "http://localhost:8086");
    }
}
