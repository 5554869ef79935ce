use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct AzureConfig {
    pub endpoint: String,
    pub key: String,
    pub language: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    /// JSON file of attendance records; the built-in sample is used when unset.
    pub attendance_data_path: Option<String>,

    // Rate limiting
    pub rate_analyze_per_min: u32,

    pub azure: AzureConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, applying the same defaults as `from_env`.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| var(key).ok_or_else(|| anyhow!("{key} must be set"));
        let or_default = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let timeout_secs: u64 = or_default("EXTRACTION_TIMEOUT_SECS", "30")
            .parse()
            .context("EXTRACTION_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            server_addr: or_default("SERVER_ADDR", "127.0.0.1:8080"),
            api_prefix: or_default("API_PREFIX", "/api"),
            log_dir: or_default("LOG_DIR", "logs"),
            attendance_data_path: var("ATTENDANCE_DATA_PATH"),

            rate_analyze_per_min: or_default("RATE_ANALYZE_PER_MIN", "120")
                .parse()
                .context("RATE_ANALYZE_PER_MIN must be a number")?,

            azure: AzureConfig {
                endpoint: required("AZURE_CHAT_ENDPOINT")?,
                key: required("AZURE_CHAT_KEY")?,
                language: or_default("AZURE_CHAT_LANGUAGE", "en"),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
