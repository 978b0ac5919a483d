use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PDF generation service, without trailing slash.
    pub service_url: String,
    pub download_dir: PathBuf,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_url = lookup("CV_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if service_url.is_empty() {
            bail!("CV_SERVICE_URL must not be empty");
        }

        let request_timeout = match lookup("CV_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .with_context(|| format!("CV_REQUEST_TIMEOUT_SECS must be a number, got '{raw}'"))?;
                if secs == 0 {
                    bail!("CV_REQUEST_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            service_url,
            download_dir: lookup("CV_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            request_timeout,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
