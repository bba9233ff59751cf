//! Client settings loaded from flags, environment, or defaults

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "https://deadpandr.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const ENV_API_URL: &str = "DEADPANDR_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "DEADPANDR_TIMEOUT_SECS";
pub const ENV_OUTPUT_DIR: &str = "DEADPANDR_OUTPUT_DIR";
pub const ENV_LOG_LEVEL: &str = "DEADPANDR_LOG_LEVEL";

/// Where the service lives and where exports are written
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub api_url: Url,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl ClientSettings {
    pub fn new(api_url: &str, timeout_secs: u64, output_dir: impl Into<PathBuf>) -> ClientResult<Self> {
        let api_url = parse_api_url(api_url)?;
        if timeout_secs == 0 {
            return Err(ClientError::config("timeout must be at least one second"));
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            output_dir: output_dir.into(),
        })
    }

    /// Build settings from `DEADPANDR_*` variables, loading `.env` if present
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ClientError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let output_dir = std::env::var(ENV_OUTPUT_DIR).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());

        Self::new(&api_url, timeout_secs, output_dir)
    }

    /// Full URL of an endpoint below the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_api_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ClientError::config(format!("invalid API URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::config(format!("API URL must use http or https, got '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::new(DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR).unwrap();
        assert_eq!(settings.api_url.as_str(), "https://deadpandr.onrender.com/");
        assert_eq!(settings.timeout, Duration::from_secs(120));
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_endpoint_joining() {
        let settings = ClientSettings::new("http://localhost:8000", 5, "out").unwrap();
        assert_eq!(settings.endpoint("/generate"), "http://localhost:8000/generate");

        let settings = ClientSettings::new("http://localhost:8000/api/", 5, "out").unwrap();
        assert_eq!(settings.endpoint("save"), "http://localhost:8000/api/save");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientSettings::new("not a url", 5, "."),
            Err(ClientError::Config { .. })
        ));
        assert!(matches!(
            ClientSettings::new("ftp://example.com", 5, "."),
            Err(ClientError::Config { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(ClientSettings::new("http://localhost", 0, ".").is_err());
    }
}
