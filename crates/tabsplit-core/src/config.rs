//! Application configuration domain types.
//!
//! Loaded from `config.toml` by the infrastructure layer; defaults are
//! defined here so a missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// Default OCR upload endpoint.
pub const DEFAULT_SCANNER_ENDPOINT: &str = "https://brytech.pythonanywhere.com/upload";

/// Default request timeout for the OCR upload, in seconds.
pub const DEFAULT_SCANNER_TIMEOUT_SECS: u64 = 60;

/// Settings for the external OCR scanner service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerSettings {
    /// Upload endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_SCANNER_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_SCANNER_TIMEOUT_SECS
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    /// OCR scanner settings.
    #[serde(default)]
    pub scanner: ScannerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config.scanner.endpoint_url, DEFAULT_SCANNER_ENDPOINT);
        assert_eq!(config.scanner.timeout_secs, DEFAULT_SCANNER_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: RootConfig =
            toml::from_str("[scanner]\nendpoint_url = \"http://localhost:9000/upload\"\n")
                .unwrap();
        assert_eq!(config.scanner.endpoint_url, "http://localhost:9000/upload");
        assert_eq!(config.scanner.timeout_secs, DEFAULT_SCANNER_TIMEOUT_SECS);
    }
}
