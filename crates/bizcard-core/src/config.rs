//! Application configuration, read from `config.toml` in the data dir.
//!
//! A missing file is created with defaults. A file that fails to parse is
//! an error; binaries log it and carry on with defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://bizcard.app";

/// Data directory shared by the desktop app and the CLI:
/// `<platform data dir>/bizcard`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bizcard")
}

/// Data directory of a named instance: `<platform data dir>/bizcard-<name>`.
pub fn instance_data_dir(name: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!("bizcard-{}", name))
}

/// Artificial latency of the mock API, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDelays {
    pub load_ms: u64,
    pub save_ms: u64,
    pub auth_ms: u64,
    pub verify_ms: u64,
    pub qr_ms: u64,
}

impl Default for ApiDelays {
    fn default() -> Self {
        Self {
            load_ms: 1000,
            save_ms: 1500,
            auth_ms: 1500,
            verify_ms: 2000,
            qr_ms: 500,
        }
    }
}

impl ApiDelays {
    /// All delays zero, for tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            load_ms: 0,
            save_ms: 0,
            auth_ms: 0,
            verify_ms: 0,
            qr_ms: 0,
        }
    }

    pub fn load(&self) -> Duration {
        Duration::from_millis(self.load_ms)
    }

    pub fn save(&self) -> Duration {
        Duration::from_millis(self.save_ms)
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn verify(&self) -> Duration {
        Duration::from_millis(self.verify_ms)
    }

    pub fn qr(&self) -> Duration {
        Duration::from_millis(self.qr_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Image endpoint for the QR generator.
    pub qr_endpoint: String,
    /// Base of shareable public card links.
    pub public_base_url: String,
    pub api: ApiDelays,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            api: ApiDelays::default(),
        }
    }
}

impl AppConfig {
    pub fn path_in(data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(CONFIG_FILE)
    }

    pub fn from_toml(text: &str) -> CardResult<Self> {
        toml::from_str(text).map_err(|e| CardError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> CardResult<String> {
        toml::to_string_pretty(self).map_err(|e| CardError::Config(e.to_string()))
    }

    /// Load from `path`, writing defaults if the file does not exist.
    ///
    /// A file that exists but does not parse is a `CardError::Config`.
    pub fn load_or_create(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, config.to_toml()?)?;
            tracing::info!(path = %path.display(), "Wrote default config");
            return Ok(config);
        }

        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
            .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Public link for a card owner.
    pub fn public_card_url(&self, username: &str) -> String {
        format!("{}/card/{}", self.public_base_url.trim_end_matches('/'), username)
    }

    /// Short public link for a card id.
    pub fn short_card_url(&self, card_id: &str) -> String {
        format!("{}/c/{}", self.public_base_url.trim_end_matches('/'), card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = AppConfig::path_in(dir.path());
        let config = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(AppConfig::load_or_create(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = AppConfig::from_toml("log_level = \"debug\"\n[api]\nsave_ms = 10\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api.save_ms, 10);
        assert_eq!(config.api.load_ms, 1000);
        assert_eq!(config.qr_endpoint, DEFAULT_QR_ENDPOINT);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = AppConfig::path_in(dir.path());
        std::fs::write(&path, "log_level = [").unwrap();

        let err = AppConfig::load_or_create(&path).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
        // The broken file is left for the user to fix
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "log_level = [");
    }

    #[test]
    fn test_data_dirs_share_a_base() {
        let shared = default_data_dir();
        let named = instance_data_dir("work");
        assert!(shared.ends_with("bizcard"));
        assert!(named.ends_with("bizcard-work"));
        assert_eq!(shared.parent(), named.parent());
    }

    #[test]
    fn test_public_urls() {
        let mut config = AppConfig::default();
        config.public_base_url = "https://cards.example/".into();
        assert_eq!(config.public_card_url("sara"), "https://cards.example/card/sara");
        assert_eq!(config.short_card_url("abc"), "https://cards.example/c/abc");
    }
}
