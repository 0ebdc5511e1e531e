use crate::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_UPLOAD_DELAY_MS: u64 = 1000;
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;
const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub const KEYS: &[&str] = &["upload-delay-ms", "upload-timeout-secs", "quota-bytes"];

/// Configuration for the desk, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DeskConfig {
    /// Simulated latency of the mock uploader
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,

    /// How long to wait for an upload before giving up
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,

    /// Largest value a single storage key may hold
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

fn default_upload_delay_ms() -> u64 {
    DEFAULT_UPLOAD_DELAY_MS
}

fn default_upload_timeout_secs() -> u64 {
    DEFAULT_UPLOAD_TIMEOUT_SECS
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            upload_timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl DeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeskError::Io)?;
        let config: DeskConfig =
            serde_json::from_str(&content).map_err(DeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeskError::Serialization)?;
        fs::write(config_path, content).map_err(DeskError::Io)?;
        Ok(())
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "upload-delay-ms" => Some(self.upload_delay_ms.to_string()),
            "upload-timeout-secs" => Some(self.upload_timeout_secs.to_string()),
            "quota-bytes" => Some(self.quota_bytes.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |_| DeskError::Config(format!("Invalid value for {}: {}", key, value));
        match key {
            "upload-delay-ms" => self.upload_delay_ms = value.parse().map_err(invalid)?,
            "upload-timeout-secs" => {
                let secs: u64 = value.parse().map_err(invalid)?;
                if secs == 0 {
                    return Err(DeskError::Config(
                        "upload-timeout-secs must be at least 1".to_string(),
                    ));
                }
                self.upload_timeout_secs = secs;
            }
            "quota-bytes" => self.quota_bytes = value.parse().map_err(invalid)?,
            other => return Err(DeskError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
