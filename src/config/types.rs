use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - not serialized
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where the Pressroom backend lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Tenant used when a call does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            api_key: None,
            org_id: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level).map_err(|_| {
            ConfigError::Validation(format!(
                "unknown log level '{}' (expected trace, debug, info, warn or error)",
                self.level
            ))
        })
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.backend.url).map_err(|e| {
            ConfigError::Validation(format!("backend url '{}': {e}", self.backend.url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "backend url '{}' must use http or https",
                self.backend.url
            )));
        }

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend timeout_secs must be > 0".into(),
            ));
        }

        if let Some(key) = &self.backend.api_key
            && !key.chars().all(|c| c.is_ascii_graphic())
        {
            return Err(ConfigError::Validation(
                "backend api_key may only contain visible ASCII characters".into(),
            ));
        }

        self.log.tracing_level()?;
        Ok(())
    }

    /// API key suitable for display: first four characters, rest masked.
    pub fn masked_api_key(&self) -> String {
        match self.backend.api_key.as_deref() {
            None | Some("") => "(none)".into(),
            Some(key) => {
                let visible: String = key.chars().take(4).collect();
                format!("{visible}****")
            }
        }
    }
}
