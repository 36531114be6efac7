use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration.
///
/// Loaded from the YAML file named by `TRELLIS_CONFIG` when set; the `LISTEN`
/// environment variable overrides the listen address either way.
///
/// ```yaml
/// server:
///   listen_addr: "0.0.0.0:8080"
/// log_level: debug
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, falling back to defaults if the file is missing
    /// or invalid.
    pub fn load() -> Self {
        let mut cfg = match std::env::var("TRELLIS_CONFIG") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path, error = %e, "Falling back to default config");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        cfg
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("Invalid config")
    }
}
