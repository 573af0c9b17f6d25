//! Configuration loading for searxng-mcp
//!
//! Settings are layered, highest priority first:
//! 1. Config file (`SEARXNG_MCP_CONFIG_PATH` env var, else `~/.config/searxng-mcp.toml`)
//! 2. Environment variable `SEARXNG_URL` (base URL only)
//! 3. Default values

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_COUNT: usize = 5;

/// Resolved configuration, immutable for the life of the process
#[derive(Debug, Clone)]
pub struct Config {
    /// SearXNG instance URL, joined directly with `/search` (no trailing
    /// slash handling)
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Result count used when a request does not specify one
    pub default_count: usize,
}

/// On-disk configuration shape
///
/// Every field is optional so a partial file still layers over the
/// env/default fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub default_count: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_count: DEFAULT_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from file and environment, falling back to defaults
    pub fn load() -> Result<Self> {
        let file = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            }
            _ => {
                tracing::info!("Config file not found, using defaults");
                FileConfig::default()
            }
        };

        Ok(Self::resolve(file, std::env::var("SEARXNG_URL").ok()))
    }

    /// Layer the three sources. A file `base_url` is trimmed; blank after
    /// trimming counts as unset and the env/default layers apply.
    pub fn resolve(file: FileConfig, env_url: Option<String>) -> Self {
        let base_url = file
            .base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .or(env_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            timeout_ms: file.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            default_count: file.default_count.unwrap_or(DEFAULT_COUNT),
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SEARXNG_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/searxng-mcp.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".config").join("searxng-mcp.toml");
            return Some(path);
        }

        None
    }
}
