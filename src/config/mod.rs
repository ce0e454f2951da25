//! Application configuration
//!
//! Values come from the environment (a `.env` file is loaded first by `main`).
//! When `HASSIO_CONFIG` points at a TOML file, that file supplies the base
//! values and environment variables override them:
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8787
//! provider = "workers-ai"
//! model = "@cf/meta/llama-3.1-8b-instruct"
//! cloudflare_account_id = "..."
//! assets_dir = "./public"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Inference backend: "workers-ai" or "openai"
    pub provider: String,
    pub model: String,
    pub cloudflare_account_id: Option<String>,
    pub cloudflare_api_token: Option<String>,
    /// Overrides the provider's default API base URL
    pub inference_url: Option<String>,
    pub inference_api_key: Option<String>,
    /// Directory holding the bundled static assets (e.g. `globals.css`)
    pub assets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8787,
            provider: "workers-ai".into(),
            model: DEFAULT_MODEL.into(),
            cloudflare_account_id: None,
            cloudflare_api_token: None,
            inference_url: None,
            inference_api_key: None,
            assets_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var("HASSIO_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply variables from `lookup` on top of `self`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
        }
        if let Some(provider) = lookup("HASSIO_PROVIDER") {
            self.provider = provider;
        }
        if let Some(model) = lookup("HASSIO_MODEL") {
            self.model = model;
        }
        if let Some(v) = lookup("CLOUDFLARE_ACCOUNT_ID") {
            self.cloudflare_account_id = Some(v);
        }
        if let Some(v) = lookup("CLOUDFLARE_API_TOKEN") {
            self.cloudflare_api_token = Some(v);
        }
        if let Some(v) = lookup("HASSIO_INFERENCE_URL") {
            self.inference_url = Some(v);
        }
        if let Some(v) = lookup("HASSIO_INFERENCE_API_KEY") {
            self.inference_api_key = Some(v);
        }
        if let Some(v) = lookup("HASSIO_ASSETS_DIR") {
            self.assets_dir = Some(PathBuf::from(v));
        }
        Ok(self)
    }
}
