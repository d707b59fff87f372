//! Configuration loading.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag; must exist)
//! 2. `~/.evalboard/config.toml` (user)
//! 3. built-in defaults
//!
//! Every section is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{ExplanationCatalog, ModelExplanation};
use crate::client::DEFAULT_ENDPOINT;
use crate::render::Layout;
use crate::store::ErrorPolicy;
use crate::{EvalboardError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Extra or replacement model explanations, merged over the built-in ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanations: Vec<ModelExplanation>,
}

/// Results endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL of the results endpoint (default: http://127.0.0.1:8000/api/models).
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds. Unset or `0` means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            request_timeout_secs: None,
        }
    }
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.evalboard/config.toml`
    /// 3. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EvalboardError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            EvalboardError::Configuration(msg) => {
                EvalboardError::Configuration(format!("{msg} (in {path:?})"))
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| EvalboardError::Configuration(format!("Failed to parse config: {e}")))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            EvalboardError::Configuration(format!("Failed to serialize config: {e}"))
        })
    }

    /// Built-in explanations with the configured ones merged on top.
    pub fn catalog(&self) -> ExplanationCatalog {
        let mut catalog = ExplanationCatalog::builtin();
        catalog.extend(self.explanations.iter().cloned());
        catalog
    }

    /// Resolve the config file path; `None` means use defaults.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(EvalboardError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".evalboard").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        Ok(None)
    }
}
