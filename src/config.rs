//! Configuration file support for license-inventory.
//!
//! Provides YAML-based configuration through `license-inventory.config.yml`
//! files: registry and hosting endpoints, the source-URL heuristic, and the
//! name of the environment variable that holds the API token.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::network::{
    DEFAULT_HOSTING_API_URL, DEFAULT_REGISTRY_URL, DEFAULT_TOKEN_ENV,
};
use crate::inventory::policies::{SourceUrlPolicy, DEFAULT_HOSTING_HOST, DEFAULT_SOURCE_URL_LABELS};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub hosting_api_url: Option<String>,
    pub hosting_host: Option<String>,
    pub source_url_labels: Option<Vec<String>>,
    pub token_env: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying defaults to an optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub registry_url: String,
    pub hosting_api_url: String,
    pub hosting_host: String,
    pub source_url_labels: Vec<String>,
    pub token_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            hosting_api_url: DEFAULT_HOSTING_API_URL.to_string(),
            hosting_host: DEFAULT_HOSTING_HOST.to_string(),
            source_url_labels: DEFAULT_SOURCE_URL_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl Settings {
    /// Merges a config file over the defaults
    pub fn from_config(config: Option<ConfigFile>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            registry_url: config.registry_url.unwrap_or(defaults.registry_url),
            hosting_api_url: config.hosting_api_url.unwrap_or(defaults.hosting_api_url),
            hosting_host: config.hosting_host.unwrap_or(defaults.hosting_host),
            source_url_labels: config
                .source_url_labels
                .unwrap_or(defaults.source_url_labels),
            token_env: config.token_env.unwrap_or(defaults.token_env),
        }
    }

    /// Builds the source-URL heuristic described by these settings
    pub fn source_url_policy(&self) -> Result<SourceUrlPolicy> {
        SourceUrlPolicy::new(self.source_url_labels.clone(), &self.hosting_host)
    }

    /// Reads the API token from the configured environment variable
    pub fn api_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (key, value) in [
        ("registry_url", &config.registry_url),
        ("hosting_api_url", &config.hosting_api_url),
    ] {
        if let Some(url) = value {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!(
                    "Invalid config: {} must be an http(s) URL, got '{}'.\n\n\
                     💡 Hint: Use a full base URL such as \"https://pypi.org\".",
                    key,
                    url
                );
            }
        }
    }

    if let Some(ref host) = config.hosting_host {
        if host.trim().is_empty() || host.contains('/') {
            bail!(
                "Invalid config: hosting_host must be a bare domain such as \"github.com\"."
            );
        }
    }

    if let Some(ref labels) = config.source_url_labels {
        if labels.is_empty() {
            bail!(
                "Invalid config: source_url_labels must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default labels."
            );
        }
        for (i, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                bail!(
                    "Invalid config: source_url_labels[{}] must not be empty.",
                    i
                );
            }
        }
    }

    if let Some(ref token_env) = config.token_env {
        if token_env.trim().is_empty() {
            bail!("Invalid config: token_env must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
}
