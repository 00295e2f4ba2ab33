//! Configuration file parsing for the Router.
//!
//! One TOML file configures the HTTP service and the CLI: bind address,
//! the safety gate, the classifier, SSO endpoints and the resource catalog.

use crate::catalog::{ResourceCatalog, Resource};
use crate::classifier::ClassifierConfig;
use crate::deep_link::SsoConfig;
use helpdesk_gatekeeper::{GateConfig, GatekeeperError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid `[gate]` settings
    #[error("Invalid gate configuration: {0}")]
    Gate(#[from] GatekeeperError),

    /// Two catalog entries share an id
    #[error("Duplicate resource id: {0}")]
    DuplicateResource(String),

    /// Any other invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Safety gate settings
    pub gate: GateConfig,

    /// Classifier keywords and confidences
    pub classifier: ClassifierConfig,

    /// SSO endpoints
    pub sso: SsoConfig,

    /// Catalog entries; the built-in catalog is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            gate: GateConfig::default(),
            classifier: ClassifierConfig::default(),
            sso: SsoConfig::default(),
            resources: None,
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }

        self.gate.validate()?;

        for (name, value) in [
            ("classifier.match_confidence", self.classifier.match_confidence),
            ("classifier.default_confidence", self.classifier.default_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} {} is outside [0.0, 1.0]",
                    name, value
                )));
            }
        }

        if let Some(resources) = &self.resources {
            ResourceCatalog::new(resources.clone())?;
        }

        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
