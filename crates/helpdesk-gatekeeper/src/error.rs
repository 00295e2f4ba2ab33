//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur while setting up the gatekeeper
///
/// Validation itself never fails; only configuration can be rejected.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Failed to read a configuration file
    #[error("Failed to read gate config: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse gate config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}
