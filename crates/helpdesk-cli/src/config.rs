//! Configuration loading for the CLI.
//!
//! The CLI reads the same TOML file as the router service.

use crate::error::Result;
use helpdesk_router::config::RouterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Load the service configuration, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<RouterConfig> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Ok(RouterConfig::from_file(path)?)
        }
        None => Ok(RouterConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    #[test]
    fn test_default_without_path() {
        let config = load(None).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gate]\nhigh_threshold = 0.9").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.gate.high_threshold, 0.9);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_port = \"not a number\"").unwrap();

        assert!(matches!(load(Some(file.path())), Err(CliError::Config(_))));
    }
}
