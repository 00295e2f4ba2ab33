//! Helpdesk Router
//!
//! Query classification, deep linking into enterprise systems and the
//! supervisor that gates every specialist answer. Provides the HTTP
//! service in front of the safety gate.

#![warn(missing_docs)]

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod deep_link;
pub mod handlers;
pub mod keywords;
pub mod redirect;
pub mod reply;
pub mod supervisor;

use config::RouterConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use supervisor::Supervisor;
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// RUST_LOG overrides the default `info` level. Returns `false` when a
/// subscriber was already installed, for example by an embedding binary.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => true,
        Err(e) => {
            debug!("Keeping existing tracing subscriber: {}", e);
            false
        }
    }
}

/// Start the Router HTTP server
///
/// Builds the supervisor from configuration and starts the axum server.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    init_tracing();

    info!("Starting Helpdesk Router");
    info!("Bind address: {}", config.bind_addr());

    let supervisor = Supervisor::from_config(&config)?;
    info!("Catalog resources: {}", supervisor.catalog().len());
    info!(
        "Gate thresholds: high={} medium={} low={} hallucination={}",
        config.gate.high_threshold,
        config.gate.medium_threshold,
        config.gate.low_threshold,
        config.gate.hallucination_threshold
    );

    // Create application state
    let state = AppState {
        supervisor: Arc::new(supervisor),
    };

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
