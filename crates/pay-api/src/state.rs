//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the checkout dispatcher and server configuration.

use pay_core::Checkout;
use pay_mock::{mock_checkout_from_config, MockConfig};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout dispatcher
    pub checkout: Arc<Checkout>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the mock handlers configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let mock_config = MockConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to configure payment handlers: {}", e))?;
        tracing::info!("Transaction ids: {:?}", mock_config.id_strategy);

        Ok(Self::with_checkout(mock_checkout_from_config(&mock_config), config))
    }

    /// Create state around an existing dispatcher
    pub fn with_checkout(checkout: Checkout, config: AppConfig) -> Self {
        Self {
            checkout: Arc::new(checkout),
            config,
        }
    }
}
