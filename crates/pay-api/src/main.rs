//! # Mode Checkout Server
//!
//! HTTP front-end for the mock checkout dispatcher.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export PORT=8080
//! export PAY_MOCK_TXN_IDS=sequential
//!
//! # Run the server
//! checkout-server
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment modes: {:?}", state.checkout.modes());

    let app = routes::create_router(state);

    info!("Mode checkout v{} starting on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Modes: GET http://{}/api/v1/modes", addr);
        info!("Checkout: POST http://{}/api/v1/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
