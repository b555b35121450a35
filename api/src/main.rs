//! JWT Pizza mock backend
//!
//! Stands in for the pizza service during browser-driven end-to-end runs.
//! Answers `/api/auth`, `/api/user*`, `/api/franchise*` and `/api/order*`
//! from in-memory state that lives as long as the process.
//! Uses hexagonal (ports & adapters) architecture like the real service.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod test_utils;


use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jwt_pizza_mock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting JWT Pizza mock backend...");

    // Load configuration
    let config = Config::from_env();

    let state = state::create_initial_state(&config).await?;
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
