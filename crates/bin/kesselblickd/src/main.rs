//! # kesselblickd — kesselblick daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the tracing subscriber
//! - Open the `SQLite` store the collector writes (or the demo reader)
//! - Construct the application service, injecting the reader via its port
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use kesselblick_adapter_http_axum::router;
use kesselblick_adapter_http_axum::state::AppState;
use kesselblick_adapter_storage_sqlite_sqlx::SqliteSensorReader;
use kesselblick_adapter_virtual::VirtualSensorReader;
use kesselblick_app::ports::SensorReader;
use kesselblick_app::services::StatusService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    if config.demo.enabled {
        tracing::warn!("demo mode enabled — serving fixed readings");
        serve(VirtualSensorReader, &config.bind_addr()).await
    } else {
        let db = kesselblick_adapter_storage_sqlite_sqlx::Config {
            database_url: config.database_url().to_string(),
        }
        .build()
        .await?;
        let reader = SqliteSensorReader::new(db.pool().clone());
        serve(reader, &config.bind_addr()).await
    }
}

async fn serve<R>(reader: R, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>>
where
    R: SensorReader + Send + Sync + 'static,
{
    let state = AppState::new(StatusService::new(reader));
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(%bind_addr, "kesselblickd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
    tracing::info!("shutting down");
}
