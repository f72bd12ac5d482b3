//! Orders API server binary

use anyhow::Result;
use orders::config::{LoggingConfig, ServiceConfig};
use orders::server::ServerBuilder;
use orders::storage::InMemoryOrderStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting orders-api with in-memory store"
    );

    ServerBuilder::new()
        .with_store(InMemoryOrderStore::new())
        .serve(&config.bind_address())
        .await
}

/// Install the fmt subscriber; `RUST_LOG` wins over the configured filter
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
