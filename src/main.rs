//! Contact Book - Main entry point

use anyhow::Result;
use contact_book::repositories::{ContactRepository, InMemoryContactRepository};
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{Config, ContactServer, LogFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }

    info!("Configuration loaded successfully");

    let addr = config.bind_addr()?;

    let contact_repo =
        Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;
    let contact_service =
        Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;

    let server = ContactServer::new(contact_service);
    info!("Contact book initialized");

    contact_book::server::run_server(server, addr).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
