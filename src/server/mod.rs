//! HTTP server for the contact book.
//!
//! Combines the contact and health routers into one axum application.

pub mod handlers;

pub use handlers::{contact_routes, health_routes, SearchType};

use crate::services::ContactService;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The contact book HTTP server.
pub struct ContactServer {
    router: Router,
}

impl ContactServer {
    /// Create a server that serves `service`.
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        let router = Router::new()
            .merge(health_routes())
            .merge(contact_routes(service))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }
}

/// Run the server on `addr` until Ctrl-C.
///
/// # Arguments
/// * `server` - The configured ContactServer instance
/// * `addr` - Address to bind
///
/// # Returns
/// An error if the listener cannot bind or the server fails
pub async fn run_server(server: ContactServer, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Contact book listening on http://{}", listener.local_addr()?);

    axum::serve(listener, server.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

