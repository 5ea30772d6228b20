//! Codealign Server - HTTP API for the Codealign alignment service
//!
//! This crate wires the GitHub fetcher and the LLM analysis components
//! behind a single axum route, mapping library errors to transport
//! statuses.

pub mod api;
pub mod error;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{AppError, AppResult};
pub use state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the server until the shutdown future resolves
pub async fn run_with_shutdown<F>(
    listen_addr: &str,
    state: AppState,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    let addr: SocketAddr = listen_addr.parse()?;
    info!("Starting Codealign server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
