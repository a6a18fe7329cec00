//! HTTP surface for the supervisor workflow
//!
//! - `GET /` - banner with the available agents
//! - `GET /health` - liveness
//! - `POST /chat` - `{"message"}` to `{"agent_used", "response"}`

pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;
pub use types::{ChatRequest, ChatResponse};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::orchestrator::SupervisorWorkflow;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Workflow built once at startup
    pub workflow: Arc<SupervisorWorkflow>,
}

impl AppState {
    /// Wrap a workflow for sharing across handlers
    pub fn new(workflow: SupervisorWorkflow) -> Self {
        Self {
            workflow: Arc::new(workflow),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Agent switchboard listening on http://{}", local_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
