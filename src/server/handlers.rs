//! Route handlers

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::orchestrator::SPECIALISTS;
use crate::server::error::ApiError;
use crate::server::types::{ChatRequest, ChatResponse};
use crate::server::AppState;

/// GET / - service banner and the available agents
pub async fn root() -> Json<Value> {
    let agents: Vec<String> = SPECIALISTS.iter().map(|d| d.display_name()).collect();
    Json(json!({
        "message": "🤖 Multi-Agent Chatbot API",
        "agents": agents,
        "docs": "/docs",
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// POST /chat - route the message through the supervisor workflow
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    match state.workflow.run(&request.message).await {
        Ok(outcome) => Ok(Json(ChatResponse::from(outcome))),
        Err(e) if e.is_client_error() => {
            tracing::debug!("rejected chat request: {}", e);
            Err(e.into())
        }
        Err(e) => {
            tracing::error!("chat request failed: {}", e);
            Err(e.into())
        }
    }
}
