//! Request and response bodies for the chat API

use crate::orchestrator::WorkflowOutcome;
use serde::{Deserialize, Serialize};

/// `POST /chat` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message to route
    pub message: String,
}

/// `POST /chat` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Upper-case label of the specialist that answered
    pub agent_used: String,
    /// Glyph-prefixed answer
    pub response: String,
}

impl From<WorkflowOutcome> for ChatResponse {
    fn from(outcome: WorkflowOutcome) -> Self {
        Self {
            agent_used: outcome.agent_used.to_string(),
            response: outcome.response,
        }
    }
}
