//! # Agent Switchboard
//!
//! LLM lessons over OpenRouter, ending in a supervisor that routes each
//! message to one of three specialist agents.
//!
//! ## Features
//!
//! - **Direct calls**: one system prompt, one user prompt, one answer
//! - **Prompt chains**: `{variable}` templates piped into the model, step after step
//! - **Embeddings**: cosine similarity and small semantic search
//! - **Supervisor routing**: classify as SCIENTIST, CREATIVE or CODER, then answer once
//! - **Chat API**: `POST /chat` over axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agent_switchboard::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenRouterClient::from_env()?;
//!     let model = client.config().default_model_config();
//!
//!     let workflow = SupervisorWorkflow::new(Arc::new(client), model);
//!     let outcome = workflow.run("Write a poem about the moon").await?;
//!     println!("[{}] {}", outcome.agent_used, outcome.response);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ask;
pub mod chain;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod llm_client;
pub mod openrouter;
pub mod orchestrator;
pub mod prompt;
pub mod server;
pub mod tracing_ext;
pub mod types;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use ask::{ask, ask_with_model};
pub use chain::{explain_simply, Chain, StudyGuide, StudyGuideChain};
pub use config::{presets, ModelConfig, OpenRouterConfig, ServerConfig};
pub use embeddings::{
    category_similarity, cosine_similarity, similarity_bar, CategorySimilarity, Embedder,
    SearchHit, SemanticIndex,
};
pub use error::{Error, Result};
pub use llm_client::{EmbeddingClient, LlmClient};
pub use openrouter::{CompletionRequest, CompletionResponse, Message, OpenRouterClient, Role};
pub use orchestrator::{Classification, RoutingLabel, SupervisorWorkflow, WorkflowOutcome};
pub use prompt::PromptTemplate;
pub use tracing_ext::{init_tracing, LogFormat};
pub use types::{RunId, TokenUsage};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{presets, ModelConfig, OpenRouterConfig};
    pub use crate::error::{Error, Result};
    pub use crate::llm_client::{EmbeddingClient, LlmClient};
    pub use crate::openrouter::OpenRouterClient;
    pub use crate::orchestrator::{RoutingLabel, SupervisorWorkflow};
    pub use crate::tracing_ext::{init_tracing, LogFormat};
    pub use crate::types::*;
}
