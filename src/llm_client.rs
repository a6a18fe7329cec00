//! Client traits the lessons and the routing workflow are written against

use crate::error::Result;
use crate::openrouter::{CompletionRequest, CompletionResponse, EmbeddingRequest, EmbeddingResponse};
use async_trait::async_trait;

/// Chat-completion client
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a completion request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the client type for debugging/logging
    fn client_type(&self) -> &str;

    /// Get the endpoint the client talks to
    fn endpoint(&self) -> &str;
}

/// Embedding client
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed a batch of texts
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse>;
}
