//! OpenRouter API client for chat completions and embeddings

use crate::config::OpenRouterConfig;
use crate::error::{Error, Result};
use crate::llm_client::{EmbeddingClient, LlmClient};
use crate::types::TokenUsage;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

/// OpenRouter API client
pub struct OpenRouterClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenRouterConfig::from_env()?;
        Self::new(config)
    }

    /// Create a new OpenRouter client with the given configuration
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Send a completion request
    pub async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let url = self.url("chat/completions");
        tracing::debug!(model = %request.model, messages = request.messages.len(), "POST {}", url);

        let response = self.authorized(self.client.post(&url)).json(&request).send().await?;
        let response = Self::check_status(response, "Request").await?;

        let completion: CompletionResponse = response.json().await?;
        Ok(completion)
    }

    /// Send an embeddings request
    pub async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        let url = self.url("embeddings");
        tracing::debug!(model = %request.model, inputs = request.input.len(), "POST {}", url);

        let response = self.authorized(self.client.post(&url)).json(&request).send().await?;
        let response = Self::check_status(response, "Embedding request").await?;

        let embeddings: EmbeddingResponse = response.json().await?;
        Ok(embeddings)
    }

    /// Get the configuration
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.as_str().trim_end_matches('/'), path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_name)
    }

    async fn check_status(response: Response, what: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        Err(Error::openrouter(format!(
            "{} failed with status {}: {}",
            what, status, error_text
        )))
    }
}

/// Completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Messages in the conversation
    pub messages: Vec<Message>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens for completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Content of the system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    /// Content of the last user message, if any
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique identifier
    #[serde(default)]
    pub id: String,
    /// Model used
    #[serde(default)]
    pub model: String,
    /// Choices
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Text of the first choice
    pub fn text(&self) -> Result<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                Error::empty_response(format!("completion {} contained no message content", self.id))
            })
    }

    /// Token usage, zero when the provider omitted it
    pub fn token_usage(&self) -> TokenUsage {
        self.usage.clone().map(TokenUsage::from).unwrap_or_default()
    }
}

/// Choice in completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of the choice
    #[serde(default)]
    pub index: u32,
    /// Message content
    pub message: ResponseMessage,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Role of the message sender
    pub role: Role,
    /// Content, absent for some refusals
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub prompt_tokens: u64,
    /// Completion tokens
    pub completion_tokens: u64,
    /// Total tokens
    pub total_tokens: u64,
}

impl From<Usage> for TokenUsage {
    fn from(usage: Usage) -> Self {
        TokenUsage::new(usage.prompt_tokens, usage.completion_tokens)
    }
}

/// Embeddings request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingRequest {
    /// Embedding model identifier
    pub model: String,
    /// Texts to embed
    pub input: Vec<String>,
}

impl EmbeddingRequest {
    /// Create a new embeddings request
    pub fn new(model: impl Into<String>, input: Vec<String>) -> Self {
        Self {
            model: model.into(),
            input,
        }
    }
}

/// Embeddings response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// One entry per input text
    pub data: Vec<EmbeddingData>,
    /// Model used
    #[serde(default)]
    pub model: String,
}

impl EmbeddingResponse {
    /// Vectors in input order
    pub fn into_vectors(mut self) -> Vec<Vec<f32>> {
        self.data.sort_by_key(|d| d.index);
        self.data.into_iter().map(|d| d.embedding).collect()
    }
}

/// A single embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingData {
    /// Position of the input this vector belongs to
    #[serde(default)]
    pub index: usize,
    /// The vector itself
    pub embedding: Vec<f32>,
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        OpenRouterClient::complete(self, request).await
    }

    fn client_type(&self) -> &str {
        "openrouter"
    }

    fn endpoint(&self) -> &str {
        self.config.base_url.as_str()
    }
}

#[async_trait]
impl EmbeddingClient for OpenRouterClient {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        OpenRouterClient::embed(self, request).await
    }
}
