//! Error types for the switchboard

use thiserror::Error;

/// Result type alias for switchboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the switchboard
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success response from the OpenRouter API
    #[error("OpenRouter API error: {0}")]
    OpenRouter(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model answered without any usable content
    #[error("Empty response from model: {0}")]
    EmptyResponse(String),

    /// A prompt template referenced a variable that was not supplied
    #[error("Template error: {template}: missing variable '{variable}'")]
    Template { template: String, variable: String },

    /// Embedding vectors could not be compared or produced
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Tracing subscriber could not be installed
    #[error("Tracing error: {0}")]
    Tracing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an OpenRouter error
    pub fn openrouter(msg: impl Into<String>) -> Self {
        Self::OpenRouter(msg.into())
    }

    /// Create an empty-response error
    pub fn empty_response(msg: impl Into<String>) -> Self {
        Self::EmptyResponse(msg.into())
    }

    /// Create a template error for a missing variable
    pub fn template(template: impl Into<String>, variable: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            variable: variable.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error was caused by the caller rather than by an upstream failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
