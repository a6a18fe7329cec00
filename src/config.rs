//! Configuration types for the switchboard

use crate::error::{Error, Result};
use crate::openrouter::{CompletionRequest, Message};
use dotenvy::dotenv;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default OpenRouter endpoint
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Referer OpenRouter uses to attribute requests
pub const DEFAULT_REFERER: &str = "http://localhost:3000";

/// Model configuration for a single prompt step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Model identifier (e.g., "qwen/qwen-2.5-72b-instruct")
    pub model: String,
    /// Temperature for sampling (0.0-2.0)
    pub temperature: f32,
    /// Maximum tokens for completion
    pub max_tokens: Option<u32>,
}

impl ModelConfig {
    /// Create a new model configuration
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Build a completion request for these settings
    pub fn request(&self, messages: Vec<Message>) -> CompletionRequest {
        let request =
            CompletionRequest::new(&self.model, messages).with_temperature(self.temperature);
        match self.max_tokens {
            Some(max_tokens) => request.with_max_tokens(max_tokens),
            None => request,
        }
    }
}

/// OpenRouter client configuration
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// API key (loaded from environment variable)
    pub api_key: SecretString,
    /// Base URL for the OpenAI-compatible API
    pub base_url: Url,
    /// Default chat model
    pub default_model: String,
    /// Default embedding model
    pub embedding_model: String,
    /// Sent as `HTTP-Referer`
    pub referer: String,
    /// Request timeout
    pub timeout: Duration,
    /// App name for OpenRouter tracking
    pub app_name: String,
}

impl OpenRouterConfig {
    /// Create a new OpenRouter configuration from the process environment
    pub fn from_env() -> Result<Self> {
        // Load .env if present so local development picks up OPENROUTER_API_KEY
        let _ = dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENROUTER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("OPENROUTER_API_KEY environment variable not set"))?;

        let base_url = match lookup("OPENROUTER_BASE_URL") {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| Error::config(format!("Invalid OPENROUTER_BASE_URL '{}': {}", raw, e)))?,
            None => default_base_url(),
        };

        let mut config = Self::new(api_key).with_base_url(base_url);
        if let Some(model) = lookup("OPENROUTER_MODEL") {
            config = config.with_default_model(model);
        }
        if let Some(model) = lookup("OPENROUTER_EMBEDDING_MODEL") {
            config = config.with_embedding_model(model);
        }
        if let Some(referer) = lookup("OPENROUTER_REFERER") {
            config.referer = referer;
        }

        Ok(config)
    }

    /// Create a new OpenRouter configuration with a specific API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: default_base_url(),
            default_model: presets::QWEN_72B.to_string(),
            embedding_model: presets::EMBEDDING_SMALL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: Duration::from_secs(30),
            app_name: "Agent Switchboard".to_string(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the default chat model
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the app name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Get the API key as a string
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Model settings for the default chat model
    pub fn default_model_config(&self) -> ModelConfig {
        ModelConfig::new(&self.default_model)
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("embedding_model", &self.embedding_model)
            .field("referer", &self.referer)
            .field("timeout", &self.timeout)
            .field("app_name", &self.app_name)
            .finish()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid OpenRouter URL")
}

/// Listen address for the chat API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl ServerConfig {
    /// Create a server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 8000)
    }
}

/// Model identifiers used by the lessons
pub mod presets {
    /// Routing workflow default (free tier on OpenRouter)
    pub const QWEN_72B: &str = "qwen/qwen-2.5-72b-instruct";

    /// Prompt-chain lesson model
    pub const GPT35_TURBO: &str = "openai/gpt-3.5-turbo";

    /// Embedding model
    pub const EMBEDDING_SMALL: &str = "openai/text-embedding-3-small";
}
