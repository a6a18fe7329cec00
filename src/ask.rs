//! Direct completion: one request, no templates, no parsing beyond the first choice

use crate::config::ModelConfig;
use crate::error::Result;
use crate::llm_client::LlmClient;
use crate::openrouter::Message;

/// System prompt for direct questions
pub const ASSISTANT_PROMPT: &str = "You are a helpful assistant. Be concise.";

/// Token limit for direct questions
pub const MAX_TOKENS: u32 = 500;

/// Ask a single question with the given model
pub async fn ask_with_model(client: &dyn LlmClient, prompt: &str, model: &str) -> Result<String> {
    let request = ModelConfig::new(model)
        .with_temperature(0.7)
        .with_max_tokens(MAX_TOKENS)
        .request(vec![Message::system(ASSISTANT_PROMPT), Message::user(prompt)]);

    client.complete(request).await?.text()
}

/// Ask a single question with the routing workflow's default model
pub async fn ask(client: &dyn LlmClient, prompt: &str) -> Result<String> {
    ask_with_model(client, prompt, crate::config::presets::QWEN_72B).await
}
