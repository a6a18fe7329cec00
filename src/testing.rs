//! In-memory clients for unit tests

use crate::error::{Error, Result};
use crate::llm_client::{EmbeddingClient, LlmClient};
use crate::openrouter::{
    Choice, CompletionRequest, CompletionResponse, EmbeddingData, EmbeddingRequest,
    EmbeddingResponse, ResponseMessage, Role, Usage,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// One scripted answer
pub(crate) enum Reply {
    Text(String),
    Fail(String),
}

impl Reply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub(crate) fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }
}

/// Answers completions from a script and records every request
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

pub(crate) fn completion(text: &str) -> CompletionResponse {
    CompletionResponse {
        id: "gen-test".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Role::Assistant,
                content: Some(text.to_string()),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().push(request);
        match self.replies.lock().pop_front() {
            Some(Reply::Text(text)) => Ok(completion(&text)),
            Some(Reply::Fail(message)) => Err(Error::openrouter(message)),
            None => Err(Error::openrouter("scripted client has no replies left")),
        }
    }

    fn client_type(&self) -> &str {
        "scripted"
    }

    fn endpoint(&self) -> &str {
        "memory://scripted"
    }
}

/// Looks vectors up by exact text
pub(crate) struct TableEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    batches: Mutex<Vec<EmbeddingRequest>>,
}

impl TableEmbedder {
    pub(crate) fn new(entries: Vec<(&str, Vec<f32>)>) -> Self {
        Self {
            vectors: entries
                .into_iter()
                .map(|(text, vector)| (text.to_string(), vector))
                .collect(),
            batches: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn batches(&self) -> Vec<EmbeddingRequest> {
        self.batches.lock().clone()
    }
}

#[async_trait]
impl EmbeddingClient for TableEmbedder {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        let mut data = Vec::with_capacity(request.input.len());
        for (index, text) in request.input.iter().enumerate() {
            let embedding = self
                .vectors
                .get(text)
                .cloned()
                .ok_or_else(|| Error::openrouter(format!("no vector for '{}'", text)))?;
            data.push(EmbeddingData { index, embedding });
        }
        let model = request.model.clone();
        self.batches.lock().push(request);
        // Reverse to make sure callers reorder by index
        data.reverse();
        Ok(EmbeddingResponse { data, model })
    }
}
