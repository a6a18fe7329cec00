//! Supervisor: classifies a message into a routing label

use crate::config::ModelConfig;
use crate::error::Result;
use crate::llm_client::LlmClient;
use crate::orchestrator::label::Classification;
use crate::prompt::PromptTemplate;
use crate::types::TokenUsage;
use std::sync::Arc;

/// Instruction constraining the model to a single label
pub const SUPERVISOR_PROMPT: &str = "You are a supervisor managing a team of specialists.

Your team:
- SCIENTIST: Handles factual questions, science, research, explanations of how things work
- CREATIVE: Handles stories, poetry, creative writing, jokes, imaginative content
- CODER: Handles programming questions, code writing, debugging, technical implementations

Analyze the user's message and decide which specialist should handle it.
Respond with ONLY one word: SCIENTIST, CREATIVE, or CODER";

/// Classifier in front of the specialists
#[derive(Clone)]
pub struct Supervisor {
    template: PromptTemplate,
    model: ModelConfig,
    client: Arc<dyn LlmClient>,
}

impl Supervisor {
    /// Create a supervisor
    pub fn new(client: Arc<dyn LlmClient>, model: ModelConfig) -> Self {
        Self {
            template: PromptTemplate::passthrough("supervisor", SUPERVISOR_PROMPT),
            model,
            client,
        }
    }

    /// Classify `message`.
    ///
    /// Output outside the label set is not an error: it comes back as
    /// [`Classification::Fallback`]. Transport and API failures are returned.
    pub async fn classify(&self, message: &str) -> Result<(Classification, TokenUsage)> {
        let request = self.model.request(self.template.render_input(message)?);
        let response = self.client.complete(request).await?;
        let classification = Classification::from_model_output(&response.text()?);

        match &classification {
            Classification::Recognized(label) => {
                tracing::info!(label = %label, "supervisor decision: route to {}", label);
            }
            Classification::Fallback { raw } => {
                tracing::warn!(
                    raw = %raw,
                    "supervisor answered outside the label set, routing to {}",
                    classification.label()
                );
            }
        }

        Ok((classification, response.token_usage()))
    }
}
