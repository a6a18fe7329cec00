//! Supervisor workflow: classify, route, then answer with exactly one specialist
//!
//! ```text
//! START -> supervisor -> { scientist | creative | coder } -> END
//! ```

use crate::config::ModelConfig;
use crate::error::{Error, Result};
use crate::llm_client::LlmClient;
use crate::openrouter::Message;
use crate::orchestrator::label::RoutingLabel;
use crate::orchestrator::router::{route, SpecialistId};
use crate::orchestrator::specialist::{self, Specialist};
use crate::orchestrator::state::WorkflowState;
use crate::orchestrator::supervisor::Supervisor;
use crate::tracing_ext::{StepKind, StepRecord, StepTimer};
use crate::types::TokenUsage;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Result of one workflow run
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutcome {
    /// Label of the specialist that answered
    pub agent_used: RoutingLabel,
    /// Glyph-prefixed specialist response
    pub response: String,
    /// Whether the classifier's answer was replaced by the default label
    pub fallback_used: bool,
    /// Tokens used by both steps
    pub usage: TokenUsage,
    /// Executed steps, in order
    pub steps: Vec<StepRecord>,
    /// Wall time of the whole run
    pub elapsed_ms: u64,
}

/// The routing workflow, built once and shared across requests
#[derive(Clone)]
pub struct SupervisorWorkflow {
    supervisor: Supervisor,
    scientist: Specialist,
    creative: Specialist,
    coder: Specialist,
}

impl SupervisorWorkflow {
    /// Build the supervisor and all three specialists on one client and model
    pub fn new(client: Arc<dyn LlmClient>, model: ModelConfig) -> Self {
        let build = |id| Specialist::new(specialist::definition(id), client.clone(), model.clone());
        Self {
            scientist: build(SpecialistId::Scientist),
            creative: build(SpecialistId::Creative),
            coder: build(SpecialistId::Coder),
            supervisor: Supervisor::new(client.clone(), model),
        }
    }

    /// The specialist behind a node
    pub fn specialist(&self, id: SpecialistId) -> &Specialist {
        match id {
            SpecialistId::Scientist => &self.scientist,
            SpecialistId::Creative => &self.creative,
            SpecialistId::Coder => &self.coder,
        }
    }

    /// Run the workflow for one user message.
    ///
    /// Blank input is rejected before any model call. Any step failure aborts
    /// the run, including a specialist failure after a successful
    /// classification.
    pub async fn run(&self, message: &str) -> Result<WorkflowOutcome> {
        if message.trim().is_empty() {
            return Err(Error::invalid_input("Message cannot be empty"));
        }

        let state = WorkflowState::new(message);
        let span = tracing::info_span!("workflow", run_id = %state.run_id());
        self.execute(state).instrument(span).await
    }

    async fn execute(&self, mut state: WorkflowState) -> Result<WorkflowOutcome> {
        let start = Instant::now();
        let input = state.last_user_text().unwrap_or_default().to_string();

        let timer = StepTimer::start(StepKind::Supervisor, "supervisor");
        let (classification, usage) = self.supervisor.classify(&input).await?;
        state.record_step(timer.finish(usage));
        state.set_routing_label(classification.label());

        let id = route(state.routing_label());
        let specialist = self.specialist(id);
        tracing::debug!(node = %id, "dispatching to specialist");

        let timer = StepTimer::start(StepKind::Specialist, id.as_str());
        let (raw, usage) = specialist.respond(&input).await?;
        state.record_step(timer.finish(usage));

        let definition = specialist.definition();
        state.set_final_text(definition.decorate(&raw));
        state.push_message(Message::assistant(raw));

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let usage = state.usage();
        let response = state.final_text().unwrap_or_default().to_string();
        tracing::info!(
            agent = %definition.label,
            total_tokens = usage.total_tokens,
            elapsed_ms,
            "workflow complete"
        );

        Ok(WorkflowOutcome {
            agent_used: definition.label,
            response,
            fallback_used: classification.is_fallback(),
            usage,
            steps: state.into_steps(),
            elapsed_ms,
        })
    }
}

impl std::fmt::Debug for SupervisorWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupervisorWorkflow")
            .field("scientist", &self.scientist)
            .field("creative", &self.creative)
            .field("coder", &self.coder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::specialist::{CODER, CREATIVE, SCIENTIST};
    use crate::orchestrator::supervisor::SUPERVISOR_PROMPT;
    use crate::testing::{Reply, ScriptedClient};

    fn scripted_workflow(replies: Vec<Reply>) -> (Arc<ScriptedClient>, SupervisorWorkflow) {
        let client = Arc::new(ScriptedClient::new(replies));
        let workflow = SupervisorWorkflow::new(client.clone(), ModelConfig::new("test-model"));
        (client, workflow)
    }

    #[tokio::test]
    async fn test_photosynthesis_goes_to_scientist() {
        let (client, workflow) = scripted_workflow(vec![
            Reply::text("SCIENTIST"),
            Reply::text("As the Scientist agent: plants turn light into sugar."),
        ]);

        let outcome = workflow.run("Explain photosynthesis").await.unwrap();
        assert_eq!(outcome.agent_used, RoutingLabel::Scientist);
        assert_eq!(
            outcome.response,
            "🔬 As the Scientist agent: plants turn light into sugar."
        );
        assert!(!outcome.fallback_used);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_moon_poem_goes_to_creative() {
        let (client, workflow) = scripted_workflow(vec![
            Reply::text("CREATIVE"),
            Reply::text("Silver lantern, quiet sky"),
        ]);

        let outcome = workflow.run("Write a poem about the moon").await.unwrap();
        assert_eq!(outcome.agent_used, RoutingLabel::Creative);
        assert!(outcome.response.starts_with("🎨 "));

        let requests = client.requests();
        assert_eq!(requests[0].system_prompt(), Some(SUPERVISOR_PROMPT));
        assert_eq!(requests[1].system_prompt(), Some(CREATIVE.system_prompt));
        assert_eq!(requests[1].user_prompt(), Some("Write a poem about the moon"));
    }

    #[tokio::test]
    async fn test_only_chosen_persona_is_sent() {
        let (client, workflow) = scripted_workflow(vec![Reply::text("CODER"), Reply::text("fn main() {}")]);
        workflow.run("Write hello world in Rust").await.unwrap();

        let prompts: Vec<_> = client
            .requests()
            .iter()
            .filter_map(|r| r.system_prompt().map(str::to_string))
            .collect();
        assert!(prompts.iter().any(|p| p == CODER.system_prompt));
        assert!(!prompts.iter().any(|p| p == SCIENTIST.system_prompt));
        assert!(!prompts.iter().any(|p| p == CREATIVE.system_prompt));
    }

    #[tokio::test]
    async fn test_unrecognized_label_falls_back_to_scientist() {
        for raw in ["garbage", "", "UNKNOWN", "I would pick CODER"] {
            let (client, workflow) = scripted_workflow(vec![Reply::text(raw), Reply::text("answer")]);
            let outcome = workflow.run("hello").await.unwrap();
            assert_eq!(outcome.agent_used, RoutingLabel::Scientist, "{raw:?}");
            assert!(outcome.fallback_used);
            assert_eq!(
                client.requests()[1].system_prompt(),
                Some(SCIENTIST.system_prompt)
            );
        }
    }

    #[tokio::test]
    async fn test_padded_lowercase_label_is_recognized() {
        let (_, workflow) = scripted_workflow(vec![Reply::text("  scientist  "), Reply::text("answer")]);
        let outcome = workflow.run("Why is the sky blue?").await.unwrap();
        assert_eq!(outcome.agent_used, RoutingLabel::Scientist);
        assert!(!outcome.fallback_used);
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_calls() {
        for input in ["", "   ", "\n\t"] {
            let (client, workflow) = scripted_workflow(vec![]);
            assert!(matches!(
                workflow.run(input).await,
                Err(Error::InvalidInput(_))
            ));
            assert_eq!(client.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_classification_failure_skips_specialist() {
        let (client, workflow) = scripted_workflow(vec![Reply::fail("status 503"), Reply::text("unused")]);
        let err = workflow.run("Explain gravity").await.unwrap_err();
        assert!(matches!(err, Error::OpenRouter(_)));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_specialist_failure_fails_the_run() {
        let (client, workflow) = scripted_workflow(vec![Reply::text("CODER"), Reply::fail("status 500")]);
        let err = workflow.run("Debug my code").await.unwrap_err();
        assert!(matches!(err, Error::OpenRouter(_)));
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_outcome_records_both_steps() {
        let (_, workflow) = scripted_workflow(vec![Reply::text("CODER"), Reply::text("done")]);
        let outcome = workflow.run("Sort a list").await.unwrap();

        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.steps[0].kind, StepKind::Supervisor);
        assert_eq!(outcome.steps[1].kind, StepKind::Specialist);
        assert_eq!(outcome.steps[1].name, "coder");
        assert_eq!(outcome.usage, TokenUsage::new(20, 10));
    }

    #[tokio::test]
    async fn test_each_label_reaches_its_specialist() {
        for definition in specialist::SPECIALISTS {
            let (client, workflow) = scripted_workflow(vec![
                Reply::text(definition.label.as_str()),
                Reply::text("ok"),
            ]);
            let outcome = workflow.run("anything").await.unwrap();
            assert_eq!(outcome.agent_used, definition.label);
            assert_eq!(outcome.response, definition.decorate("ok"));
            assert_eq!(
                client.requests()[1].system_prompt(),
                Some(definition.system_prompt)
            );
        }
    }
}
