//! Per-invocation workflow state

use crate::openrouter::{Message, Role};
use crate::orchestrator::label::RoutingLabel;
use crate::tracing_ext::StepRecord;
use crate::types::{RunId, TokenUsage};

/// State threaded through one workflow run.
///
/// Messages are append-only. A fresh state is built for every invocation and
/// dropped when it ends.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    run_id: RunId,
    messages: Vec<Message>,
    routing_label: Option<RoutingLabel>,
    final_text: Option<String>,
    steps: Vec<StepRecord>,
}

impl WorkflowState {
    /// Start a run from a single user message
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            run_id: RunId::new(),
            messages: vec![Message::user(user_message)],
            routing_label: None,
            final_text: None,
            steps: Vec::new(),
        }
    }

    /// Identifier used as the tracing span field
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Conversation so far
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Label written by the supervisor step
    pub fn routing_label(&self) -> Option<RoutingLabel> {
        self.routing_label
    }

    /// Decorated answer, set by the specialist step
    pub fn final_text(&self) -> Option<&str> {
        self.final_text.as_deref()
    }

    /// Steps executed so far
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Text of the most recent user message
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    /// Token usage summed over all recorded steps
    pub fn usage(&self) -> TokenUsage {
        let mut total = TokenUsage::default();
        for step in &self.steps {
            total.add(step.usage);
        }
        total
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn set_routing_label(&mut self, label: RoutingLabel) {
        self.routing_label = Some(label);
    }

    pub(crate) fn set_final_text(&mut self, text: String) {
        self.final_text = Some(text);
    }

    pub(crate) fn record_step(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    pub(crate) fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}
