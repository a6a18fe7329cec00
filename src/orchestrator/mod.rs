//! Orchestrator module - supervisor routing across specialist agents
//!
//! A supervisor classifies each message into one [`RoutingLabel`], the router
//! maps the label to a specialist node, and exactly one specialist answers.
//!
//! # Nodes
//!
//! - **Supervisor**: constrained one-word classification
//! - **Scientist**: facts and explanations (`🔬`)
//! - **Creative**: stories and poetry (`🎨`)
//! - **Coder**: programming help (`💻`)
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_switchboard::orchestrator::SupervisorWorkflow;
//!
//! let workflow = SupervisorWorkflow::new(client, ModelConfig::new(presets::QWEN_72B));
//! let outcome = workflow.run("Explain photosynthesis").await?;
//! println!("{}: {}", outcome.agent_used, outcome.response);
//! ```

pub mod label;
pub mod router;
pub mod specialist;
pub mod state;
pub mod supervisor;
pub mod workflow;

// Re-exports
pub use label::{Classification, RoutingLabel, UnknownLabel};
pub use router::{route, SpecialistId};
pub use specialist::{Specialist, SpecialistDefinition, CODER, CREATIVE, SCIENTIST, SPECIALISTS};
pub use state::WorkflowState;
pub use supervisor::{Supervisor, SUPERVISOR_PROMPT};
pub use workflow::{SupervisorWorkflow, WorkflowOutcome};
