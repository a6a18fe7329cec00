//! The three specialist personas and the agent that answers with one of them

use crate::config::ModelConfig;
use crate::error::Result;
use crate::llm_client::LlmClient;
use crate::orchestrator::label::RoutingLabel;
use crate::orchestrator::router::SpecialistId;
use crate::prompt::PromptTemplate;
use crate::types::TokenUsage;
use std::sync::Arc;

/// Static persona: label, prompt and display glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialistDefinition {
    /// Routing label served by this persona
    pub label: RoutingLabel,
    /// Display name
    pub name: &'static str,
    /// Prefix placed before the response
    pub glyph: &'static str,
    /// System prompt
    pub system_prompt: &'static str,
}

impl SpecialistDefinition {
    /// Graph node identifier
    pub fn id(&self) -> SpecialistId {
        SpecialistId::from(self.label)
    }

    /// Glyph and name, e.g. `🔬 Scientist`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.glyph, self.name)
    }

    /// Prefix `response` with this persona's glyph
    pub fn decorate(&self, response: &str) -> String {
        format!("{} {}", self.glyph, response)
    }

    fn template(&self) -> PromptTemplate {
        PromptTemplate::passthrough(self.id().as_str(), self.system_prompt)
    }
}

/// Facts, research and explanations
pub static SCIENTIST: SpecialistDefinition = SpecialistDefinition {
    label: RoutingLabel::Scientist,
    name: "Scientist",
    glyph: "🔬",
    system_prompt: "You are a brilliant scientist and educator.
You explain complex topics clearly and accurately.
You love sharing fascinating facts and breaking down how things work.
Always cite that you're the Scientist agent at the start.
Be informative but concise (2-3 paragraphs max).",
};

/// Stories, poetry and imagination
pub static CREATIVE: SpecialistDefinition = SpecialistDefinition {
    label: RoutingLabel::Creative,
    name: "Creative",
    glyph: "🎨",
    system_prompt: "You are a creative writing genius and storyteller.
You craft beautiful prose, poetry, and imaginative content.
Your writing is vivid, engaging, and emotionally resonant.
Always mention you're the Creative agent at the start.
Keep responses focused but impactful.",
};

/// Programming and technical questions
pub static CODER: SpecialistDefinition = SpecialistDefinition {
    label: RoutingLabel::Coder,
    name: "Coder",
    glyph: "💻",
    system_prompt: "You are an expert programmer and software engineer.
You write clean, well-documented code and explain technical concepts clearly.
You're proficient in Python, JavaScript, and general CS concepts.
Always mention you're the Coder agent at the start.
Include code examples when relevant, with explanations.",
};

/// All personas, in label order
pub static SPECIALISTS: [&SpecialistDefinition; 3] = [&SCIENTIST, &CREATIVE, &CODER];

/// Definition for a node identifier
pub fn definition(id: SpecialistId) -> &'static SpecialistDefinition {
    match id {
        SpecialistId::Scientist => &SCIENTIST,
        SpecialistId::Creative => &CREATIVE,
        SpecialistId::Coder => &CODER,
    }
}

/// A persona bound to the LLM client
#[derive(Clone)]
pub struct Specialist {
    definition: &'static SpecialistDefinition,
    template: PromptTemplate,
    model: ModelConfig,
    client: Arc<dyn LlmClient>,
}

impl Specialist {
    /// Create a specialist
    pub fn new(
        definition: &'static SpecialistDefinition,
        client: Arc<dyn LlmClient>,
        model: ModelConfig,
    ) -> Self {
        Self {
            definition,
            template: definition.template(),
            model,
            client,
        }
    }

    /// The static persona
    pub fn definition(&self) -> &'static SpecialistDefinition {
        self.definition
    }

    /// Answer `message` in persona; the raw model text is returned undecorated.
    ///
    /// Upstream errors are returned unchanged.
    pub async fn respond(&self, message: &str) -> Result<(String, TokenUsage)> {
        let request = self.model.request(self.template.render_input(message)?);
        let response = self.client.complete(request).await?;
        Ok((response.text()?, response.token_usage()))
    }
}

impl std::fmt::Debug for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Specialist")
            .field("name", &self.definition.name)
            .field("model", &self.model.model)
            .field("client", &self.client.client_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, ScriptedClient};

    #[test]
    fn test_definitions_cover_every_label_once() {
        for label in RoutingLabel::ALL {
            let matching: Vec<_> = SPECIALISTS.iter().filter(|d| d.label == label).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(definition(SpecialistId::from(label)).label, label);
        }
    }

    #[test]
    fn test_glyphs_and_prompts() {
        assert_eq!(SCIENTIST.decorate("hi"), "🔬 hi");
        assert_eq!(CREATIVE.decorate("hi"), "🎨 hi");
        assert_eq!(CODER.decorate("hi"), "💻 hi");
        assert!(SCIENTIST.system_prompt.contains("Scientist agent"));
        assert!(CREATIVE.system_prompt.contains("Creative agent"));
        assert!(CODER.system_prompt.contains("Coder agent"));
        assert_eq!(CODER.display_name(), "💻 Coder");
    }

    #[tokio::test]
    async fn test_respond_sends_persona_and_message() {
        let client = Arc::new(ScriptedClient::new([Reply::text("def add(a, b): return a + b")]));
        let coder = Specialist::new(&CODER, client.clone(), ModelConfig::new("m"));

        let (text, usage) = coder.respond("Write an add function").await.unwrap();
        assert_eq!(text, "def add(a, b): return a + b");
        assert_eq!(usage.total_tokens, 15);

        let requests = client.requests();
        assert_eq!(requests[0].system_prompt(), Some(CODER.system_prompt));
        assert_eq!(requests[0].user_prompt(), Some("Write an add function"));
    }
}
