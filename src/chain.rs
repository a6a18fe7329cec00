//! Chains: prompt template → LLM → plain string output
//!
//! A [`Chain`] renders its template, sends the message pair and returns the
//! text of the first choice. [`StudyGuideChain`] runs three chains in sequence,
//! feeding each step's output into the next template.

use crate::config::ModelConfig;
use crate::error::Result;
use crate::llm_client::LlmClient;
use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Template bound to a client and model settings
#[derive(Clone)]
pub struct Chain {
    template: PromptTemplate,
    model: ModelConfig,
    client: Arc<dyn LlmClient>,
}

impl Chain {
    /// Create a new chain
    pub fn new(template: PromptTemplate, model: ModelConfig, client: Arc<dyn LlmClient>) -> Self {
        Self {
            template,
            model,
            client,
        }
    }

    /// The template this chain renders
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Render the template with `vars` and return the model's text
    pub async fn invoke(&self, vars: &HashMap<&str, &str>) -> Result<String> {
        let messages = self.template.render(vars)?;
        let response = self.client.complete(self.model.request(messages)).await?;
        response.text()
    }

    /// Invoke a chain whose template takes a single variable
    pub async fn invoke_with(&self, name: &str, value: &str) -> Result<String> {
        self.invoke(&HashMap::from([(name, value)])).await
    }
}

/// Explain a topic to a beginner in two or three sentences
pub async fn explain_simply(client: Arc<dyn LlmClient>, model: ModelConfig, topic: &str) -> Result<String> {
    let template = PromptTemplate::new(
        "explain_simply",
        "You are an expert teacher who explains concepts simply.",
        "Explain {topic} in 2-3 sentences for a beginner.",
    );
    Chain::new(template, model, client)
        .invoke_with("topic", topic)
        .await
}

/// Output of the three-step study guide chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGuide {
    /// Question generated about the subject
    pub generated_question: String,
    /// Concise answer to that question
    pub answer: String,
    /// Multiple-choice question built from the pair
    pub quiz: String,
}

/// Question → answer → quiz, run strictly in sequence
pub struct StudyGuideChain {
    question: Chain,
    answer: Chain,
    quiz: Chain,
}

impl StudyGuideChain {
    /// Build the three chains over one client
    pub fn new(client: Arc<dyn LlmClient>, model: ModelConfig) -> Self {
        let question = PromptTemplate::new(
            "question",
            "You generate interesting questions about topics.",
            "Generate one thought-provoking question about {subject}. Just the question.",
        );
        let answer = PromptTemplate::new(
            "answer",
            "You are a knowledgeable teacher.",
            "Answer this question concisely: {question}",
        );
        let quiz = PromptTemplate::new(
            "quiz",
            "You create educational quiz questions.",
            "Based on this Q&A, create a multiple choice question:\nQ: {question}\nA: {answer}",
        );

        Self {
            question: Chain::new(question, model.clone(), client.clone()),
            answer: Chain::new(answer, model.clone(), client.clone()),
            quiz: Chain::new(quiz, model, client),
        }
    }

    /// Run all three steps for `subject`
    pub async fn run(&self, subject: &str) -> Result<StudyGuide> {
        let generated_question = self.question.invoke_with("subject", subject).await?;
        tracing::debug!(subject, question = %generated_question, "generated study question");

        let answer = self.answer.invoke_with("question", &generated_question).await?;

        let quiz = self
            .quiz
            .invoke(&HashMap::from([
                ("question", generated_question.as_str()),
                ("answer", answer.as_str()),
            ]))
            .await?;

        Ok(StudyGuide {
            generated_question,
            answer,
            quiz,
        })
    }
}
