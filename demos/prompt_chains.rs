//! Lesson 2: prompt templates and chains
//!
//! Run with: `cargo run --example prompt_chains`

use agent_switchboard::prelude::*;
use agent_switchboard::{explain_simply, StudyGuideChain};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty)?;
    let client: Arc<dyn LlmClient> = Arc::new(OpenRouterClient::from_env()?);
    let model = ModelConfig::new(presets::GPT35_TURBO);

    println!("{}", "=".repeat(60));
    println!("🎓 LESSON 2: Prompt Chains Demo");
    println!("{}", "=".repeat(60));

    println!("\n📚 Simple Chain Example:");
    println!("{}", "-".repeat(40));
    let result = explain_simply(client.clone(), model.clone(), "neural networks").await?;
    println!("Response: {}", result);

    println!("\n📚 Multi-Step Chain Example:");
    println!("{}", "-".repeat(40));
    let guide = StudyGuideChain::new(client, model).run("machine learning").await?;
    println!("Generated Question: {}", guide.generated_question);
    println!("Answer: {}", guide.answer);
    println!("Quiz: {}", guide.quiz);

    println!("\n{}", "=".repeat(60));
    println!("💡 KEY TAKEAWAY: Chains provide:");
    println!("   - Prompt templates (reusable, parameterized)");
    println!("   - Chains (compose multiple steps)");
    println!("   - Plain string output at every step");
    println!("{}", "=".repeat(60));

    Ok(())
}
