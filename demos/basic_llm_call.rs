//! Lesson 1: an LLM call is one HTTP request
//!
//! Run with: `cargo run --example basic_llm_call`

use agent_switchboard::prelude::*;
use agent_switchboard::ask;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty)?;
    let client = OpenRouterClient::from_env()?;

    println!("{}", "=".repeat(60));
    println!("🎓 LESSON 1: Basic LLM Call Demo");
    println!("{}", "=".repeat(60));

    let prompts = [
        "What is Python in one sentence?",
        "Write a haiku about coding",
        "What is 2 + 2? Just the number.",
    ];

    for prompt in prompts {
        println!("\n📝 Prompt: {}", prompt);
        println!("{}", "-".repeat(40));
        let response = ask(&client, prompt).await?;
        println!("🤖 Response: {}", response);
    }

    println!("\n{}", "=".repeat(60));
    println!("💡 KEY TAKEAWAY: An LLM call is just an HTTP request!");
    println!("   - Send: model + messages + parameters");
    println!("   - Receive: generated text");
    println!("{}", "=".repeat(60));

    Ok(())
}
