//! Lesson 3: a supervisor routes each query to one specialist
//!
//! Run with: `cargo run --example supervisor_agents`

use agent_switchboard::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty)?;
    let client = OpenRouterClient::from_env()?;
    let model = client.config().default_model_config();
    let workflow = SupervisorWorkflow::new(Arc::new(client), model);

    println!("{}", "=".repeat(60));
    println!("🎓 LESSON 3: Supervisor Pattern Demo");
    println!("{}", "=".repeat(60));

    let queries = [
        "How does photosynthesis work?",
        "Write me a short poem about the moon",
        "How do I write a for loop in Python?",
    ];

    for query in queries {
        println!("\n📝 Query: {}", query);
        println!("{}", "-".repeat(50));
        let outcome = workflow.run(query).await?;
        let preview: String = outcome.response.chars().take(300).collect();
        println!("🤖 Agent: {}", outcome.agent_used);
        println!("📤 Response: {}...", preview);
        println!(
            "⏱️  {} ms, {} tokens",
            outcome.elapsed_ms, outcome.usage.total_tokens
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("💡 KEY TAKEAWAY: The supervisor pattern enables:");
    println!("   - Stateful agent workflows");
    println!("   - Conditional routing to one specialist");
    println!("   - Multi-agent orchestration with two model calls");
    println!("{}", "=".repeat(60));

    Ok(())
}
