//! Lesson 4: embeddings, similarity and semantic search
//!
//! Run with: `cargo run --example embeddings`

use agent_switchboard::prelude::*;
use agent_switchboard::{category_similarity, cosine_similarity, similarity_bar, Embedder, SemanticIndex};
use std::sync::Arc;

async fn basic_embeddings(embedder: &Embedder) -> anyhow::Result<()> {
    println!("\n📊 Demo 1: Basic Embeddings");
    println!("{}", "-".repeat(40));

    let text = "Machine learning is fascinating";
    let embedding = embedder.embed(text).await?;
    let min = embedding.iter().copied().fold(f32::INFINITY, f32::min);
    let max = embedding.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    println!("Text: '{}'", text);
    println!("Embedding dimensions: {}", embedding.len());
    println!("First 10 values: {:?}", &embedding[..embedding.len().min(10)]);
    println!("Value range: [{:.4}, {:.4}]", min, max);
    Ok(())
}

async fn semantic_similarity(embedder: &Embedder) -> anyhow::Result<()> {
    println!("\n📊 Demo 2: Semantic Similarity");
    println!("{}", "-".repeat(40));

    let pairs = [
        ("I love programming", "Coding is my passion"),
        ("I love programming", "I hate programming"),
        ("I love programming", "The weather is nice"),
        ("Python is great", "Python is an excellent language"),
        ("cat", "kitten"),
        ("cat", "automobile"),
    ];

    println!("\nComparing text pairs:\n");
    for (left, right) in pairs {
        let vectors = embedder.embed_batch(&[left, right]).await?;
        let score = cosine_similarity(&vectors[0], &vectors[1])?;
        println!("'{}' vs '{}'", left, right);
        println!("  Similarity: {:.4} [{}]", score, similarity_bar(score));
        println!();
    }
    Ok(())
}

async fn semantic_search(embedder: &Embedder) -> anyhow::Result<()> {
    println!("\n📊 Demo 3: Semantic Search (Finding Similar Documents)");
    println!("{}", "-".repeat(40));

    let documents = [
        "Python is a versatile programming language",
        "JavaScript runs in web browsers",
        "Machine learning models learn from data",
        "Cats are independent pets",
        "Dogs are loyal companions",
        "Neural networks are inspired by the brain",
        "The sun is a star at the center of our solar system",
    ];

    println!("Indexing documents...");
    let index = SemanticIndex::build(embedder.clone(), &documents).await?;

    for query in ["How do I code in Python?", "Tell me about pets", "Deep learning AI"] {
        println!("\n🔍 Query: '{}'", query);
        println!("   Top 3 results:");
        for (rank, hit) in index.search(query, 3).await?.iter().enumerate() {
            println!("   {}. [{:.3}] {}", rank + 1, hit.score, hit.document);
        }
    }
    Ok(())
}

async fn clustering(embedder: &Embedder) -> anyhow::Result<()> {
    println!("\n📊 Demo 4: Conceptual Clustering");
    println!("{}", "-".repeat(40));

    let animals: &[&str] = &["cat", "dog", "elephant", "lion"];
    let fruits: &[&str] = &["apple", "banana", "orange", "grape"];
    let tech: &[&str] = &["computer", "software", "algorithm", "database"];

    println!("Getting embeddings for words...");
    let results =
        category_similarity(embedder, &[("animals", animals), ("fruits", fruits), ("tech", tech)]).await?;

    println!("\n📈 Average similarities:");
    for pair in results {
        println!("   {} ↔ {}: {:.3}", pair.left, pair.right, pair.average);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty)?;
    let client = OpenRouterClient::from_env()?;
    let model = client.config().embedding_model.clone();
    let embedder = Embedder::new(Arc::new(client), model);

    println!("{}", "=".repeat(60));
    println!("🎓 LESSON 4: Understanding Embeddings");
    println!("{}", "=".repeat(60));

    basic_embeddings(&embedder).await?;
    semantic_similarity(&embedder).await?;
    semantic_search(&embedder).await?;
    clustering(&embedder).await?;

    println!("\n{}", "=".repeat(60));
    println!("💡 KEY TAKEAWAYS:");
    println!("   - Embeddings convert text → vectors");
    println!("   - Similar meanings = similar vectors");
    println!("   - Enables: search, clustering, recommendations");
    println!("   - Foundation of RAG (Retrieval Augmented Generation)");
    println!("{}", "=".repeat(60));

    Ok(())
}
