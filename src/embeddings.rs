//! Embeddings, cosine similarity and semantic search over a small document set

use crate::error::{Error, Result};
use crate::llm_client::EmbeddingClient;
use crate::openrouter::EmbeddingRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of cells in a rendered similarity bar
pub const BAR_WIDTH: usize = 20;

/// Embedding client bound to one model
#[derive(Clone)]
pub struct Embedder {
    client: Arc<dyn EmbeddingClient>,
    model: String,
}

impl Embedder {
    /// Create a new embedder
    pub fn new(client: Arc<dyn EmbeddingClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Model used for every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Embed one text
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_batch(&[text])
            .await?
            .pop()
            .ok_or_else(|| Error::embedding("provider returned no vector"))
    }

    /// Embed several texts in one request; vectors come back in input order
    pub async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest::new(&self.model, texts.iter().map(|t| t.to_string()).collect());
        let vectors = self.client.embed(request).await?.into_vectors();

        if vectors.len() != texts.len() {
            return Err(Error::embedding(format!(
                "expected {} vectors, provider returned {}",
                texts.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}

/// Cosine of the angle between two vectors.
///
/// 1.0 means same direction, 0.0 unrelated, -1.0 opposite. A zero vector has
/// no direction and compares as 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::embedding(format!(
            "dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())) as f32)
}

/// Render a score as a fixed-width bar of `█` and `░`
pub fn similarity_bar(score: f32) -> String {
    let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// A ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching document
    pub document: String,
    /// Cosine similarity to the query
    pub score: f32,
}

/// Documents with precomputed vectors
pub struct SemanticIndex {
    embedder: Embedder,
    documents: Vec<String>,
    vectors: Vec<Vec<f32>>,
}

impl SemanticIndex {
    /// Embed every document up front
    pub async fn build(embedder: Embedder, documents: &[&str]) -> Result<Self> {
        let vectors = embedder.embed_batch(documents).await?;
        tracing::info!(documents = documents.len(), model = embedder.model(), "indexed documents");

        Ok(Self {
            embedder,
            documents: documents.iter().map(|d| d.to_string()).collect(),
            vectors,
        })
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The `top_k` documents closest to `query`, best first
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>> {
        let query_vector = self.embedder.embed(query).await?;

        let mut hits = self
            .documents
            .iter()
            .zip(&self.vectors)
            .map(|(document, vector)| {
                Ok(SearchHit {
                    document: document.clone(),
                    score: cosine_similarity(&query_vector, vector)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(top_k);
        Ok(hits)
    }
}

/// Average similarity between two categories of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySimilarity {
    /// First category
    pub left: String,
    /// Second category (equal to `left` for within-category scores)
    pub right: String,
    /// Mean cosine similarity over all compared pairs
    pub average: f32,
}

/// Within- and between-category average similarity.
///
/// Categories are compared once per unordered pair (`left <= right` by name),
/// and an item is never compared with itself.
pub async fn category_similarity(
    embedder: &Embedder,
    categories: &[(&str, &[&str])],
) -> Result<Vec<CategorySimilarity>> {
    let mut items: Vec<&str> = Vec::new();
    let mut labels: Vec<&str> = Vec::new();
    for (category, words) in categories {
        items.extend(words.iter().copied());
        labels.extend(std::iter::repeat(*category).take(words.len()));
    }
    let vectors = embedder.embed_batch(&items).await?;

    let mut results = Vec::new();
    for (left, _) in categories {
        for (right, _) in categories {
            if left > right {
                continue;
            }

            let mut scores = Vec::new();
            for (i, _) in labels.iter().enumerate().filter(|(_, l)| *l == left) {
                for (j, _) in labels.iter().enumerate().filter(|(_, l)| *l == right) {
                    if i != j {
                        scores.push(cosine_similarity(&vectors[i], &vectors[j])?);
                    }
                }
            }
            if scores.is_empty() {
                continue;
            }

            results.push(CategorySimilarity {
                left: left.to_string(),
                right: right.to_string(),
                average: scores.iter().sum::<f32>() / scores.len() as f32,
            });
        }
    }
    Ok(results)
}
