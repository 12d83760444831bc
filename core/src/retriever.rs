use crate::document::Document;
use crate::index::CorpusIndex;
use crate::scorer::Bm25Scorer;
use crate::tokenizer::tokenize;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Separator placed between document texts when assembling a generation
/// context.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Context handed to the generator when retrieval finds nothing usable.
pub const EMPTY_CONTEXT_FALLBACK: &str =
    "No relevant entries found in the fabrication dataset; respond using general knowledge.";

/// Knobs for the retrieval facade, passed in explicitly rather than read from
/// the environment.
#[derive(Debug, Clone, Copy)]
pub struct RetrieverConfig {
    pub k1: f64,
    pub b: f64,
    pub snippet_limit: usize,
    pub default_top_k: usize,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            snippet_limit: 240,
            default_top_k: 3,
        }
    }
}

/// One ranked result: a reference into the corpus plus its score. Lives only
/// for the duration of the search call.
#[derive(Debug, Clone, Copy)]
pub struct RankedDoc<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// Presentation form of a ranked result: title, display snippet, score, and
/// the document's passthrough metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub score: f64,
    pub metadata: HashMap<String, String>,
}

/// Retrieval facade: owns the corpus, its index, and the scorer as one unit.
///
/// The index is built eagerly in the constructor, so every search runs
/// against complete statistics. All search state is per-call; `&self` methods
/// are safe to share across threads.
pub struct Retriever {
    documents: Vec<Document>,
    index: CorpusIndex,
    scorer: Bm25Scorer,
    config: RetrieverConfig,
}

impl Retriever {
    pub fn new(documents: Vec<Document>, config: RetrieverConfig) -> Self {
        let index = CorpusIndex::build(&documents);
        tracing::info!(
            documents = documents.len(),
            terms = index.num_terms(),
            "index built"
        );
        Self {
            documents,
            index,
            scorer: Bm25Scorer::new(config.k1, config.b),
            config,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Rank the corpus against `query` and return at most `top_k` results.
    ///
    /// An empty corpus or a query with no extractable tokens returns an empty
    /// list immediately. Results are sorted by score descending with ties
    /// keeping corpus insertion order, truncated to `top_k`, and then
    /// filtered so no non-positive score is ever returned.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<RankedDoc<'_>> {
        if self.documents.is_empty() {
            return Vec::new();
        }
        let query_terms = tokenize(query);
        if query_terms.is_empty() {
            tracing::debug!(query, "query produced no tokens");
            return Vec::new();
        }

        // Scoring reads only the immutable index, one document per task.
        let mut scored: Vec<(usize, f64)> = (0..self.documents.len())
            .into_par_iter()
            .map(|doc| {
                let score = self.scorer.score(&self.index, &query_terms, doc);
                debug_assert!(score.is_finite() && score >= 0.0);
                (doc, score)
            })
            .collect();

        // Stable sort, so equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);
        // Truncate before filtering: a zero-score document must not appear
        // even when sort stability would have left it inside the top-k slice.
        scored.retain(|&(_, score)| score > 0.0);

        tracing::debug!(query, results = scored.len(), "search complete");
        scored
            .into_iter()
            .map(|(doc, score)| RankedDoc {
                document: &self.documents[doc],
                score,
            })
            .collect()
    }

    /// Presentation hits for a ranked list, using the configured snippet
    /// limit.
    pub fn hits(&self, ranked: &[RankedDoc<'_>]) -> Vec<SearchHit> {
        ranked
            .iter()
            .map(|r| SearchHit {
                title: r.document.title.clone(),
                snippet: r.document.snippet(self.config.snippet_limit),
                score: r.score,
                metadata: r.document.metadata.clone(),
            })
            .collect()
    }

    /// Concatenate the full texts of a ranked list into one context block for
    /// the downstream generator. Empty lists produce the fixed fallback
    /// string instead of an empty block.
    pub fn context_block(&self, ranked: &[RankedDoc<'_>]) -> String {
        if ranked.is_empty() {
            return EMPTY_CONTEXT_FALLBACK.to_string();
        }
        ranked
            .iter()
            .map(|r| r.document.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }
}
