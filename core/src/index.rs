use crate::document::Document;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// Statistics for one document, captured when the index is built.
#[derive(Debug)]
struct DocStats {
    term_freq: HashMap<String, u32>,
    /// Raw token count. The scorer floors this at 1; the raw value feeds the
    /// corpus-wide average.
    len: usize,
}

/// Read-only corpus statistics shared by every search.
///
/// Built once over the full document set, before any query is served. All
/// lookups are by the position of the document in the original corpus order.
#[derive(Debug)]
pub struct CorpusIndex {
    docs: Vec<DocStats>,
    doc_freq: HashMap<String, u32>,
    avg_doc_len: f64,
}

impl CorpusIndex {
    /// Tokenize every document and collect per-document term frequencies,
    /// per-term document frequencies, and the average document length.
    pub fn build(documents: &[Document]) -> Self {
        let mut docs = Vec::with_capacity(documents.len());
        let mut doc_freq: HashMap<String, u32> = HashMap::new();
        let mut total_len = 0usize;

        for document in documents {
            let tokens = tokenize(&document.text);
            total_len += tokens.len();
            let len = tokens.len();
            let mut term_freq: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *term_freq.entry(token).or_insert(0) += 1;
            }
            // df counts each term once per document, regardless of repetition.
            for term in term_freq.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            docs.push(DocStats { term_freq, len });
        }

        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            total_len as f64 / docs.len() as f64
        };

        Self {
            docs,
            doc_freq,
            avg_doc_len,
        }
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    /// Number of distinct terms across the corpus.
    pub fn num_terms(&self) -> usize {
        self.doc_freq.len()
    }

    /// Documents containing `term` at least once. Unseen terms are 0.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Mean token count per document; 0.0 for an empty corpus.
    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Occurrences of `term` in the document at corpus position `doc`.
    pub fn term_freq(&self, doc: usize, term: &str) -> u32 {
        self.docs[doc].term_freq.get(term).copied().unwrap_or(0)
    }

    /// Token count of the document at corpus position `doc`.
    pub fn doc_len(&self, doc: usize) -> usize {
        self.docs[doc].len
    }
}
