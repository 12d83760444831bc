use crate::index::CorpusIndex;

/// BM25 scoring function, stateless over a built [`CorpusIndex`].
///
/// `k1` controls diminishing returns on repeated query terms; `b` weighs
/// document-length normalization.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Scorer {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Scorer {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

impl Bm25Scorer {
    pub fn new(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }

    /// Inverse document frequency of `term`.
    ///
    /// The `+ 1` inside the logarithm keeps idf non-negative even for terms
    /// present in most documents, so a matching term never subtracts from a
    /// document's score.
    fn idf(&self, index: &CorpusIndex, term: &str) -> f64 {
        let n = index.num_docs() as f64;
        let df = index.doc_freq(term) as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Score the document at corpus position `doc` against `query_terms`.
    ///
    /// Sum of per-term contributions over the query terms that occur in the
    /// document; absent terms contribute 0 rather than a penalty.
    pub fn score(&self, index: &CorpusIndex, query_terms: &[String], doc: usize) -> f64 {
        let doc_len = index.doc_len(doc).max(1) as f64;
        let avg_doc_len = match index.avg_doc_len() {
            avg if avg > 0.0 => avg,
            _ => 1.0,
        };

        let mut score = 0.0;
        for term in query_terms {
            let tf = index.term_freq(doc, term) as f64;
            if tf == 0.0 {
                continue;
            }
            let numerator = tf * (self.k1 + 1.0);
            let denominator = tf + self.k1 * (1.0 - self.b + self.b * doc_len / avg_doc_len);
            score += self.idf(index, term) * numerator / denominator;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use std::collections::HashMap;

    fn doc(text: &str) -> Document {
        Document {
            title: String::new(),
            text: text.into(),
            metadata: HashMap::new(),
        }
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn matching_term_scores_positive() {
        let index = CorpusIndex::build(&[doc("silicon wafer"), doc("polymer film")]);
        let scorer = Bm25Scorer::default();
        assert!(scorer.score(&index, &terms(&["silicon"]), 0) > 0.0);
        assert_eq!(scorer.score(&index, &terms(&["silicon"]), 1), 0.0);
    }

    #[test]
    fn more_matching_terms_score_higher() {
        let index = CorpusIndex::build(&[
            doc("etching silicon wafer"),
            doc("silicon doping process"),
        ]);
        let scorer = Bm25Scorer::default();
        let query = terms(&["silicon", "etching"]);
        assert!(scorer.score(&index, &query, 0) > scorer.score(&index, &query, 1));
    }

    #[test]
    fn repeated_terms_saturate() {
        let index = CorpusIndex::build(&[
            doc("etch"),
            doc("etch etch etch etch etch etch etch etch"),
        ]);
        let scorer = Bm25Scorer::default();
        let query = terms(&["etch"]);
        let once = scorer.score(&index, &query, 0);
        let many = scorer.score(&index, &query, 1);
        // tf grows eightfold but the contribution is bounded by k1 + 1.
        assert!(many < once * (scorer.k1 + 1.0));
    }

    #[test]
    fn idf_never_negative_even_for_ubiquitous_terms() {
        let index = CorpusIndex::build(&[doc("common"), doc("common"), doc("common")]);
        let scorer = Bm25Scorer::default();
        let score = scorer.score(&index, &terms(&["common"]), 0);
        assert!(score >= 0.0);
        assert!(score.is_finite());
    }

    #[test]
    fn empty_text_document_scores_zero_without_nan() {
        let index = CorpusIndex::build(&[doc(""), doc("silicon")]);
        let scorer = Bm25Scorer::default();
        let score = scorer.score(&index, &terms(&["silicon"]), 0);
        assert_eq!(score, 0.0);
        assert!(!scorer.score(&index, &terms(&["silicon"]), 1).is_nan());
    }
}
