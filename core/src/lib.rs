pub mod cache;
pub mod dataset;
pub mod document;
pub mod error;
pub mod index;
pub mod retriever;
pub mod scorer;
pub mod tokenizer;

pub use cache::RetrieverCache;
pub use dataset::load_documents;
pub use document::Document;
pub use error::RetrievalError;
pub use index::CorpusIndex;
pub use retriever::{RankedDoc, Retriever, RetrieverConfig, SearchHit};
pub use scorer::Bm25Scorer;
