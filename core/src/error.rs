use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a corpus source.
///
/// An empty query or an empty corpus are not errors: both are defined to
/// produce an empty result set. The only recoverable condition is a corpus
/// load failure, which callers may retry.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The corpus source could not be opened. Fatal to index construction;
    /// never silently treated as an empty corpus.
    #[error("corpus unavailable at {}: {source}", path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file exists but its rows could not be parsed.
    #[error("malformed corpus at {}: {source}", path.display())]
    MalformedCorpus {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
