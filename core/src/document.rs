use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One corpus entry: a titled text body plus the raw column→value map it was
/// loaded from. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// First `limit` characters of the text, for display only. Scoring and
    /// context assembly always use the full text.
    pub fn snippet(&self, limit: usize) -> String {
        self.text.chars().take(limit).collect()
    }
}
