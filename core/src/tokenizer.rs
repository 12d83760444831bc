use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[A-Za-z0-9]+").expect("valid regex");
}

/// Tokenize text into lowercased runs of ASCII letters and digits.
///
/// The same function is applied to documents at index time and to queries at
/// search time. No stemming, stop-word removal, or Unicode normalization:
/// non-ASCII characters act as separators, which is a deliberate
/// simplification of this tokenizer, not an oversight.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
