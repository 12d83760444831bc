use crate::document::Document;
use crate::error::RetrievalError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Column whose value becomes the document title when present.
pub const TITLE_COLUMN: &str = "Paper name";

/// Load a corpus from a CSV file with a header row.
///
/// Each data row becomes one [`Document`]: the title comes from the
/// [`TITLE_COLUMN`] (falling back to `Row {n}` over 1-based data rows), the
/// text body is the non-blank `"column: value"` lines joined by newlines in
/// column order, and the metadata map carries the raw row. Rows whose values
/// are all blank are skipped.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, RetrievalError> {
    let raw = fs::read_to_string(path).map_err(|source| RetrievalError::CorpusUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    // Exported spreadsheets often carry a UTF-8 BOM.
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| RetrievalError::MalformedCorpus {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut documents = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| RetrievalError::MalformedCorpus {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let mut metadata = HashMap::new();
        let mut text_parts = Vec::new();
        for (key, value) in headers.iter().zip(record.iter()) {
            metadata.insert(key.to_string(), value.to_string());
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                text_parts.push(format!("{key}: {trimmed}"));
            }
        }

        let title = metadata
            .get(TITLE_COLUMN)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Row {}", idx + 1));

        documents.push(Document {
            title,
            text: text_parts.join("\n"),
            metadata,
        });
    }

    tracing::info!(
        path = %path.display(),
        documents = documents.len(),
        "corpus loaded"
    );
    Ok(documents)
}
