use std::path::Path;

use crate::error::IngestError;

/// Reads a JSON document from disk. The shape is validated by the normalizer.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be read or
/// [`IngestError::Json`] if it is not valid JSON.
pub fn read_json_file(path: &Path) -> Result<serde_json::Value, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        context: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| IngestError::Json {
        context: path.display().to_string(),
        source: e,
    })
}
