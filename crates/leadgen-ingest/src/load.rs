use std::path::Path;

use serde_json::Value;

use crate::csv_reader::read_csv_file;
use crate::error::IngestError;
use crate::json::read_json_file;

/// Reads a local input file, choosing the reader from its extension.
///
/// CSV rows are returned as a JSON array of objects so both formats go
/// through the same normalization entry point.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedFormat`] for any extension other than
/// `json` or `csv` (case-insensitive), or the reader's own error.
pub fn load_path(path: &Path) -> Result<Value, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => read_json_file(path),
        "csv" => {
            let records = read_csv_file(path)?;
            Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
        }
        _ => Err(IngestError::UnsupportedFormat {
            path: path.display().to_string(),
            extension,
        }),
    }
}
