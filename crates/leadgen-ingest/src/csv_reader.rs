//! CSV input. Spreadsheet exports from French locales use `;`, others `,`;
//! the delimiter is picked from the header line.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use leadgen_core::RawRecord;
use serde_json::Value;

use crate::error::IngestError;

/// Reads every row of a CSV stream into a record keyed by the header row.
///
/// Cells are kept as strings; blank cells are kept as `""` and treated as
/// empty during normalization. Short rows simply lack the trailing keys.
/// A repeated header is suffixed with its occurrence (`Téléphone`,
/// `Téléphone_1`, ...) so every column keeps its own cell.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the stream cannot be read or
/// [`IngestError::Csv`] if it is not valid CSV.
pub fn read_csv_records<R: Read>(mut reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| IngestError::Io {
            context: "CSV input".to_string(),
            source: e,
        })?;
    let content = content
        .strip_prefix(b"\xEF\xBB\xBF".as_slice())
        .unwrap_or(&content);

    let delimiter = sniff_delimiter(content);
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = unique_headers(csv.headers()?);
    let mut records = Vec::new();
    for row in csv.records() {
        let row = row?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .filter_map(|(header, cell)| {
                header
                    .as_ref()
                    .map(|header| (header.clone(), Value::String(cell.to_string())))
            })
            .collect();
        records.push(record);
    }

    tracing::debug!(
        rows = records.len(),
        delimiter = %char::from(delimiter),
        "read CSV records"
    );
    Ok(records)
}

/// Reads a CSV file from disk. See [`read_csv_records`].
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be opened or
/// [`IngestError::Csv`] if it is not valid CSV.
pub fn read_csv_file(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        context: path.display().to_string(),
        source: e,
    })?;
    read_csv_records(file)
}

/// Blank headers map to `None`; repeats get the first free `_<n>` suffix.
fn unique_headers(headers: &csv::StringRecord) -> Vec<Option<String>> {
    let mut taken: HashSet<String> = headers
        .iter()
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();
    let mut seen = HashSet::new();
    headers
        .iter()
        .map(|header| {
            if header.is_empty() {
                return None;
            }
            if seen.insert(header) {
                return Some(header.to_string());
            }
            let renamed = (1..)
                .map(|n| format!("{header}_{n}"))
                .find(|candidate| !taken.contains(candidate))?;
            taken.insert(renamed.clone());
            Some(renamed)
        })
        .collect()
}

fn sniff_delimiter(content: &[u8]) -> u8 {
    let header = content.split(|b| *b == b'\n').next().unwrap_or_default();
    let count = |needle: u8| header.iter().filter(|b| **b == needle).count();
    if count(b';') > count(b',') {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_comma_separated_records() {
        let input = "Company Name,Zip,CATEGORY\nLe Bistrot,75001,Restaurant\n";
        let records = read_csv_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Company Name"], "Le Bistrot");
        assert_eq!(records[0]["Zip"], "75001");
    }

    #[test]
    fn sniffs_semicolon_delimiter() {
        let input = "Nom de l'entreprise;Code postal;Chiffre d'affaires\n\
                     Boulangerie Martin;69002;1,5 M€\n";
        let records = read_csv_records(input.as_bytes()).unwrap();
        assert_eq!(records[0]["Code postal"], "69002");
        assert_eq!(records[0]["Chiffre d'affaires"], "1,5 M€");
    }

    #[test]
    fn keeps_header_order_and_strips_bom() {
        let input = "\u{FEFF}Zip,Company Name\n75001,Le Bistrot\n";
        let records = read_csv_records(input.as_bytes()).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["Zip", "Company Name"]);
    }

    #[test]
    fn quoted_cells_and_short_rows() {
        let input = "Company Name,Address,City\n\"Café, Bar & Co\",\"1 Rue X\"\n";
        let records = read_csv_records(input.as_bytes()).unwrap();
        assert_eq!(records[0]["Company Name"], "Café, Bar & Co");
        assert!(!records[0].contains_key("City"));
    }

    #[test]
    fn repeated_headers_keep_every_cell() {
        let input = "Company Name,Téléphone,Téléphone,Téléphone_1\nA,0102030405,,0607080910\n";
        let records = read_csv_records(input.as_bytes()).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["Company Name", "Téléphone", "Téléphone_2", "Téléphone_1"]);
        assert_eq!(records[0]["Téléphone"], "0102030405");
        assert_eq!(records[0]["Téléphone_2"], "");
        assert_eq!(records[0]["Téléphone_1"], "0607080910");
    }

    #[test]
    fn header_only_yields_no_records() {
        let records = read_csv_records("Company Name,Zip\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn read_csv_file_reports_missing_file() {
        let err = read_csv_file(Path::new("/nonexistent/leads.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }), "got: {err:?}");
    }
}
