//! CSV and JSON renderings of a lead list.

use chrono::NaiveDate;
use leadgen_core::{Lead, LeadField};

/// Column order of the default CSV export.
pub const DEFAULT_EXPORT_FIELDS: [LeadField; 18] = [
    LeadField::Name,
    LeadField::Address,
    LeadField::Phone,
    LeadField::Email,
    LeadField::Website,
    LeadField::Category,
    LeadField::City,
    LeadField::PostalCode,
    LeadField::Department,
    LeadField::Region,
    LeadField::Manager,
    LeadField::Employees,
    LeadField::Revenue,
    LeadField::Siret,
    LeadField::Naf,
    LeadField::Rating,
    LeadField::Status,
    LeadField::Notes,
];

/// Renders `leads` as CSV with one column per entry of `fields`.
///
/// The header row holds the French labels, comma-separated. Every data cell
/// is wrapped in double quotes and absent values become `""`. Rows are
/// joined with `\n` without a trailing newline.
///
/// Quotes inside values are written as-is, not doubled, so a value
/// containing `"` yields a row that strict CSV readers will mis-split.
#[must_use]
pub fn to_csv(leads: &[Lead], fields: &[LeadField]) -> String {
    let header = fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(",");

    let rows = leads.iter().map(|lead| {
        fields
            .iter()
            .map(|field| format!("\"{}\"", lead.field_value(*field).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(",")
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// [`to_csv`] with [`DEFAULT_EXPORT_FIELDS`].
#[must_use]
pub fn to_csv_default(leads: &[Lead]) -> String {
    to_csv(leads, &DEFAULT_EXPORT_FIELDS)
}

/// Pretty-printed JSON array of `leads`.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(leads: &[Lead]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(leads)
}

/// `leads_YYYY-MM-DD.<extension>`.
#[must_use]
pub fn export_file_name(extension: &str, date: NaiveDate) -> String {
    format!("leads_{}.{extension}", date.format("%Y-%m-%d"))
}
