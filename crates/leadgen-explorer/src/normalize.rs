//! Normalization from flat input rows to canonical [`Lead`]s.
//!
//! Column lookup is delegated to [`crate::resolve`], cell parsing to
//! [`crate::parse`] and department/region derivation to [`crate::geo`]; this
//! module only assembles the lead and decides what gets dropped.

use leadgen_core::{Lead, LeadField, LeadStatus, RawRecord};
use serde_json::Value;

use crate::error::ExplorerError;
use crate::geo::{department_from_postal, region_for_department};
use crate::parse::{normalize_postal_code, parse_rating};
use crate::resolve::{resolve_field, ColumnAliases, Headers};

/// How a batch of rows is turned into leads.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Leads are identified as `"<id_prefix>-<row index>"`.
    pub id_prefix: String,
    pub aliases: ColumnAliases,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::new("json")
    }
}

impl NormalizeOptions {
    #[must_use]
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            aliases: ColumnAliases::builtin(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: ColumnAliases) -> Self {
        self.aliases = aliases;
        self
    }
}

/// A cell that was present but could not be parsed. The field is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub row: usize,
    pub field: LeadField,
    pub value: String,
}

/// Result of normalizing a batch: the leads plus what was lost on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub leads: Vec<Lead>,
    pub warnings: Vec<ParseWarning>,
    /// Rows skipped because they had no name.
    pub dropped: usize,
}

/// Normalizes a JSON array of flat records into leads.
///
/// # Errors
///
/// Returns [`ExplorerError::InputFormat`] if `input` is not an array or any
/// element is not an object.
pub fn normalize(input: &Value, options: &NormalizeOptions) -> Result<Vec<Lead>, ExplorerError> {
    normalize_with_report(input, options).map(|report| report.leads)
}

/// Like [`normalize`], but also returns parse warnings and the dropped count.
///
/// # Errors
///
/// Returns [`ExplorerError::InputFormat`] if `input` is not an array or any
/// element is not an object.
pub fn normalize_with_report(
    input: &Value,
    options: &NormalizeOptions,
) -> Result<NormalizeReport, ExplorerError> {
    let rows = input.as_array().ok_or_else(|| ExplorerError::InputFormat {
        row: None,
        reason: format!("expected an array of records, got {}", kind(input)),
    })?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(row, value)| {
            value.as_object().ok_or_else(|| ExplorerError::InputFormat {
                row: Some(row),
                reason: format!("expected an object, got {}", kind(value)),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(normalize_rows(records, options))
}

/// Normalizes records that were already materialized (e.g. from CSV).
#[must_use]
pub fn normalize_records(records: &[RawRecord], options: &NormalizeOptions) -> NormalizeReport {
    normalize_rows(records, options)
}

fn normalize_rows<'a>(
    records: impl IntoIterator<Item = &'a RawRecord>,
    options: &NormalizeOptions,
) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for (row, record) in records.into_iter().enumerate() {
        match normalize_row(row, record, options, &mut report.warnings) {
            Some(lead) => report.leads.push(lead),
            None => {
                tracing::debug!(row, "dropping record without a name");
                report.dropped += 1;
            }
        }
    }

    for warning in &report.warnings {
        tracing::debug!(
            row = warning.row,
            field = %warning.field,
            value = %warning.value,
            "unparseable value left empty"
        );
    }
    tracing::info!(
        leads = report.leads.len(),
        dropped = report.dropped,
        warnings = report.warnings.len(),
        "normalized records"
    );

    report
}

fn normalize_row(
    row: usize,
    record: &RawRecord,
    options: &NormalizeOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Lead> {
    let headers = Headers::of(record);
    let field = |field: LeadField| resolve_field(record, &headers, options.aliases.for_field(field));

    let name = field(LeadField::Name)?;

    let postal_code = match field(LeadField::PostalCode) {
        Some(raw) => normalize_postal_code(&raw).unwrap_or_else(|| {
            warnings.push(ParseWarning {
                row,
                field: LeadField::PostalCode,
                value: raw,
            });
            String::new()
        }),
        None => String::new(),
    };

    let department = field(LeadField::Department)
        .or_else(|| department_from_postal(&postal_code))
        .unwrap_or_default();
    let region = field(LeadField::Region)
        .unwrap_or_else(|| region_for_department(&department).to_string());

    let rating = field(LeadField::Rating).and_then(|raw| {
        let parsed = parse_rating(&raw);
        if parsed.is_none() {
            warnings.push(ParseWarning {
                row,
                field: LeadField::Rating,
                value: raw,
            });
        }
        parsed
    });

    Some(Lead {
        id: format!("{}-{row}", options.id_prefix),
        name,
        address: field(LeadField::Address).unwrap_or_default(),
        city: field(LeadField::City).unwrap_or_default(),
        postal_code,
        department,
        region,
        phone: field(LeadField::Phone),
        email: field(LeadField::Email),
        website: field(LeadField::Website),
        category: field(LeadField::Category),
        manager: field(LeadField::Manager),
        employees: field(LeadField::Employees),
        revenue: field(LeadField::Revenue),
        siret: field(LeadField::Siret),
        naf: field(LeadField::Naf),
        rating,
        status: LeadStatus::New,
        notes: field(LeadField::Notes),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
