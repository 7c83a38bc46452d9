use std::path::PathBuf;

use anyhow::Context;
use leadgen_core::Lead;
use leadgen_explorer::{export_file_name, filter_leads, to_csv_default, to_json, LeadFilter};

use crate::ExportFormat;

/// Writes the filtered leads to `output`, or to `leads_<today>.<ext>`.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub(crate) fn run_export(
    leads: &[Lead],
    filter: &LeadFilter,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let filtered = filter_leads(leads, filter);
    let content = render(&filtered, format)?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(export_file_name(
            format.extension(),
            chrono::Local::now().date_naive(),
        ))
    });
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(count = filtered.len(), path = %path.display(), "export written");
    println!("exported {} leads to {}", filtered.len(), path.display());
    Ok(())
}

fn render(leads: &[Lead], format: ExportFormat) -> anyhow::Result<String> {
    Ok(match format {
        ExportFormat::Csv => to_csv_default(leads),
        ExportFormat::Json => to_json(leads)?,
    })
}
