use anyhow::Context;
use leadgen_core::{AppConfig, Lead};
use leadgen_explorer::{dedupe_leads, normalize_with_report, ColumnAliases, NormalizeOptions};
use leadgen_ingest::{load_path, DatasetClient};

use crate::SourceArgs;

/// Acquires the raw records named by `source` (or the configured default)
/// and normalizes them into a batch.
///
/// # Errors
///
/// Returns an error if the alias file, the input or the dataset cannot be
/// read, or if the input is not a list of flat records.
pub(crate) async fn load_leads(config: &AppConfig, source: &SourceArgs) -> anyhow::Result<Vec<Lead>> {
    let aliases = match &config.columns_path {
        Some(path) => ColumnAliases::with_overrides(&leadgen_core::load_column_overrides(path)?),
        None => ColumnAliases::builtin(),
    };
    let options = NormalizeOptions::new(config.id_prefix.clone()).with_aliases(aliases);

    let url = source.url.as_deref().or(if source.file.is_some() {
        None
    } else {
        config.data_url.as_deref()
    });

    let raw = if let Some(url) = url {
        let client = DatasetClient::with_base_url(url, config.fetch_timeout_secs, &config.user_agent)?;
        let dataset = client
            .fetch_dataset()
            .await
            .with_context(|| format!("failed to fetch lead dataset from {url}"))?;
        tracing::info!(variant = %dataset.variant, "loaded remote dataset");
        dataset.records
    } else {
        let path = source.file.as_deref().unwrap_or(&config.data_path);
        load_path(path).with_context(|| format!("failed to load {}", path.display()))?
    };

    let report = normalize_with_report(&raw, &options)?;
    if !report.warnings.is_empty() {
        tracing::warn!(
            count = report.warnings.len(),
            "some values could not be parsed and were left empty"
        );
    }

    Ok(if source.dedupe {
        dedupe_leads(report.leads)
    } else {
        report.leads
    })
}
