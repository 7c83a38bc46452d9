//! Pluggable lead sources and the aggregator that queries them together.

use leadgen_core::Lead;
use thiserror::Error;

use crate::batch::LeadBatch;
use crate::dedupe::dedupe_leads;
use crate::geo::department_name;

/// Result cap applied when [`SearchFilters::max_results`] is unset.
pub const DEFAULT_MAX_RESULTS: usize = 50;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("lead source {source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("invalid search filters: {0}")]
    InvalidFilters(String),
}

/// What a prospecting search asks for. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Business category, matched as a case-insensitive substring.
    pub category: Option<String>,
    /// City, postal code prefix, department (code or name) or region.
    pub location: Option<String>,
    /// A lead matches when any keyword appears in its searchable text.
    pub keywords: Vec<String>,
    pub min_rating: Option<f64>,
    pub max_results: Option<usize>,
}

impl SearchFilters {
    #[must_use]
    pub fn limit(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }

    fn validate(&self) -> Result<(), SourceError> {
        match self.min_rating {
            Some(rating) if !rating.is_finite() => Err(SourceError::InvalidFilters(format!(
                "min_rating must be a finite number, got {rating}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Anything that can answer a prospecting search with leads.
pub trait LeadSource {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Leads matching `filters`, at most `filters.limit()` of them.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source cannot be queried or the
    /// filters are invalid.
    fn search(&self, filters: &SearchFilters) -> Result<Vec<Lead>, SourceError>;
}

/// Serves searches from an already loaded batch.
#[derive(Debug, Clone)]
pub struct BatchSource {
    name: String,
    batch: LeadBatch,
}

impl BatchSource {
    #[must_use]
    pub fn new(name: impl Into<String>, batch: LeadBatch) -> Self {
        Self {
            name: name.into(),
            batch,
        }
    }
}

impl LeadSource for BatchSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn search(&self, filters: &SearchFilters) -> Result<Vec<Lead>, SourceError> {
        filters.validate()?;
        Ok(self
            .batch
            .leads()
            .iter()
            .filter(|lead| matches_search(lead, filters))
            .take(filters.limit())
            .cloned()
            .collect())
    }
}

fn matches_search(lead: &Lead, filters: &SearchFilters) -> bool {
    if let Some(category) = non_blank(filters.category.as_deref()) {
        let wanted = category.to_lowercase();
        let found = lead
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(&wanted));
        if !found {
            return false;
        }
    }

    if let Some(location) = non_blank(filters.location.as_deref()) {
        if !matches_location(lead, location) {
            return false;
        }
    }

    let keywords: Vec<String> = filters
        .keywords
        .iter()
        .filter_map(|k| non_blank(Some(k.as_str())))
        .map(str::to_lowercase)
        .collect();
    if !keywords.is_empty() {
        let text = [
            Some(lead.name.as_str()),
            Some(lead.address.as_str()),
            Some(lead.city.as_str()),
            lead.category.as_deref(),
            lead.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
        if !keywords.iter().any(|k| text.contains(k.as_str())) {
            return false;
        }
    }

    match filters.min_rating {
        Some(threshold) => lead.rating.is_some_and(|r| r >= threshold),
        None => true,
    }
}

fn matches_location(lead: &Lead, location: &str) -> bool {
    let wanted = location.to_lowercase();
    let contains = |value: &str| !value.is_empty() && value.to_lowercase().contains(&wanted);

    contains(&lead.city)
        || (!lead.postal_code.is_empty() && lead.postal_code.starts_with(location))
        || lead.department.eq_ignore_ascii_case(location)
        || contains(department_name(&lead.department))
        || contains(&lead.region)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Queries every source, skipping (and logging) the ones that fail, then
/// removes duplicates and caps the result at `filters.limit()`.
#[must_use]
pub fn search_all(sources: &[&dyn LeadSource], filters: &SearchFilters) -> Vec<Lead> {
    let mut leads = Vec::new();
    for source in sources {
        match source.search(filters) {
            Ok(found) => {
                tracing::debug!(source = source.name(), count = found.len(), "lead source answered");
                leads.extend(found);
            }
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "lead source failed; skipping");
            }
        }
    }

    let mut leads = dedupe_leads(leads);
    leads.truncate(filters.limit());
    leads
}
