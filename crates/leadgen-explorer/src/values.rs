//! Distinct field values and per-status counts over a batch.

use std::collections::BTreeSet;

use leadgen_core::{Lead, LeadField, LeadStatus};
use serde::Serialize;

/// Sorted, distinct, non-blank values of `field` across `leads`.
#[must_use]
pub fn unique_values(leads: &[Lead], field: LeadField) -> Vec<String> {
    leads
        .iter()
        .filter_map(|lead| lead.field_value(field))
        .map(|value| value.trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Choices offered for the exact-match filters, computed once per load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub cities: Vec<String>,
    pub departments: Vec<String>,
    pub regions: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_leads(leads: &[Lead]) -> Self {
        Self {
            categories: unique_values(leads, LeadField::Category),
            cities: unique_values(leads, LeadField::City),
            departments: unique_values(leads, LeadField::Department),
            regions: unique_values(leads, LeadField::Region),
        }
    }
}

/// Lead counts by prospecting status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeadStats {
    pub total: usize,
    pub new: usize,
    pub contacted: usize,
    pub qualified: usize,
    pub lost: usize,
}

impl LeadStats {
    #[must_use]
    pub fn from_leads(leads: &[Lead]) -> Self {
        leads.iter().fold(Self::default(), |mut stats, lead| {
            stats.total += 1;
            match lead.status {
                LeadStatus::New => stats.new += 1,
                LeadStatus::Contacted => stats.contacted += 1,
                LeadStatus::Qualified => stats.qualified += 1,
                LeadStatus::Lost => stats.lost += 1,
            }
            stats
        })
    }

    /// Count for a single status.
    #[must_use]
    pub fn count(&self, status: LeadStatus) -> usize {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Qualified => self.qualified,
            LeadStatus::Lost => self.lost,
        }
    }
}
