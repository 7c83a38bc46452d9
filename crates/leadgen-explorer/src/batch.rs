//! Loaded batches and the explorer state built on top of them.

use std::sync::Arc;

use leadgen_core::{Lead, LeadStatus};

use crate::error::ExplorerError;
use crate::filter::{filter_leads, LeadFilter};
use crate::paginate::{paginate, Page};
use crate::values::FilterOptions;

/// An immutable snapshot of loaded leads.
///
/// Updates return a new batch; snapshots already handed out never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadBatch {
    leads: Arc<[Lead]>,
}

impl From<Vec<Lead>> for LeadBatch {
    fn from(leads: Vec<Lead>) -> Self {
        Self {
            leads: leads.into(),
        }
    }
}

impl LeadBatch {
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    /// A copy of this batch with the status of lead `id` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::LeadNotFound`] if no lead has that id.
    pub fn with_status(&self, id: &str, status: LeadStatus) -> Result<Self, ExplorerError> {
        self.replace(id, |lead| lead.status = status)
    }

    /// A copy of this batch with the notes of lead `id` replaced. Blank notes
    /// clear the field.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::LeadNotFound`] if no lead has that id.
    pub fn with_notes(&self, id: &str, notes: Option<String>) -> Result<Self, ExplorerError> {
        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self.replace(id, move |lead| lead.notes = notes)
    }

    fn replace(&self, id: &str, update: impl FnOnce(&mut Lead)) -> Result<Self, ExplorerError> {
        let index = self
            .leads
            .iter()
            .position(|lead| lead.id == id)
            .ok_or_else(|| ExplorerError::LeadNotFound { id: id.to_string() })?;

        let mut leads = self.leads.to_vec();
        update(&mut leads[index]);
        Ok(Self::from(leads))
    }
}

/// Current batch, filter and page of an exploration session.
#[derive(Debug, Clone)]
pub struct Explorer {
    batch: LeadBatch,
    options: FilterOptions,
    filter: LeadFilter,
    page: usize,
    page_size: usize,
}

impl Explorer {
    #[must_use]
    pub fn new(batch: LeadBatch, page_size: usize) -> Self {
        let options = FilterOptions::from_leads(batch.leads());
        Self {
            batch,
            options,
            filter: LeadFilter::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the batch, recomputes the filter options and returns to
    /// page 1. The filter is cleared since its values may no longer exist.
    pub fn reload(&mut self, batch: LeadBatch) {
        self.options = FilterOptions::from_leads(batch.leads());
        self.batch = batch;
        self.filter = LeadFilter::default();
        self.page = 1;
        tracing::debug!(leads = self.batch.len(), "explorer reloaded");
    }

    /// Sets the filter and returns to page 1.
    pub fn set_filter(&mut self, filter: LeadFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    #[must_use]
    pub fn batch(&self) -> &LeadBatch {
        &self.batch
    }

    #[must_use]
    pub fn filter(&self) -> &LeadFilter {
        &self.filter
    }

    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Leads of the current batch that match the current filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<Lead> {
        filter_leads(self.batch.leads(), &self.filter)
    }

    #[must_use]
    pub fn current_page(&self) -> Page<Lead> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    /// Changes the status of one lead. The filter and page are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::LeadNotFound`] if no lead has that id.
    pub fn update_status(&mut self, id: &str, status: LeadStatus) -> Result<(), ExplorerError> {
        self.batch = self.batch.with_status(id, status)?;
        Ok(())
    }

    /// Changes the notes of one lead. The filter and page are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::LeadNotFound`] if no lead has that id.
    pub fn update_notes(&mut self, id: &str, notes: Option<String>) -> Result<(), ExplorerError> {
        self.batch = self.batch.with_notes(id, notes)?;
        Ok(())
    }
}
