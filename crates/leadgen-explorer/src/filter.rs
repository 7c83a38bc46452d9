//! Lead filtering: the conjunction of every criterion that is set.

use leadgen_core::Lead;

/// Filter criteria. Unset (or blank) criteria do not constrain the result.
///
/// `category`, `city`, `department` and `region` match exactly, since their
/// values are offered from the batch's own distinct values. `search` is a
/// case-insensitive substring match over name, address, city and category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub region: Option<String>,
    pub has_phone: bool,
    pub has_email: bool,
    pub has_website: bool,
    pub min_rating: Option<f64>,
}

impl LeadFilter {
    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            self.search.as_deref(),
            self.category.as_deref(),
            self.city.as_deref(),
            self.department.as_deref(),
            self.region.as_deref(),
        ]
        .into_iter()
        .all(|criterion| set(criterion).is_none())
            && !self.has_phone
            && !self.has_email
            && !self.has_website
            && self.min_rating.is_none()
    }

    /// True when `lead` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(needle) = set(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            let found = [
                Some(lead.name.as_str()),
                Some(lead.address.as_str()),
                Some(lead.city.as_str()),
                lead.category.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|haystack| haystack.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        let exact = [
            (self.category.as_deref(), lead.category.as_deref().unwrap_or_default()),
            (self.city.as_deref(), lead.city.as_str()),
            (self.department.as_deref(), lead.department.as_str()),
            (self.region.as_deref(), lead.region.as_str()),
        ];
        if exact
            .into_iter()
            .any(|(criterion, value)| set(criterion).is_some_and(|wanted| wanted != value))
        {
            return false;
        }

        if self.has_phone && !present(lead.phone.as_deref()) {
            return false;
        }
        if self.has_email && !present(lead.email.as_deref()) {
            return false;
        }
        if self.has_website && !present(lead.website.as_deref()) {
            return false;
        }

        match self.min_rating {
            Some(threshold) => lead.rating.is_some_and(|rating| rating >= threshold),
            None => true,
        }
    }
}

/// Returns the leads matching `filter`, in their original order.
#[must_use]
pub fn filter_leads(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    if filter.is_empty() {
        return leads.to_vec();
    }
    leads
        .iter()
        .filter(|lead| filter.matches(lead))
        .cloned()
        .collect()
}

fn set(criterion: Option<&str>) -> Option<&str> {
    criterion
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
