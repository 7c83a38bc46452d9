use leadgen_core::{Lead, LeadField, LeadStatus};
use leadgen_explorer::{filter_leads, unique_values, LeadFilter, LeadStats};

/// Prints the distinct values of `field`, one per line.
pub(crate) fn run_values(leads: &[Lead], field: LeadField) {
    let values = unique_values(leads, field);
    if values.is_empty() {
        println!("no {field} values in the loaded leads");
        return;
    }
    for value in values {
        println!("{value}");
    }
}

/// Prints lead counts by status for the filtered leads.
pub(crate) fn run_stats(leads: &[Lead], filter: &LeadFilter) {
    let stats = LeadStats::from_leads(&filter_leads(leads, filter));
    println!("{:<12}{}", "total", stats.total);
    for status in LeadStatus::ALL {
        println!("{:<12}{}", status.as_str(), stats.count(status));
    }
}
