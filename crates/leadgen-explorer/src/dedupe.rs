//! Removal of repeated listings (same company at the same address).

use std::collections::HashSet;

use leadgen_core::Lead;
use sha2::{Digest, Sha256};

/// Identity key of a listing: SHA-256 over lower-cased, trimmed name and
/// address, separated by `\x00`.
#[must_use]
pub fn lead_key(lead: &Lead) -> String {
    let name = lead.name.trim().to_lowercase();
    let address = lead.address.trim().to_lowercase();
    let input = format!("{name}\x00{address}");
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

/// Keeps the first lead of every key, preserving order.
#[must_use]
pub fn dedupe_leads(leads: Vec<Lead>) -> Vec<Lead> {
    let before = leads.len();
    let mut seen = HashSet::new();
    let kept: Vec<Lead> = leads
        .into_iter()
        .filter(|lead| seen.insert(lead_key(lead)))
        .collect();

    if kept.len() < before {
        tracing::debug!(removed = before - kept.len(), "removed duplicate leads");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, name: &str, address: &str) -> Lead {
        let mut lead = Lead::new(id, name);
        lead.address = address.to_string();
        lead
    }

    #[test]
    fn key_ignores_case_and_surrounding_whitespace() {
        assert_eq!(
            lead_key(&lead("a", "Le Bistrot", "1 Rue X")),
            lead_key(&lead("b", "  le bistrot ", "1 RUE X"))
        );
    }

    #[test]
    fn key_separates_name_and_address() {
        assert_ne!(
            lead_key(&lead("a", "ab", "c")),
            lead_key(&lead("b", "a", "bc"))
        );
    }

    #[test]
    fn key_is_hex_sha256() {
        let key = lead_key(&lead("a", "x", "y"));
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let leads = vec![
            lead("json-0", "Le Bistrot", "1 Rue X"),
            lead("json-1", "Café", "2 Rue Y"),
            lead("json-2", "LE BISTROT", "1 rue x"),
            lead("json-3", "Le Bistrot", "9 Rue Z"),
        ];
        let ids: Vec<String> = dedupe_leads(leads).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["json-0", "json-1", "json-3"]);
    }
}
