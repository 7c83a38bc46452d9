use leadgen_core::LeadStatus;
use leadgen_explorer::{
    filter_leads, normalize_with_report, paginate, to_csv_default, Explorer, LeadBatch,
    LeadFilter, LeadStats, NormalizeOptions,
};
use serde_json::json;

fn raw_batch() -> serde_json::Value {
    json!([
        {"Company Name": "Le Bistrot", "Zip": "75001", "CATEGORY": "Restaurant"},
        {"Company Name": "Café des Arts", "Zip": "69002", "CATEGORY": "Café"},
        {"Company Name": "", "Zip": "13001", "CATEGORY": "Restaurant"}
    ])
}

#[test]
fn normalize_filter_paginate_returns_the_paris_restaurant() {
    let report = normalize_with_report(&raw_batch(), &NormalizeOptions::default()).unwrap();
    assert_eq!(report.leads.len(), 2);
    assert_eq!(report.dropped, 1);

    let filter = LeadFilter {
        category: Some("Restaurant".into()),
        ..LeadFilter::default()
    };
    let filtered = filter_leads(&report.leads, &filter);
    let page = paginate(&filtered, 1, 10);

    assert_eq!(page.total_items, 1);
    assert_eq!(page.total_pages, 1);
    let lead = &page.items[0];
    assert_eq!(lead.id, "json-0");
    assert_eq!(lead.name, "Le Bistrot");
    assert_eq!(lead.postal_code, "75001");
    assert_eq!(lead.department, "75");
    assert_eq!(lead.region, "Île-de-France");
}

#[test]
fn explorer_session_updates_status_and_exports() {
    let report = normalize_with_report(&raw_batch(), &NormalizeOptions::default()).unwrap();
    let mut explorer = Explorer::new(LeadBatch::from(report.leads), 50);
    assert_eq!(explorer.options().categories, ["Café", "Restaurant"]);
    assert_eq!(explorer.options().regions, ["Auvergne-Rhône-Alpes", "Île-de-France"]);

    explorer.update_status("json-1", LeadStatus::Contacted).unwrap();
    let stats = LeadStats::from_leads(explorer.batch().leads());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.new, 1);
    assert_eq!(stats.contacted, 1);

    explorer.set_filter(LeadFilter {
        region: Some("Auvergne-Rhône-Alpes".into()),
        ..LeadFilter::default()
    });
    let csv = to_csv_default(&explorer.filtered());
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("\"Café des Arts\",\"\",\"\",\"\",\"\",\"Café\""));
    assert!(rows[1].contains("\"contacted\""));
}
