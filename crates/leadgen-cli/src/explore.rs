use leadgen_core::Lead;
use leadgen_explorer::{Explorer, LeadBatch, LeadFilter};

/// Prints one page of the filtered leads as a table.
pub(crate) fn run_explore(leads: Vec<Lead>, filter: LeadFilter, page: usize, page_size: usize) {
    let mut explorer = Explorer::new(LeadBatch::from(leads), page_size);
    explorer.set_filter(filter);
    explorer.set_page(page);
    let current = explorer.current_page();

    if current.total_items == 0 {
        println!("no leads match the current filters");
        return;
    }

    println!(
        "{:<10}{:<32}{:<20}{:<6}{:<24}{:<7}STATUS",
        "ID", "NAME", "CITY", "DEPT", "CATEGORY", "RATING"
    );
    for lead in &current.items {
        println!(
            "{:<10}{:<32}{:<20}{:<6}{:<24}{:<7}{}",
            lead.id,
            truncate(&lead.name, 30),
            truncate(&lead.city, 18),
            lead.department,
            truncate(lead.category.as_deref().unwrap_or("\u{2014}"), 22),
            lead.rating.map_or_else(|| "\u{2014}".to_string(), |r| format!("{r:.1}")),
            lead.status,
        );
    }
    println!();
    println!(
        "page {} of {} ({} leads)",
        current.page, current.total_pages, current.total_items
    );
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max - 3).collect::<String>())
    } else {
        value.to_string()
    }
}
