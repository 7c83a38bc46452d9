pub mod batch;
pub mod dedupe;
pub mod error;
pub mod export;
pub mod filter;
pub mod geo;
pub mod normalize;
pub mod paginate;
pub mod parse;
pub mod resolve;
pub mod source;
pub mod values;

pub use batch::{Explorer, LeadBatch};
pub use dedupe::{dedupe_leads, lead_key};
pub use error::ExplorerError;
pub use export::{export_file_name, to_csv, to_csv_default, to_json, DEFAULT_EXPORT_FIELDS};
pub use filter::{filter_leads, LeadFilter};
pub use geo::{department_from_postal, department_name, region_for_department, UNKNOWN_REGION};
pub use normalize::{
    normalize, normalize_records, normalize_with_report, NormalizeOptions, NormalizeReport,
    ParseWarning,
};
pub use paginate::{paginate, total_pages, Page};
pub use resolve::{resolve_field, ColumnAliases, Headers};
pub use source::{search_all, BatchSource, LeadSource, SearchFilters, SourceError};
pub use values::{unique_values, FilterOptions, LeadStats};
