pub mod client;
pub mod csv_reader;
pub mod error;
pub mod json;
pub mod load;

pub use client::{Dataset, DatasetClient, DatasetVariant, FULL_DATASET_FILE, LIGHT_DATASET_FILE};
pub use csv_reader::{read_csv_file, read_csv_records};
pub use error::IngestError;
pub use json::read_json_file;
pub use load::load_path;
