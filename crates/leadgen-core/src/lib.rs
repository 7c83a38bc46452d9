pub mod app_config;
pub mod columns;
pub mod config;
pub mod lead;

pub use app_config::{AppConfig, Environment};
pub use columns::{
    load_column_overrides, parse_column_overrides, Alias, ColumnOverrides, MatchMode,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{Lead, LeadField, LeadStatus, RawRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read column alias file {path}: {source}")]
    ColumnsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse column alias file: {0}")]
    ColumnsFileParse(#[from] serde_yaml::Error),

    #[error("column alias validation failed: {0}")]
    Validation(String),
}
