use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Local dataset used when no `--file`/`--url` is passed.
    pub data_path: PathBuf,
    /// Base URL serving `prospects-data-light.json` / `prospects-data.json`.
    pub data_url: Option<String>,
    /// Optional YAML file adding column aliases on top of the built-in tables.
    pub columns_path: Option<PathBuf>,
    pub page_size: usize,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Prefix for generated lead ids (`"<prefix>-<row>"`).
    pub id_prefix: String,
}
