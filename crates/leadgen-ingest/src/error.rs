use thiserror::Error;

/// Errors returned while acquiring raw records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file or stream could not be read.
    #[error("failed to read {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The input was not valid JSON.
    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The file extension names a format that cannot be read (e.g. `xlsx`).
    #[error("unsupported input format '{extension}' for {path}; export it as JSON or CSV")]
    UnsupportedFormat { path: String, extension: String },
}
