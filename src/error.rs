//! Error types for rs-jss-data.
//!
//! Normalization itself never fails: unknown field types, missing items and
//! lookup misses surface as `None` plus a diagnostic. These variants cover the
//! crate boundary only (reading raw JSON, querying an item source, options).

/// Error type for boundary operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw input could not be read as the expected content dialect.
    #[error("Content parsing failed: {0}")]
    ParseError(String),

    /// The GraphQL item source failed to answer a query.
    #[error("Item query failed: {0}")]
    TransportError(String),

    /// `fetch` was called on a service that has no item source.
    #[error("No item source configured")]
    NoItemSource,

    /// A configuration value was rejected by `Options::validate`.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
