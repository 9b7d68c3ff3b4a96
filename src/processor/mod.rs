//! Data processor: normalizes JSS and GraphQL content into the canonical
//! `DataItem` / `DataField` shapes.
//!
//! - `jss`: layout service fields, field groups, items and routes
//! - `gql`: GraphQL items and their `__typename`-tagged fields
//!
//! A processor owns its `Options` and never mutates them, so one instance can
//! be shared between threads and reused for any number of documents.

mod gql;
mod jss;

use crate::Options;

/// Normalizes raw content from either dialect.
#[derive(Debug, Clone, Default)]
pub struct DataProcessor {
    options: Options,
}

impl DataProcessor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        tracing::debug!(host = %options.host, "data processor configured");
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Asset host prefix applied to GraphQL image paths.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.options.host
    }
}
