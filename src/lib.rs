//! # rs-jss-data
//!
//! Normalizes Sitecore content into one canonical tree.
//!
//! Sitecore hands content to a front end in two shapes: the JSS layout
//! service JSON (fields tagged with `fieldType`, nested items under `items`)
//! and GraphQL item graphs (fields tagged with `__typename`, images and links
//! only available as pre-rendered HTML). This library turns both into the
//! same `DataItem` / `DataField` shape, with nested items under `children`.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_jss_data::{normalize_jss, Options};
//!
//! let json = r#"{
//!     "componentName": "Promo",
//!     "fields": {
//!         "heading": { "fieldType": "Single-Line Text", "value": "Hello" },
//!         "items": [ { "name": "first", "fields": {} } ]
//!     }
//! }"#;
//!
//! let item = normalize_jss(json, &Options::default())?.expect("item");
//! assert_eq!(item.field("heading").and_then(|f| f.as_str()), Some("Hello"));
//! assert_eq!(item.children.as_ref().map(Vec::len), Some(1));
//! # Ok::<(), rs_jss_data::Error>(())
//! ```
//!
//! ## Features
//!
//! - **JSS normalization**: thirteen field types, reference flattening,
//!   `items` → `children`
//! - **GraphQL normalization**: text, image and link fields, attributes read
//!   out of rendered markup
//! - **Lookup**: breadth-first search for named items, fields and renderings
//! - **Graceful degradation**: unknown types and missing data become `None`
//!   plus a `tracing` diagnostic, never an error

mod error;
mod options;
mod patterns;

/// Raw and canonical content types.
pub mod types;

/// JSS and GraphQL normalization.
pub mod processor;

/// Attribute extraction from rendered markup.
pub mod markup;

/// Breadth-first lookup over raw JSS trees.
pub mod lookup;

/// Lookup and fetch facade.
pub mod service;

/// Anchor attributes from either link form.
pub mod link;

/// URL utilities for host validation and asset prefixing.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use processor::DataProcessor;
pub use service::{DataService, ItemSource, RawResolved, Resolved};
pub use types::{DataField, DataFieldGroup, DataImage, DataItem, DataLink, DataRoute};

use types::{GqlItem, JssItem, LayoutServiceData};

/// Parse a JSS item or rendering from JSON text.
pub fn parse_jss_item(json: &str) -> Result<JssItem> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a GraphQL item (not the response envelope) from JSON text.
pub fn parse_gql_item(json: &str) -> Result<GqlItem> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a full layout service response from JSON text.
pub fn parse_layout(json: &str) -> Result<LayoutServiceData> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and normalize a JSS item or rendering.
///
/// A JSON `null` document yields `Ok(None)`.
pub fn normalize_jss(json: &str, options: &Options) -> Result<Option<DataItem>> {
    let item: Option<JssItem> = serde_json::from_str(json)?;
    let processor = DataProcessor::new(options.clone());
    Ok(processor.process_jss_item(item.as_ref()))
}

/// Parse and normalize a GraphQL item.
pub fn normalize_gql(json: &str, options: &Options) -> Result<DataItem> {
    let item = parse_gql_item(json)?;
    let processor = DataProcessor::new(options.clone());
    Ok(processor.process_gql_data(&item))
}
