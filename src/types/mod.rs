//! Content type model.
//!
//! Raw shapes for the two input dialects, the layout service envelope, and
//! the canonical output shape both dialects normalize into.
//!
//! Raw types are parsed defensively: a malformed nested structure degrades to
//! "absent" instead of failing the whole document.

pub mod data;
pub mod gql;
pub mod jss;
pub mod layout;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use data::{DataField, DataFieldGroup, DataImage, DataItem, DataLink, DataRoute};
pub use gql::{GqlField, GqlFieldKind, GqlItem, GqlItemResponse, GqlResponseData};
pub use jss::{JssField, JssFieldEntry, JssFieldGroup, JssFieldType, JssItem, JssPlaceholders};
pub use layout::{LayoutServiceData, RouteData, SitecoreContext};

/// Deserialize an optional nested structure, treating a malformed value as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::debug!(error = %err, "discarding malformed nested structure");
            Ok(None)
        }
    }
}

/// Deserialize a value where an explicit `null` means the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
