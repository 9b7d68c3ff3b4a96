//! Raw GraphQL item shapes (the "graph" dialect).
//!
//! Fields are an ordered list tagged with `__typename`. Image and link fields
//! only expose their attributes inside pre-rendered HTML in `rendered` (and,
//! for links, the raw `<link .../>` XML in `value`).

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Prefix Sitecore uses for system fields such as `__Created`.
pub const SYSTEM_FIELD_PREFIX: &str = "__";

/// The `__typename` values the normalizer understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GqlFieldKind {
    Text,
    Image,
    Link,
    Unrecognized(String),
}

impl GqlFieldKind {
    #[must_use]
    pub fn from_typename(typename: &str) -> Self {
        match typename {
            "TextField" => Self::Text,
            "ImageField" => Self::Image,
            "LinkField" => Self::Link,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// One GraphQL field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GqlField {
    #[serde(rename = "__typename", default, deserialize_with = "null_as_default")]
    pub typename: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rendered: String,
}

impl GqlField {
    #[must_use]
    pub fn kind(&self) -> GqlFieldKind {
        GqlFieldKind::from_typename(&self.typename)
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        self.name.starts_with(SYSTEM_FIELD_PREFIX)
    }
}

/// One GraphQL item with its fields and (optionally queried) children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GqlItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<GqlField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<GqlItem>>,
}

/// Response envelope of the item query: `{ "data": { "item": ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GqlItemResponse {
    #[serde(default)]
    pub data: GqlResponseData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GqlResponseData {
    /// Queried item. Context-item queries name it `contextItem`.
    #[serde(default, alias = "contextItem")]
    pub item: Option<GqlItem>,
}
