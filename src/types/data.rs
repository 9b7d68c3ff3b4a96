//! Canonical output shapes.
//!
//! Both dialects normalize into these. Nested items always live under
//! `children`; the JSS `items` key never appears in a field group.
//!
//! Output types only serialize: the JSON of a `DataField` is the bare value
//! (string, bool, number, object or array), which cannot be read back
//! unambiguously.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::jss::JssPlaceholders;

/// One normalized field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataField {
    Text(String),
    Bool(bool),
    Number(Number),
    Image(DataImage),
    Link(DataLink),
    /// Flattened field group of a referenced item.
    Group(DataFieldGroup),
    /// Multi-value field, in source order. Elements that failed to
    /// normalize stay in place as `None`.
    List(Vec<Option<DataField>>),
}

impl DataField {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_image(&self) -> Option<&DataImage> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_link(&self) -> Option<&DataLink> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&DataFieldGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Option<DataField>]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Image record. Keys missing from the source are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Link record. Keys missing from the source are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Sitecore's `url` keeps special schemes intact (`tel:` etc.) where
    /// `href` may have been rewritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linktype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub querystring: Option<String>,
}

/// Field name to normalized value. `None` serializes as `null`.
pub type DataFieldGroup = IndexMap<String, Option<DataField>>;

/// One normalized item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,

    /// Nested renderings, copied as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<JssPlaceholders>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<DataFieldGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DataItem>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataItem {
    /// A normalized field by name. `None` both for a missing field and for
    /// a field that normalized to `null`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&DataField> {
        self.fields.as_ref()?.get(name)?.as_ref()
    }

    /// First direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&DataItem> {
        self.children
            .as_ref()?
            .iter()
            .find(|child| child.name.as_deref() == Some(name))
    }
}

/// A normalized route: route fields plus normalized top-level renderings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<DataFieldGroup>,

    pub placeholders: IndexMap<String, Vec<DataItem>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
