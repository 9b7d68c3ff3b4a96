//! Raw JSS layout service shapes (the "tree" dialect).
//!
//! Fields carry a `fieldType` tag and nested items live under the reserved
//! `items` key of a field group.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::lenient;

/// The `fieldType` tags the normalizer understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JssFieldType {
    SingleLineText,
    MultiLineText,
    RichText,
    Checkbox,
    Image,
    GeneralLink,
    Droplist,
    Droplink,
    Droptree,
    MultilistWithSearch,
    Treelist,
    Integer,
    Number,
    /// Any tag not listed above, kept verbatim for diagnostics.
    Unrecognized(String),
}

impl JssFieldType {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Single-Line Text" => Self::SingleLineText,
            "Multi-Line Text" => Self::MultiLineText,
            "Rich Text" => Self::RichText,
            "Checkbox" => Self::Checkbox,
            "Image" => Self::Image,
            "General Link" => Self::GeneralLink,
            "Droplist" => Self::Droplist,
            "Droplink" => Self::Droplink,
            "Droptree" => Self::Droptree,
            "Multilist with Search" => Self::MultilistWithSearch,
            "Treelist" => Self::Treelist,
            "Integer" => Self::Integer,
            "Number" => Self::Number,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The tag as Sitecore writes it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SingleLineText => "Single-Line Text",
            Self::MultiLineText => "Multi-Line Text",
            Self::RichText => "Rich Text",
            Self::Checkbox => "Checkbox",
            Self::Image => "Image",
            Self::GeneralLink => "General Link",
            Self::Droplist => "Droplist",
            Self::Droplink => "Droplink",
            Self::Droptree => "Droptree",
            Self::MultilistWithSearch => "Multilist with Search",
            Self::Treelist => "Treelist",
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for JssFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw JSS field.
///
/// Scalar, image and link types keep their payload in `value`; reference
/// types keep the referenced item's field group in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JssField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,

    /// Item id of a referenced item. A non-string id reads as absent.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Experience Editor markup, present only in editing mode.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub editable: Option<String>,

    /// Field group of the referenced item (Droplink, Droptree, ...).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fields: Option<JssFieldGroup>,

    /// `name`, `displayName` and any other key of a referenced item.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JssField {
    /// A field with the given tag and scalar value.
    #[must_use]
    pub fn new(field_type: &str, value: impl Into<Value>) -> Self {
        Self {
            field_type: Some(field_type.to_string()),
            value: value.into(),
            ..Self::default()
        }
    }

    /// The parsed `fieldType`, or `None` when the field has no tag at all.
    #[must_use]
    pub fn kind(&self) -> Option<JssFieldType> {
        self.field_type.as_deref().map(JssFieldType::from_tag)
    }
}

/// What a field group key maps to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JssFieldEntry {
    /// A single field object.
    Single(JssField),
    /// An array of fields (multi-value references).
    Multiple(Vec<JssField>),
    /// Anything else, kept so lookups still see it.
    Other(Value),
}

impl JssFieldEntry {
    /// Classify a raw JSON value without failing.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => match serde_json::from_value::<JssField>(value.clone()) {
                Ok(field) => Self::Single(field),
                Err(err) => {
                    warn!(error = %err, "unable to read JSS field object; keeping it as raw JSON");
                    Self::Other(value)
                }
            },
            Value::Array(_) => match serde_json::from_value::<Vec<JssField>>(value.clone()) {
                Ok(fields) => Self::Multiple(fields),
                Err(_) => Self::Other(value),
            },
            other => Self::Other(other),
        }
    }

    /// Whether the entry would count as set in a JavaScript condition.
    ///
    /// Objects and arrays always do; `null`, `false`, `""` and `0` do not.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Single(_) | Self::Multiple(_) => true,
            Self::Other(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::String(s) => !s.is_empty(),
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

impl From<JssField> for JssFieldEntry {
    fn from(field: JssField) -> Self {
        Self::Single(field)
    }
}

impl From<Vec<JssField>> for JssFieldEntry {
    fn from(fields: Vec<JssField>) -> Self {
        Self::Multiple(fields)
    }
}

impl<'de> Deserialize<'de> for JssFieldEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

/// A field group: named fields plus the reserved `items` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JssFieldGroup {
    /// Nested items. Never treated as a field.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<JssItem>>,

    #[serde(flatten)]
    pub fields: IndexMap<String, JssFieldEntry>,
}

impl JssFieldGroup {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JssFieldEntry> {
        self.fields.get(name)
    }

    /// Builder-style insert, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, name: &str, entry: impl Into<JssFieldEntry>) -> Self {
        self.fields.insert(name.to_string(), entry.into());
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<JssItem>) -> Self {
        self.items = Some(items);
        self
    }
}

/// Placeholder name to the renderings placed in it, in document order.
pub type JssPlaceholders = IndexMap<String, Vec<JssItem>>;

/// A JSS item or component rendering.
///
/// The layout service uses one loose shape for both: renderings carry
/// `componentName`/`uid`/`dataSource`, datasource children carry `name`.
/// Keys not modelled here are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JssItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<JssPlaceholders>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fields: Option<JssFieldGroup>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JssItem {
    /// An item with just a name and a field group.
    #[must_use]
    pub fn named(name: &str, fields: JssFieldGroup) -> Self {
        Self {
            name: Some(name.to_string()),
            fields: Some(fields),
            ..Self::default()
        }
    }

    /// Nested items under `fields.items`, empty when there are none.
    #[must_use]
    pub fn child_items(&self) -> &[JssItem] {
        self.fields
            .as_ref()
            .and_then(|f| f.items.as_deref())
            .unwrap_or_default()
    }

    /// The named field when it is set (see `JssFieldEntry::is_truthy`).
    #[must_use]
    pub fn truthy_field(&self, name: &str) -> Option<&JssFieldEntry> {
        self.fields
            .as_ref()
            .and_then(|f| f.get(name))
            .filter(|entry| entry.is_truthy())
    }
}
