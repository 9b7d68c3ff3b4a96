//! JSS (layout service) normalization.
//!
//! Fields dispatch on `fieldType`. Reference types (Droplink, Droptree,
//! Multilist with Search, Treelist) flatten the referenced item's field group
//! through `process_jss_fields`, the same path an item's own fields take.

use serde_json::Value;
use tracing::{debug, warn};

use super::DataProcessor;
use crate::types::{
    DataField, DataFieldGroup, DataImage, DataItem, DataLink, DataRoute, JssField, JssFieldEntry,
    JssFieldGroup, JssFieldType, JssItem, RouteData,
};

impl DataProcessor {
    /// Normalize one field group entry.
    ///
    /// `None` and non-field values normalize to `None`. An array normalizes
    /// element by element into a `DataField::List` of the same length and
    /// order.
    #[must_use]
    pub fn process_jss_field(&self, entry: Option<&JssFieldEntry>) -> Option<DataField> {
        match entry? {
            JssFieldEntry::Single(field) => self.process_jss_single_field(field),
            JssFieldEntry::Multiple(fields) => Some(DataField::List(
                fields
                    .iter()
                    .map(|field| self.process_jss_single_field(field))
                    .collect(),
            )),
            JssFieldEntry::Other(_) => None,
        }
    }

    /// Normalize one field object according to its `fieldType`.
    ///
    /// An unrecognized tag logs a warning and yields `None`. A field with no
    /// tag at all yields `None` silently.
    #[must_use]
    pub fn process_jss_single_field(&self, field: &JssField) -> Option<DataField> {
        let field_type = field.kind()?;

        match &field_type {
            JssFieldType::SingleLineText
            | JssFieldType::MultiLineText
            | JssFieldType::RichText
            | JssFieldType::Checkbox
            | JssFieldType::Integer
            | JssFieldType::Number
            | JssFieldType::Droplist => scalar(&field.value, &field_type),

            JssFieldType::Image => project_image(&field.value).map(DataField::Image),

            JssFieldType::GeneralLink => project_link(&field.value).map(DataField::Link),

            JssFieldType::Droplink
            | JssFieldType::Droptree
            | JssFieldType::MultilistWithSearch
            | JssFieldType::Treelist => {
                if let Some(group) = &field.fields {
                    Some(DataField::Group(self.process_jss_fields(group)))
                } else {
                    debug!(field_type = %field_type, "reference field without a field group");
                    None
                }
            }

            JssFieldType::Unrecognized(tag) => {
                warn!(field_type = %tag, "unable to process JSS field: type not recognized");
                None
            }
        }
    }

    /// Normalize every field of a group. The `items` key is not a field and
    /// is left to `process_jss_item`.
    #[must_use]
    pub fn process_jss_fields(&self, fields: &JssFieldGroup) -> DataFieldGroup {
        fields
            .fields
            .iter()
            .map(|(name, entry)| (name.clone(), self.process_jss_field(Some(entry))))
            .collect()
    }

    /// Normalize an item or rendering and, recursively, its nested items.
    ///
    /// Returns `None` only for a `None` input. Every non-field property is
    /// copied; nested `fields.items` become `children`.
    #[must_use]
    pub fn process_jss_item(&self, item: Option<&JssItem>) -> Option<DataItem> {
        item.map(|item| self.normalize_jss_item(item))
    }

    fn normalize_jss_item(&self, item: &JssItem) -> DataItem {
        let children = item
            .fields
            .as_ref()
            .and_then(|fields| fields.items.as_ref())
            .map(|items| items.iter().map(|child| self.normalize_jss_item(child)).collect());

        DataItem {
            id: item.id.clone(),
            name: item.name.clone(),
            display_name: item.display_name.clone(),
            component_name: item.component_name.clone(),
            uid: item.uid.clone(),
            data_source: item.data_source.clone(),
            params: item.params.clone(),
            placeholders: item.placeholders.clone(),
            fields: item.fields.as_ref().map(|fields| self.process_jss_fields(fields)),
            children,
            extra: item.extra.clone(),
        }
    }

    /// Normalize a layout service route: its own fields and each top-level
    /// placeholder rendering.
    #[must_use]
    pub fn process_jss_route(&self, route: &RouteData) -> DataRoute {
        let placeholders = route
            .placeholders
            .iter()
            .flatten()
            .map(|(name, renderings)| {
                let renderings = renderings
                    .iter()
                    .map(|rendering| self.normalize_jss_item(rendering))
                    .collect();
                (name.clone(), renderings)
            })
            .collect();

        DataRoute {
            name: route.name.clone(),
            display_name: route.display_name.clone(),
            item_id: route.item_id.clone(),
            fields: route.fields.as_ref().map(|fields| self.process_jss_fields(fields)),
            placeholders,
            extra: route.extra.clone(),
        }
    }
}

/// Pass a scalar `value` through unchanged.
fn scalar(value: &Value, field_type: &JssFieldType) -> Option<DataField> {
    match value {
        Value::String(s) => Some(DataField::Text(s.clone())),
        Value::Bool(b) => Some(DataField::Bool(*b)),
        Value::Number(n) => Some(DataField::Number(n.clone())),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => {
            debug!(field_type = %field_type, "non-scalar value on a scalar field type");
            None
        }
    }
}

/// Read a property as a string, accepting numbers and booleans as written.
fn string_prop(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn project_image(value: &Value) -> Option<DataImage> {
    if !value.is_object() {
        debug!("image field without an object value");
        return None;
    }

    Some(DataImage {
        src: string_prop(value, "src"),
        width: string_prop(value, "width"),
        height: string_prop(value, "height"),
        alt: string_prop(value, "alt"),
    })
}

fn project_link(value: &Value) -> Option<DataLink> {
    if !value.is_object() {
        debug!("general link field without an object value");
        return None;
    }

    Some(DataLink {
        href: string_prop(value, "href"),
        text: string_prop(value, "text"),
        url: string_prop(value, "url"),
        anchor: string_prop(value, "anchor"),
        linktype: string_prop(value, "linktype"),
        target: string_prop(value, "target"),
        title: string_prop(value, "title"),
        querystring: string_prop(value, "querystring"),
    })
}
