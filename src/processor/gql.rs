//! GraphQL normalization.

use tracing::warn;

use super::DataProcessor;
use crate::markup;
use crate::types::{DataField, DataFieldGroup, DataItem, GqlField, GqlFieldKind, GqlItem};

impl DataProcessor {
    /// Normalize a GraphQL item and, recursively, its children.
    ///
    /// The output always has a `fields` group. `children` is present only
    /// when the source item had a `children` list.
    #[must_use]
    pub fn process_gql_item(&self, item: &GqlItem) -> DataItem {
        let mut fields = DataFieldGroup::new();

        for field in &item.fields {
            if self.options.skip_system_fields && field.is_system() {
                continue;
            }

            if let Some(value) = self.process_gql_field(field) {
                fields.insert(field.name.clone(), Some(value));
            }
        }

        DataItem {
            id: item.id.clone(),
            name: item.name.clone(),
            fields: Some(fields),
            children: item
                .children
                .as_ref()
                .map(|children| children.iter().map(|child| self.process_gql_item(child)).collect()),
            ..DataItem::default()
        }
    }

    /// Entry point for a query result's item.
    #[must_use]
    pub fn process_gql_data(&self, data: &GqlItem) -> DataItem {
        self.process_gql_item(data)
    }

    /// `None` means the field is dropped from the output entirely.
    fn process_gql_field(&self, field: &GqlField) -> Option<DataField> {
        match field.kind() {
            GqlFieldKind::Text => Some(DataField::Text(field.value.clone())),
            GqlFieldKind::Image => Some(DataField::Image(markup::parse_image_tag(
                &field.rendered,
                &self.options.host,
            ))),
            GqlFieldKind::Link => Some(DataField::Link(markup::parse_link_tag(
                &field.rendered,
                &field.value,
            ))),
            GqlFieldKind::Unrecognized(typename) => {
                warn!(
                    typename = %typename,
                    field = %field.name,
                    "unable to process GraphQL field: type not recognized"
                );
                None
            }
        }
    }
}
