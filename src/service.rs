//! Data service facade.
//!
//! Answers the questions a component asks about its rendering ("the whole
//! thing", "the nested item named X", "the field named Y") and fetches
//! GraphQL items through a pluggable `ItemSource`. Raw variants return
//! borrowed JSS data; normalized variants run it through the `DataProcessor`.

use std::fmt;

use tracing::warn;

use crate::lookup;
use crate::processor::DataProcessor;
use crate::types::{DataField, DataItem, GqlItemResponse, JssFieldEntry, JssItem, LayoutServiceData};
use crate::{Error, Options, Result};

/// Transport for GraphQL item queries.
///
/// Implementations run the item query with `path` as its only variable and
/// return the decoded response. Any closure with the same signature works.
pub trait ItemSource {
    fn query_item(&self, path: &str) -> Result<GqlItemResponse>;
}

impl<F> ItemSource for F
where
    F: Fn(&str) -> Result<GqlItemResponse>,
{
    fn query_item(&self, path: &str) -> Result<GqlItemResponse> {
        self(path)
    }
}

/// A normalized lookup result.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The rendering itself or a named nested item.
    Item(DataItem),
    /// A single field.
    Field(DataField),
}

impl Resolved {
    #[must_use]
    pub fn into_item(self) -> Option<DataItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Field(_) => None,
        }
    }

    #[must_use]
    pub fn into_field(self) -> Option<DataField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Item(_) => None,
        }
    }
}

/// A raw lookup result borrowed from the rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawResolved<'a> {
    Item(&'a JssItem),
    Field(&'a JssFieldEntry),
}

/// Lookup and fetch facade over one `DataProcessor`.
pub struct DataService {
    processor: DataProcessor,
    layout: Option<LayoutServiceData>,
    item_source: Option<Box<dyn ItemSource>>,
}

impl fmt::Debug for DataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataService")
            .field("processor", &self.processor)
            .field("has_layout", &self.layout.is_some())
            .field("has_item_source", &self.item_source.is_some())
            .finish()
    }
}

impl Default for DataService {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// JavaScript-style presence: an empty name counts as not given.
fn given(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

impl DataService {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            processor: DataProcessor::new(options),
            layout: None,
            item_source: None,
        }
    }

    /// Attach the GraphQL transport used by `fetch`.
    #[must_use]
    pub fn with_item_source(mut self, source: impl ItemSource + 'static) -> Self {
        self.item_source = Some(Box::new(source));
        self
    }

    #[must_use]
    pub fn processor(&self) -> &DataProcessor {
        &self.processor
    }

    /// Replace the current layout service data.
    pub fn set_data(&mut self, data: LayoutServiceData) {
        self.layout = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&LayoutServiceData> {
        self.layout.as_ref()
    }

    /// Query one item by GUID or path and normalize it.
    ///
    /// An empty `guid` logs a warning and returns `Ok(None)` without querying.
    /// A response without an item is also `Ok(None)`.
    pub fn fetch(&self, guid: &str) -> Result<Option<DataItem>> {
        if guid.is_empty() {
            warn!("one or more required fields are missing: no item id specified");
            return Ok(None);
        }

        let source = self.item_source.as_ref().ok_or(Error::NoItemSource)?;
        let response = source.query_item(guid)?;

        Ok(response
            .data
            .item
            .as_ref()
            .map(|item| self.processor.process_gql_data(item)))
    }

    /// Look up raw data in a rendering.
    ///
    /// | item_name | field_name | result |
    /// |---|---|---|
    /// | - | - | the rendering |
    /// | set | - | nested item with that name (breadth-first) |
    /// | - | set | first field with that name, on the rendering or below |
    /// | set | set | that field, on the named item or below |
    ///
    /// A missing rendering logs a warning and returns `None`.
    #[must_use]
    pub fn get_raw<'a>(
        &self,
        rendering: Option<&'a JssItem>,
        item_name: Option<&str>,
        field_name: Option<&str>,
    ) -> Option<RawResolved<'a>> {
        let Some(rendering) = rendering else {
            warn!("no rendering specified");
            return None;
        };

        match (given(item_name), given(field_name)) {
            (None, None) => Some(RawResolved::Item(rendering)),
            (Some(item_name), None) => {
                lookup::find_item_by_name(rendering.child_items(), item_name).map(RawResolved::Item)
            }
            (None, Some(field_name)) => lookup::find_field(rendering, field_name).map(RawResolved::Field),
            (Some(item_name), Some(field_name)) => {
                let item = lookup::find_item_by_name(rendering.child_items(), item_name)?;
                lookup::find_field(item, field_name).map(RawResolved::Field)
            }
        }
    }

    /// Same lookup as `get_raw`, normalized.
    #[must_use]
    pub fn get(
        &self,
        rendering: Option<&JssItem>,
        item_name: Option<&str>,
        field_name: Option<&str>,
    ) -> Option<Resolved> {
        match self.get_raw(rendering, item_name, field_name)? {
            RawResolved::Item(item) => self.processor.process_jss_item(Some(item)).map(Resolved::Item),
            RawResolved::Field(entry) => self.processor.process_jss_field(Some(entry)).map(Resolved::Field),
        }
    }

    /// The whole rendering, normalized.
    #[must_use]
    pub fn get_rendering(&self, rendering: &JssItem) -> Option<DataItem> {
        self.get(Some(rendering), None, None).and_then(Resolved::into_item)
    }

    /// A named nested item, normalized.
    #[must_use]
    pub fn get_item(&self, rendering: &JssItem, item_name: &str) -> Option<DataItem> {
        self.get(Some(rendering), Some(item_name), None).and_then(Resolved::into_item)
    }

    /// A field by name, optionally scoped to a named nested item, normalized.
    #[must_use]
    pub fn get_field(&self, rendering: &JssItem, item_name: Option<&str>, field_name: &str) -> Option<DataField> {
        if field_name.is_empty() {
            warn!("no field name specified");
            return None;
        }
        self.get(Some(rendering), item_name, Some(field_name)).and_then(Resolved::into_field)
    }

    /// Find a rendering on the current route by uid, component name, or
    /// datasource (substring).
    #[must_use]
    pub fn get_component(&self, identifier: &str) -> Option<&JssItem> {
        let Some(layout) = &self.layout else {
            warn!("unable to find component: no layout service data is present");
            return None;
        };

        if identifier.is_empty() {
            warn!("unable to find component: no identifier specified");
            return None;
        }

        let placeholders = layout.sitecore.route.as_ref()?.placeholders.as_ref()?;
        lookup::find_component(placeholders, identifier)
    }
}
