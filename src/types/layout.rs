//! Layout service response envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::jss::{JssFieldGroup, JssPlaceholders};
use super::lenient;

/// Top-level layout service document: `{ "sitecore": { "context", "route" } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutServiceData {
    pub sitecore: SitecoreContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitecoreContext {
    /// Page editing flags, language, site, ... kept as raw JSON.
    #[serde(default)]
    pub context: Map<String, Value>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteData>,
}

/// The routed page item and its placeholder renderings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fields: Option<JssFieldGroup>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<JssPlaceholders>,

    /// databaseName, deviceId, itemLanguage, templateName, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
