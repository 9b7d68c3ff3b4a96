//! Link resolution.
//!
//! Renderers receive link data in two forms: the raw JSS `General Link`
//! field (attributes under `value`) or an already normalized `DataLink`.
//! `LinkSource` names the form explicitly and `resolve_link` reduces either
//! to the attributes an anchor needs.

use serde_json::Value;

use crate::types::{DataLink, JssField};

/// `linktype` of links that point inside the site.
pub const INTERNAL_LINKTYPE: &str = "internal";

/// Which form the link data arrives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkSource<'a> {
    /// A raw JSS field; its `value` object holds the attributes.
    Raw(&'a JssField),
    /// A link already produced by the processor.
    Normalized(&'a DataLink),
}

/// Anchor attributes derived from a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLink {
    /// `url` when set, else `href`. Sitecore prepends `http://` to the
    /// `href` of `tel:` links; `url` keeps the original.
    pub href: Option<String>,
    pub title: Option<String>,
    pub target: Option<String>,
    pub text: Option<String>,
    /// Internal links navigate inside the application instead of reloading.
    pub is_internal: bool,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn raw_prop(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reduce either link form to anchor attributes.
///
/// # Example
///
/// ```rust
/// use rs_jss_data::link::{resolve_link, LinkSource};
/// use rs_jss_data::types::DataLink;
///
/// let link = DataLink {
///     href: Some("http://tel:18002224444".to_string()),
///     url: Some("tel:18002224444".to_string()),
///     ..DataLink::default()
/// };
/// let resolved = resolve_link(LinkSource::Normalized(&link));
/// assert_eq!(resolved.href.as_deref(), Some("tel:18002224444"));
/// ```
#[must_use]
pub fn resolve_link(source: LinkSource<'_>) -> ResolvedLink {
    let link = match source {
        LinkSource::Raw(field) => DataLink {
            href: raw_prop(&field.value, "href"),
            text: raw_prop(&field.value, "text"),
            url: raw_prop(&field.value, "url"),
            linktype: raw_prop(&field.value, "linktype"),
            target: raw_prop(&field.value, "target"),
            title: raw_prop(&field.value, "title"),
            ..DataLink::default()
        },
        LinkSource::Normalized(link) => link.clone(),
    };

    ResolvedLink {
        is_internal: link.linktype.as_deref() == Some(INTERNAL_LINKTYPE),
        href: non_empty(link.url).or_else(|| non_empty(link.href)),
        title: non_empty(link.title),
        target: non_empty(link.target),
        text: link.text,
    }
}
