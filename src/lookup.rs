//! Tree Lookup
//!
//! Breadth-first search over raw JSS items. Siblings are always visited
//! before anything nested below them, so the shallowest match wins. A miss
//! is `None`; nothing here logs or fails.

use std::collections::VecDeque;
use std::slice;

use crate::types::{JssFieldEntry, JssItem, JssPlaceholders};

/// Find the first item, breadth-first, for which `is_match` holds.
///
/// Each dequeued item's nested `fields.items` are queued behind the
/// remaining items of the current level.
///
/// # Example
///
/// ```rust
/// use rs_jss_data::lookup::find_in_jss;
/// use rs_jss_data::types::{JssFieldGroup, JssItem};
///
/// let items = vec![JssItem::named("a", JssFieldGroup::default()), JssItem::named("b", JssFieldGroup::default())];
/// let found = find_in_jss(&items, |i| i.name.as_deref() == Some("b"));
/// assert!(found.is_some());
/// ```
pub fn find_in_jss<'a, P>(roots: &'a [JssItem], is_match: P) -> Option<&'a JssItem>
where
    P: FnMut(&JssItem) -> bool,
{
    find_in_jss_map(roots, is_match, |item| item)
}

/// Like `find_in_jss`, but returns `get_value` applied to the matched item.
pub fn find_in_jss_map<'a, T, P, G>(roots: &'a [JssItem], mut is_match: P, get_value: G) -> Option<T>
where
    P: FnMut(&JssItem) -> bool,
    G: FnOnce(&'a JssItem) -> T,
{
    let mut queue: VecDeque<&'a JssItem> = roots.iter().collect();

    while let Some(current) = queue.pop_front() {
        if is_match(current) {
            return Some(get_value(current));
        }

        queue.extend(current.child_items());
    }

    None
}

/// Find a nested item by `name`.
#[must_use]
pub fn find_item_by_name<'a>(roots: &'a [JssItem], name: &str) -> Option<&'a JssItem> {
    find_in_jss(roots, |item| item.name.as_deref() == Some(name))
}

/// Find a field on `item` or, failing that, on the nearest nested item that
/// carries it.
///
/// Only set fields count: an entry that is `null`, `""`, `false` or `0` is
/// skipped and the search continues below.
#[must_use]
pub fn find_field<'a>(item: &'a JssItem, field_name: &str) -> Option<&'a JssFieldEntry> {
    find_in_jss_map(
        slice::from_ref(item),
        |candidate| candidate.truthy_field(field_name).is_some(),
        |found| found.truthy_field(field_name),
    )
    .flatten()
}

/// Whether a rendering answers to `identifier` by uid, component name, or
/// (as a substring) datasource.
#[must_use]
pub fn rendering_matches(rendering: &JssItem, identifier: &str) -> bool {
    rendering.uid.as_deref() == Some(identifier)
        || rendering.component_name.as_deref() == Some(identifier)
        || rendering
            .data_source
            .as_deref()
            .is_some_and(|ds| ds.contains(identifier))
}

/// Find a rendering across placeholders, breadth-first.
///
/// Renderings in the given placeholders are checked first (in placeholder
/// order); a rendering that does not match queues its own placeholders.
#[must_use]
pub fn find_component<'a>(placeholders: &'a JssPlaceholders, identifier: &str) -> Option<&'a JssItem> {
    let mut queue: VecDeque<&'a JssItem> = placeholders.values().flatten().collect();

    while let Some(current) = queue.pop_front() {
        if rendering_matches(current, identifier) {
            return Some(current);
        }

        if let Some(nested) = &current.placeholders {
            queue.extend(nested.values().flatten());
        }
    }

    None
}
