//! Compiled regex patterns for markup attribute extraction.
//!
//! The attributes the processor reads on every GraphQL image and link field
//! are compiled once using `LazyLock`. Any other attribute name is compiled on
//! demand by `attribute_pattern`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Build the `name="value"` pattern for one attribute.
///
/// The value is captured up to the last `"` before the first whitespace, so
/// `alt="Two words"` does not match at all. Sitecore renders media and link
/// attributes without spaces except in free text, and callers treat a miss as
/// an empty attribute.
///
/// There is no boundary before the name: `src` also matches inside
/// `data-src="..."` when that attribute comes first.
#[must_use]
pub fn attribute_source(name: &str) -> String {
    format!(r#"{}="([^ ]*)""#, regex::escape(name))
}

/// Compile the pattern for an attribute name that has no static.
#[must_use]
pub fn attribute_pattern(name: &str) -> Option<Regex> {
    Regex::new(&attribute_source(name)).ok()
}

macro_rules! attribute_regex {
    ($(#[$doc:meta])* $ident:ident, $name:literal) => {
        $(#[$doc])*
        pub static $ident: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&attribute_source($name)).expect(concat!($name, " attribute regex"))
        });
    };
}

// =============================================================================
// Image Attributes (ImageField.rendered)
// =============================================================================

attribute_regex!(
    /// `src` of a rendered `<img>`.
    SRC_ATTR, "src"
);
attribute_regex!(WIDTH_ATTR, "width");
attribute_regex!(HEIGHT_ATTR, "height");
attribute_regex!(ALT_ATTR, "alt");

// =============================================================================
// Link Attributes (LinkField.rendered and LinkField.value)
// =============================================================================

attribute_regex!(
    /// `href` of a rendered `<a>`. Only present on `rendered`.
    HREF_ATTR, "href"
);
attribute_regex!(TARGET_ATTR, "target");
attribute_regex!(TITLE_ATTR, "title");
attribute_regex!(TEXT_ATTR, "text");
attribute_regex!(ANCHOR_ATTR, "anchor");
attribute_regex!(LINKTYPE_ATTR, "linktype");

/// Look up the precompiled pattern for a known attribute name.
#[must_use]
pub fn known_attribute(name: &str) -> Option<&'static Regex> {
    let re: &'static LazyLock<Regex> = match name {
        "src" => &SRC_ATTR,
        "width" => &WIDTH_ATTR,
        "height" => &HEIGHT_ATTR,
        "alt" => &ALT_ATTR,
        "href" => &HREF_ATTR,
        "target" => &TARGET_ATTR,
        "title" => &TITLE_ATTR,
        "text" => &TEXT_ATTR,
        "anchor" => &ANCHOR_ATTR,
        "linktype" => &LINKTYPE_ATTR,
        _ => return None,
    };
    Some(LazyLock::force(re))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_attr_captures_unquoted_path() {
        let caps = SRC_ATTR.captures(r#"<img src="/-/media/a.png" alt="A" />"#).expect("match");
        assert_eq!(&caps[1], "/-/media/a.png");
    }

    #[test]
    fn value_stops_at_first_whitespace() {
        assert!(ALT_ATTR.captures(r#"<img alt="two words" />"#).is_none());
    }

    #[test]
    fn empty_value_is_captured() {
        let caps = ANCHOR_ATTR.captures(r#"<link anchor="" linktype="internal" />"#).expect("match");
        assert_eq!(&caps[1], "");
    }

    #[test]
    fn known_attribute_covers_processor_attributes() {
        for name in ["src", "width", "height", "alt", "href", "target", "title", "text", "anchor", "linktype"] {
            assert!(known_attribute(name).is_some(), "{name} should be precompiled");
        }
        assert!(known_attribute("rel").is_none());
    }

    #[test]
    fn attribute_pattern_escapes_name() {
        let re = attribute_pattern("data.id").expect("compiles");
        assert!(re.is_match(r#"<div data.id="7">"#));
        assert!(!re.is_match(r#"<div dataxid="7">"#));
    }
}
