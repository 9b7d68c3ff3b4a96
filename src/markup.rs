//! Markup Attribute Extraction
//!
//! GraphQL image and link fields do not expose their attributes as separate
//! properties. They come back as a pre-rendered `<img>`/`<a>` fragment in
//! `rendered` and, for links, Sitecore's raw `<link .../>` XML in `value`.
//! This module pulls attributes out of those strings with `name="value"`
//! patterns. Nothing here assumes well-formed markup.

use crate::patterns;
use crate::types::{DataImage, DataLink};
use crate::url_utils;

/// Extract one attribute value from a markup fragment.
///
/// Returns `None` when the attribute is absent, which is a normal outcome.
///
/// # Example
///
/// ```rust
/// use rs_jss_data::markup::extract_attribute;
///
/// let tag = r#"<img src="/-/media/hero.jpg" width="640" />"#;
/// assert_eq!(extract_attribute(tag, "width").as_deref(), Some("640"));
/// assert_eq!(extract_attribute(tag, "alt"), None);
/// ```
#[must_use]
pub fn extract_attribute(fragment: &str, name: &str) -> Option<String> {
    let captures = if let Some(re) = patterns::known_attribute(name) {
        re.captures(fragment)
    } else {
        patterns::attribute_pattern(name)?.captures(fragment)
    }?;

    captures.get(1).map(|m| m.as_str().to_string())
}

fn attribute_or_empty(fragment: &str, name: &str) -> String {
    extract_attribute(fragment, name).unwrap_or_default()
}

/// Build an image record from a rendered `<img>` fragment.
///
/// Every key is present; attributes that are missing become `""`. A matched
/// `src` is prefixed with `host`.
#[must_use]
pub fn parse_image_tag(rendered: &str, host: &str) -> DataImage {
    let src = extract_attribute(rendered, "src")
        .map(|path| url_utils::prefix_host(host, &path))
        .unwrap_or_default();

    DataImage {
        src: Some(src),
        width: Some(attribute_or_empty(rendered, "width")),
        height: Some(attribute_or_empty(rendered, "height")),
        alt: Some(attribute_or_empty(rendered, "alt")),
    }
}

/// Build a link record from a GraphQL link field.
///
/// `href` only exists on the rendered `<a>`; `target`, `title`, `text`,
/// `anchor` and `linktype` only exist on the raw `<link>` value. Missing
/// attributes become `""`. `url` and `querystring` are not available in
/// this dialect and stay absent.
#[must_use]
pub fn parse_link_tag(rendered: &str, value: &str) -> DataLink {
    DataLink {
        href: Some(attribute_or_empty(rendered, "href")),
        text: Some(attribute_or_empty(value, "text")),
        url: None,
        anchor: Some(attribute_or_empty(value, "anchor")),
        linktype: Some(attribute_or_empty(value, "linktype")),
        target: Some(attribute_or_empty(value, "target")),
        title: Some(attribute_or_empty(value, "title")),
        querystring: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_known_and_adhoc_attributes() {
        let tag = r#"<a href="/about" rel="noopener" class="cta">About</a>"#;
        assert_eq!(extract_attribute(tag, "href").as_deref(), Some("/about"));
        assert_eq!(extract_attribute(tag, "rel").as_deref(), Some("noopener"));
        assert_eq!(extract_attribute(tag, "class").as_deref(), Some("cta"));
    }

    #[test]
    fn test_extract_missing_attribute_is_none() {
        assert_eq!(extract_attribute("<img />", "src"), None);
        assert_eq!(extract_attribute("", "href"), None);
        assert_eq!(extract_attribute("not markup at all", "title"), None);
    }

    #[test]
    fn test_parse_image_tag_prefixes_host() {
        let image = parse_image_tag(r#"<img src="/x.png" width="100">"#, "https://cdn.example.com/");

        assert_eq!(image.src.as_deref(), Some("https://cdn.example.com//x.png"));
        assert_eq!(image.width.as_deref(), Some("100"));
        assert_eq!(image.height.as_deref(), Some(""));
        assert_eq!(image.alt.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_image_tag_without_src_leaves_it_empty() {
        let image = parse_image_tag("", "https://cdn.example.com");
        assert_eq!(image.src.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_link_tag_merges_rendered_and_value() {
        let rendered = r#"<a href="/contact" title="Contact">Contact us</a>"#;
        let value = r#"<link text="Contact" anchor="" linktype="internal" target="_self" id="{1}" />"#;

        let link = parse_link_tag(rendered, value);

        assert_eq!(link.href.as_deref(), Some("/contact"));
        assert_eq!(link.text.as_deref(), Some("Contact"));
        assert_eq!(link.anchor.as_deref(), Some(""));
        assert_eq!(link.linktype.as_deref(), Some("internal"));
        assert_eq!(link.target.as_deref(), Some("_self"));
        // title is read from the value only
        assert_eq!(link.title.as_deref(), Some(""));
        assert!(link.url.is_none());
        assert!(link.querystring.is_none());
    }
}
