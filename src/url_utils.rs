//! URL Utility Functions
//!
//! Host checks for `Options::validate` and asset path prefixing for images
//! read out of GraphQL renderings.

use url::Url;

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Prefix an extracted asset path with the configured host.
///
/// Plain concatenation: Sitecore renders media paths root-relative, and the
/// host is configured to match, so nothing is resolved or deduplicated here.
#[must_use]
pub fn prefix_host(host: &str, path: &str) -> String {
    let mut out = String::with_capacity(host.len() + path.len());
    out.push_str(host);
    out.push_str(path);
    out
}
