//! URL resolution utilities.

use url::Url;

/// Checks whether a location already carries a scheme (is absolute).
///
/// # Examples
///
/// ```
/// # use core_smx::is_absolute_url;
/// assert!(is_absolute_url("https://example.com/about"));
/// assert!(!is_absolute_url("/about"));
/// assert!(!is_absolute_url("example.com/about"));
/// ```
pub fn is_absolute_url(location: &str) -> bool {
    Url::parse(location).is_ok()
}

/// Resolves a location against the site base URL.
///
/// Absolute locations pass through verbatim; site-relative paths are
/// prefixed with the base. A schemeless base (e.g. `example.com`) is legal
/// and used as-is.
///
/// # Examples
///
/// ```
/// # use core_smx::resolve_location;
/// assert_eq!(
///     resolve_location("https://example.com", "/about"),
///     "https://example.com/about"
/// );
/// assert_eq!(
///     resolve_location("https://example.com", "https://other.org/x"),
///     "https://other.org/x"
/// );
/// ```
pub fn resolve_location(base_url: &str, location: &str) -> String {
    if is_absolute_url(location) {
        return location.to_string();
    }
    join_url(base_url, location)
}

/// Joins a base URL and a path segment with exactly one `/` between them,
/// regardless of trailing/leading slashes on either side.
///
/// # Examples
///
/// ```
/// # use core_smx::join_url;
/// assert_eq!(
///     join_url("https://example.com/sitemaps/", "sitemap_1.xml"),
///     "https://example.com/sitemaps/sitemap_1.xml"
/// );
/// assert_eq!(
///     join_url("https://example.com/sitemaps", "sitemap_1.xml"),
///     "https://example.com/sitemaps/sitemap_1.xml"
/// );
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
