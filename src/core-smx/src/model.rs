//! Sitemap record types.

use serde::{Deserialize, Serialize};

/// A single URL entry in a sitemap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapUrl {
    /// The URL location, absolute or site-relative (e.g. `/about`).
    pub loc: String,
    /// Last modification date in `YYYY-MM-DD`. Replaced with the current
    /// date at write time when absent or malformed.
    #[serde(default)]
    pub lastmod: String,
    /// Change frequency hint (`always`, `hourly`, `daily`, `weekly`,
    /// `monthly`, `yearly`, `never` per the protocol). Passed through as-is.
    #[serde(default)]
    pub changefreq: String,
    /// Priority of this URL relative to others (`0.0` to `1.0`). Passed
    /// through as-is.
    #[serde(default)]
    pub priority: String,
    /// Alternate-language links for this URL, emitted in the order given.
    #[serde(default)]
    pub alternates: Vec<AlternateLink>,
}

/// A localized alternate of a URL entry.
///
/// Rendered as `<xhtml:link rel="alternate" hreflang=".." href=".."/>`.
/// Every locale variant of a page should carry the full alternate set,
/// including itself; that completeness is the caller's responsibility and is
/// not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    /// Locale identifier, e.g. `en-us`.
    pub hreflang: String,
    /// Absolute URL of that locale's version of the page.
    pub href: String,
}
