//! Configuration options for sitemap generation.

/// Maximum URL entries per generated sitemap file, per the sitemap protocol.
pub const DEFAULT_MAX_URLS: usize = 50_000;

/// Configuration options for a [`SitemapWriter`](crate::SitemapWriter).
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Cap on URL entries per generated sitemap file (default: 50,000, the
    /// sitemap protocol's per-file limit).
    pub max_urls: usize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            max_urls: DEFAULT_MAX_URLS,
        }
    }
}

impl SitemapOptions {
    /// Creates a new builder for SitemapOptions.
    pub fn builder() -> SitemapOptionsBuilder {
        SitemapOptionsBuilder::default()
    }
}

/// Builder for SitemapOptions.
#[derive(Debug, Clone, Default)]
pub struct SitemapOptionsBuilder {
    max_urls: Option<usize>,
}

impl SitemapOptionsBuilder {
    /// Sets the per-file URL cap.
    pub fn max_urls(mut self, max_urls: usize) -> Self {
        self.max_urls = Some(max_urls);
        self
    }

    /// Builds the SitemapOptions.
    pub fn build(self) -> SitemapOptions {
        SitemapOptions {
            max_urls: self.max_urls.unwrap_or(DEFAULT_MAX_URLS),
        }
    }
}
