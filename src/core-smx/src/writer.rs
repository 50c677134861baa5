//! The sitemap writer: accumulates URL entries and writes the generated
//! files to an output directory.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::config::SitemapOptions;
use crate::errors::{Result, SitemapError};
use crate::model::SitemapUrl;
use crate::render::{render_sitemap_index, render_urlset};
use crate::stylesheet::{STYLESHEET, STYLESHEET_FILENAME};

/// Accumulates URL entries and writes sitemap pages, an optional sitemap
/// index, and the companion stylesheet to an output directory.
///
/// One writer serves one generation run: construct it, add entries, then
/// call [`write`](SitemapWriter::write) once. A writer is a plain value with
/// no shared state; independent runs never interfere.
#[derive(Debug, Clone)]
pub struct SitemapWriter {
    out_dir: PathBuf,
    base_url: String,
    urls: Vec<SitemapUrl>,
    max_urls: usize,
}

impl SitemapWriter {
    /// Creates a writer targeting `out_dir`, resolving site-relative entry
    /// locations against `base_url`. Does not touch the filesystem.
    pub fn new(out_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self::with_options(out_dir, base_url, SitemapOptions::default())
    }

    /// Creates a writer with explicit [`SitemapOptions`].
    pub fn with_options(
        out_dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
        options: SitemapOptions,
    ) -> Self {
        Self {
            out_dir: out_dir.into(),
            base_url: base_url.into(),
            urls: Vec::new(),
            max_urls: options.max_urls,
        }
    }

    /// Appends a URL entry. Entries keep insertion order, which determines
    /// their page assignment; field validation is deferred to write time.
    pub fn add_url(&mut self, url: SitemapUrl) {
        self.urls.push(url);
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Per-file URL cap this writer partitions with.
    pub fn max_urls(&self) -> usize {
        self.max_urls
    }

    /// Writes all generated files under the output directory.
    ///
    /// `public_sitemap_base_url` is the public URL under which the generated
    /// files will be served; the sitemap index joins it with each page's
    /// filename.
    ///
    /// Entries are partitioned into consecutive pages of at most
    /// [`max_urls`](SitemapWriter::max_urls) entries each. A single page is
    /// written as `sitemap.xml` with no index; multiple pages are written as
    /// `sitemap_1.xml` … `sitemap_N.xml` plus `sitemap_index.xml`. The
    /// stylesheet is always written, whatever the entry count.
    ///
    /// # Errors
    ///
    /// Returns an error when the output directory cannot be created or a
    /// file cannot be written; the error names the offending path. Files
    /// written before the failure stay on disk, nothing is rolled back.
    pub fn write(&self, public_sitemap_base_url: &str) -> Result<()> {
        self.write_at(public_sitemap_base_url, Utc::now().date_naive())
    }

    /// Like [`write`](SitemapWriter::write), with an explicit date used to
    /// replace absent or malformed `lastmod` values. Output is fully
    /// deterministic for a fixed `today`.
    pub fn write_at(&self, public_sitemap_base_url: &str, today: NaiveDate) -> Result<()> {
        fs::create_dir_all(&self.out_dir).map_err(|source| SitemapError::DirCreate {
            path: self.out_dir.clone(),
            source,
        })?;

        let pages: Vec<&[SitemapUrl]> = self.urls.chunks(self.max_urls).collect();

        let filenames: Vec<String> = if pages.len() == 1 {
            vec!["sitemap.xml".to_string()]
        } else {
            (1..=pages.len()).map(|i| format!("sitemap_{i}.xml")).collect()
        };

        for (page, filename) in pages.iter().zip(&filenames) {
            let document = render_urlset(page, &self.base_url, today)?;
            self.write_file(filename, &document)?;
        }

        if pages.len() > 1 {
            let index = render_sitemap_index(&filenames, public_sitemap_base_url)?;
            self.write_file("sitemap_index.xml", &index)?;
        }

        self.write_file(STYLESHEET_FILENAME, STYLESHEET)?;

        info!(
            "Wrote {} sitemap pages covering {} URLs to {}",
            pages.len(),
            self.urls.len(),
            self.out_dir.display()
        );
        Ok(())
    }

    fn write_file(&self, filename: &str, contents: &str) -> Result<()> {
        let path = self.out_dir.join(filename);
        fs::write(&path, contents).map_err(|source| SitemapError::FileWrite {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitemapOptions;
    use tempfile::TempDir;

    fn entry(loc: &str) -> SitemapUrl {
        SitemapUrl {
            loc: loc.to_string(),
            lastmod: "2026-01-01".to_string(),
            changefreq: "weekly".to_string(),
            priority: "0.5".to_string(),
            alternates: Vec::new(),
        }
    }

    fn writer_with_max(dir: &TempDir, max_urls: usize) -> SitemapWriter {
        SitemapWriter::with_options(
            dir.path(),
            "https://example.com",
            SitemapOptions::builder().max_urls(max_urls).build(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    #[test]
    fn test_single_page_uses_plain_filename() {
        let dir = TempDir::new().unwrap();
        let mut sm = writer_with_max(&dir, 10);
        for i in 0..3 {
            sm.add_url(entry(&format!("/p/{i}")));
        }
        sm.write_at("https://example.com/sitemaps/", today()).unwrap();

        assert!(dir.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("sitemap_1.xml").exists());
        assert!(!dir.path().join("sitemap_index.xml").exists());
        assert!(dir.path().join("sitemap.xsl").exists());
    }

    #[test]
    fn test_multiple_pages_are_numbered_and_indexed() {
        let dir = TempDir::new().unwrap();
        let mut sm = writer_with_max(&dir, 2);
        for i in 0..5 {
            sm.add_url(entry(&format!("/p/{i}")));
        }
        sm.write_at("https://example.com/sitemaps/", today()).unwrap();

        // ceil(5 / 2) pages
        assert!(dir.path().join("sitemap_1.xml").exists());
        assert!(dir.path().join("sitemap_2.xml").exists());
        assert!(dir.path().join("sitemap_3.xml").exists());
        assert!(!dir.path().join("sitemap_4.xml").exists());
        assert!(!dir.path().join("sitemap.xml").exists());
        assert!(dir.path().join("sitemap_index.xml").exists());
    }

    #[test]
    fn test_zero_entries_writes_only_stylesheet() {
        let dir = TempDir::new().unwrap();
        let sm = writer_with_max(&dir, 10);
        sm.write_at("https://example.com/sitemaps/", today()).unwrap();

        assert!(dir.path().join("sitemap.xsl").exists());
        assert!(!dir.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("sitemap_index.xml").exists());
    }

    #[test]
    fn test_write_fails_when_out_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "x").unwrap();

        let sm = SitemapWriter::new(&blocker, "https://example.com");
        let err = sm.write("https://example.com/sitemaps/").unwrap_err();
        assert!(matches!(err, SitemapError::DirCreate { .. }));
    }

    #[test]
    fn test_default_cap_is_protocol_limit() {
        let sm = SitemapWriter::new("./unused", "https://example.com");
        assert_eq!(sm.max_urls(), 50_000);
        assert!(sm.is_empty());
    }
}
