//! Error types for sitemap generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitemap generation operations.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Output directory could not be created
    #[error("cannot create sitemap output directory {}: {source}", path.display())]
    DirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generated file could not be written
    #[error("cannot write sitemap file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XML document rendering failed
    #[error("XML rendering failed: {0}")]
    Render(String),
}

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
