//! Typed errors for the sitelink library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep failures
//! strongly typed at the API boundary. The pure scoring path never fails;
//! these errors belong to the orchestration layer around it.

use thiserror::Error;

/// Errors that can occur while sourcing URLs, labeling pages, or inserting links.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Sitemap source failed to produce candidate URLs
    #[error("sitemap source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP request for a page label failed
    #[error("label fetch failed for {url}: {source}")]
    LabelFetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The link inserter rejected or failed to rewrite the content
    #[error("link insertion failed: {0}")]
    Insertion(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for linking operations.
pub type LinkResult<T> = std::result::Result<T, LinkError>;
