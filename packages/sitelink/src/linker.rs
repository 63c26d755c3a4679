//! Internal-link orchestration.
//!
//! Ranks sitemap URLs for a product, labels the winners, and hands the
//! labeled links to a pluggable inserter. Label fetches run sequentially
//! with a fixed delay so a site is never hammered; the ranking itself is
//! pure and happens up front.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{LinkerConfig, RankerConfig};
use crate::error::LinkResult;
use crate::labeler::{label_from_path, PageLabeler};
use crate::ranker::select_relevant_urls;

/// A ranked URL paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledLink {
    pub url: String,
    pub label: String,
}

/// Source of candidate sitemap URLs for a site.
#[async_trait]
pub trait SitemapSource: Send + Sync {
    /// Return the flat list of candidate URLs for a site.
    async fn urls(&self, site_url: &str) -> LinkResult<Vec<String>>;
}

/// Seam through which the caller's LLM client splices links into content.
#[async_trait]
pub trait LinkInserter: Send + Sync {
    /// Rewrite `content`, inserting at most `max_links` of the given links.
    ///
    /// Implementations must use the URLs exactly as provided.
    async fn insert_links(
        &self,
        content: &str,
        title: &str,
        links: &[LabeledLink],
        max_links: usize,
    ) -> LinkResult<String>;
}

/// Orchestrates ranking, labeling, and insertion.
pub struct InternalLinker<L: PageLabeler, I: LinkInserter> {
    labeler: L,
    inserter: I,
    ranker_config: RankerConfig,
    linker_config: LinkerConfig,
}

impl<L: PageLabeler, I: LinkInserter> InternalLinker<L, I> {
    /// Create a linker with default configuration.
    pub fn new(labeler: L, inserter: I) -> Self {
        Self {
            labeler,
            inserter,
            ranker_config: RankerConfig::default(),
            linker_config: LinkerConfig::default(),
        }
    }

    /// Override the ranking configuration.
    pub fn with_ranker_config(mut self, config: RankerConfig) -> Self {
        self.ranker_config = config;
        self
    }

    /// Override the orchestration configuration.
    pub fn with_linker_config(mut self, config: LinkerConfig) -> Self {
        self.linker_config = config;
        self
    }

    /// Rank `urls` for `title`, label the winners, and rewrite `content`.
    ///
    /// `content` is the generated product description being enriched; it is
    /// passed through to the inserter untouched by the scoring. When no URL
    /// clears the relevance threshold the content comes back unchanged and
    /// the inserter is never called. A failed label fetch degrades to a
    /// path-derived label rather than dropping the link.
    pub async fn link(&self, content: &str, title: &str, urls: &[String]) -> LinkResult<String> {
        let selected = select_relevant_urls(urls, title, &self.ranker_config);
        if selected.is_empty() {
            info!(title = %title, "No relevant internal links found");
            return Ok(content.to_string());
        }

        let mut links = Vec::with_capacity(selected.len());
        for (i, url) in selected.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(Duration::from_millis(self.linker_config.fetch_delay_ms)).await;
            }
            let label = match self.labeler.label(url).await {
                Ok(label) => label,
                Err(error) => {
                    warn!(url = %url, %error, "Label fetch failed, using path fallback");
                    label_from_path(url)
                }
            };
            links.push(LabeledLink {
                url: url.clone(),
                label,
            });
        }

        info!(title = %title, links = links.len(), "Inserting internal links");
        self.inserter
            .insert_links(
                content,
                title,
                &links,
                self.linker_config.max_inserted_links,
            )
            .await
    }

    /// Pull candidate URLs from a sitemap source, then [`link`](Self::link).
    pub async fn link_from_source<S: SitemapSource>(
        &self,
        source: &S,
        site_url: &str,
        content: &str,
        title: &str,
    ) -> LinkResult<String> {
        let urls = source.urls(site_url).await?;
        self.link(content, title, &urls).await
    }
}
