//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the sitelink library
//! without making real network or LLM calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{LinkError, LinkResult};
use crate::labeler::PageLabeler;
use crate::linker::{LabeledLink, LinkInserter, SitemapSource};

/// A mock sitemap source with canned URL lists per site.
#[derive(Default)]
pub struct MockSitemapSource {
    urls: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl MockSitemapSource {
    /// Create a new mock sitemap source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add canned URLs for a site.
    pub fn with_urls(self, site_url: impl Into<String>, urls: Vec<String>) -> Self {
        self.urls.write().unwrap().insert(site_url.into(), urls);
        self
    }
}

#[async_trait]
impl SitemapSource for MockSitemapSource {
    async fn urls(&self, site_url: &str) -> LinkResult<Vec<String>> {
        Ok(self
            .urls
            .read()
            .unwrap()
            .get(site_url)
            .cloned()
            .unwrap_or_default())
    }
}

/// A mock labeler returning canned labels; unlisted URLs fail the fetch.
#[derive(Default)]
pub struct MockPageLabeler {
    labels: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockPageLabeler {
    /// Create a new mock labeler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned label for a URL.
    pub fn with_label(self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.write().unwrap().insert(url.into(), label.into());
        self
    }

    /// URLs labeled so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageLabeler for MockPageLabeler {
    async fn label(&self, url: &str) -> LinkResult<String> {
        self.calls.write().unwrap().push(url.to_string());
        self.labels
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| LinkError::LabelFetch {
                url: url.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "no label configured",
                )),
            })
    }
}

/// Record of a call made to the mock inserter.
#[derive(Debug, Clone)]
pub struct InsertCall {
    pub title: String,
    pub links: Vec<LabeledLink>,
    pub max_links: usize,
}

/// A mock inserter that appends a markdown link list to the content.
#[derive(Default)]
pub struct MockLinkInserter {
    calls: Arc<RwLock<Vec<InsertCall>>>,
}

impl MockLinkInserter {
    /// Create a new mock inserter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, for assertions.
    pub fn calls(&self) -> Vec<InsertCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl LinkInserter for MockLinkInserter {
    async fn insert_links(
        &self,
        content: &str,
        title: &str,
        links: &[LabeledLink],
        max_links: usize,
    ) -> LinkResult<String> {
        self.calls.write().unwrap().push(InsertCall {
            title: title.to_string(),
            links: links.to_vec(),
            max_links,
        });

        let rendered: Vec<String> = links
            .iter()
            .take(max_links)
            .map(|link| format!("[{}]({})", link.label, link.url))
            .collect();
        Ok(format!("{}\n\n{}", content, rendered.join("\n")))
    }
}
