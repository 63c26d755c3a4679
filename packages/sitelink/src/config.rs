//! Configuration for ranking and link orchestration.

use serde::{Deserialize, Serialize};

/// Title tokens ignored during keyword extraction.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "with", "the", "and", "for", "from", "this", "that", "our", "your", "product", "item", "buy",
    "shop", "store", "price", "shipping", "cart",
];

/// Closed vocabulary of product-category nouns.
pub const DEFAULT_CATEGORY_TERMS: &[&str] = &[
    "shirt",
    "pants",
    "shoes",
    "dress",
    "jacket",
    "accessories",
    "furniture",
    "electronics",
];

/// Configuration for URL relevance ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Minimum score a URL must exceed to be selected
    pub score_threshold: f64,
    /// Maximum number of URLs returned
    pub max_results: usize,
    /// Title tokens dropped before matching
    pub stopwords: Vec<String>,
    /// Closed vocabulary of category nouns
    pub category_terms: Vec<String>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            score_threshold: 1.5,
            max_results: 10,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            category_terms: DEFAULT_CATEGORY_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RankerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_category_terms(mut self, category_terms: Vec<String>) -> Self {
        self.category_terms = category_terms;
        self
    }
}

/// Configuration for the internal-link orchestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkerConfig {
    /// Delay between successive label fetches, in milliseconds
    pub fetch_delay_ms: u64,
    /// Maximum number of links the inserter is asked to place
    pub max_inserted_links: usize,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 500,
            max_inserted_links: 3,
        }
    }
}

impl LinkerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_delay_ms(mut self, ms: u64) -> Self {
        self.fetch_delay_ms = ms;
        self
    }

    pub fn with_max_inserted_links(mut self, max_links: usize) -> Self {
        self.max_inserted_links = max_links;
        self
    }
}
