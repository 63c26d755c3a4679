//! Sitemap URL relevance ranking for internal-link insertion.
//!
//! Given a product title and a site's sitemap URLs, scores each URL by
//! lexical and structural similarity to the title and selects the best
//! candidates for contextual internal links. The scoring core is pure and
//! synchronous; a thin async layer labels the winners and hands them to a
//! pluggable inserter.

pub mod config;
pub mod error;
pub mod keywords;
pub mod labeler;
pub mod linker;
pub mod ranker;
pub mod scorer;
pub mod similarity;
pub mod testing;

// Re-exports for clean API
pub use config::{LinkerConfig, RankerConfig};
pub use error::{LinkError, LinkResult};
pub use keywords::{extract_keywords, TitleKeywords};
pub use labeler::{label_from_path, HttpPageLabeler, PageLabeler};
pub use linker::{InternalLinker, LabeledLink, LinkInserter, SitemapSource};
pub use ranker::select_relevant_urls;
pub use scorer::{normalize_url, score_urls, ScoredUrl};
pub use similarity::{best_similarity, levenshtein, similarity};
