//! Top-level selection of internal-link candidates.

use std::collections::HashSet;

use tracing::debug;

use crate::config::RankerConfig;
use crate::scorer::{normalize_url, score_urls};

/// Select the most relevant sitemap URLs for a product title.
///
/// Wraps [`score_urls`] and re-checks that no two returned entries share a
/// normalized URL. The scorer already deduplicates, but callers commonly
/// merge several sitemap sources before ranking, so the guarantee is
/// enforced here as well.
pub fn select_relevant_urls(urls: &[String], title: &str, config: &RankerConfig) -> Vec<String> {
    let scored = score_urls(urls, title, config);

    let mut seen: HashSet<String> = HashSet::with_capacity(scored.len());
    let mut selected = Vec::with_capacity(scored.len());
    for entry in scored {
        if seen.insert(normalize_url(&entry.location)) {
            selected.push(entry.location);
        }
    }

    debug!(
        candidates = urls.len(),
        selected = selected.len(),
        "Selected internal-link candidates"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_ranked_locations_only() {
        let urls = vec![
            "https://x.com/about".to_string(),
            "https://x.com/collections/shoes".to_string(),
            "https://x.com/gift-guide/running-shoes".to_string(),
        ];
        let selected = select_relevant_urls(&urls, "Blue Running Shoes", &RankerConfig::default());

        assert_eq!(
            selected,
            vec![
                "https://x.com/gift-guide/running-shoes",
                "https://x.com/collections/shoes",
            ]
        );
    }

    #[test]
    fn merged_sources_cannot_produce_duplicates() {
        // Two sitemap dumps of the same site, casing and slashes differing
        let mut urls: Vec<String> = vec![
            "https://x.com/collections/shoes".to_string(),
            "https://x.com/jacket".to_string(),
        ];
        urls.push("https://X.com/collections/shoes/".to_string());
        urls.push("https://x.com/JACKET".to_string());

        let selected = select_relevant_urls(&urls, "Shoes and Jacket", &RankerConfig::default());

        assert_eq!(selected.len(), 2);
        let normalized: std::collections::HashSet<String> =
            selected.iter().map(|u| normalize_url(u)).collect();
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn empty_candidates_select_nothing() {
        assert!(select_relevant_urls(&[], "Blue Running Shoes", &RankerConfig::default()).is_empty());
    }
}
