//! URL relevance scoring.
//!
//! Scores sitemap URLs against a product title by combining structural
//! path bonuses, keyword similarity bonuses, and penalties, then
//! deduplicates on the normalized URL keeping the highest score. The whole
//! pass is pure: no I/O, no mutation of inputs.

use std::sync::LazyLock;

use indexmap::map::Entry;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::RankerConfig;
use crate::keywords::{extract_keywords, TitleKeywords};
use crate::similarity::best_similarity;

// Score adjustments
const SCORE_EXCLUDED: f64 = -1.0;
const SCORE_SHORT_PATH: f64 = 0.5; // <= 3 segments
const SCORE_CATEGORY_PATH: f64 = 1.0;
const SCORE_COLLECTION_PATH: f64 = 1.0;
const SCORE_GUIDE_PATH: f64 = 1.5;
const SCORE_BLOG_PATH: f64 = 0.5;
const SCORE_PAGE_PENALTY: f64 = -0.5;
const SCORE_DEEP_PATH_PENALTY: f64 = -0.2; // > 4 segments

// Keyword match weights
const CATEGORY_MATCH_WEIGHT: f64 = 3.0;
const STRONG_MATCH_WEIGHT: f64 = 2.0; // similarity > 0.8
const GOOD_MATCH_WEIGHT: f64 = 1.0; // 0.6 < similarity <= 0.8
const WEAK_MATCH_WEIGHT: f64 = 0.5; // 0.4 < similarity <= 0.6
const REVERSE_MATCH_CUTOFF: f64 = 0.7;

/// Path segments that mark transactional or account pages.
const EXCLUDED_SEGMENTS: &[&str] = &["cart", "checkout", "account", "login", "register"];

/// Path substrings that mark listing, tag, and CMS chrome pages.
const EXCLUDED_PATTERNS: &[&str] = &["/page/", "/tag/", "/author/", "/wp-"];

/// Blog date archives like /2023/05/.
static DATE_ARCHIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}/\d{2}").unwrap());

/// A sitemap URL with its computed relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredUrl {
    pub location: String,
    pub score: f64,
}

/// Normalize a URL for deduplication: lowercased, trailing slashes stripped.
pub fn normalize_url(url: &str) -> String {
    url.to_lowercase().trim_end_matches('/').to_string()
}

/// Score candidate URLs against a product title.
///
/// Returns the deduplicated entries whose score clears the configured
/// threshold, best first, capped at the configured maximum. Ties keep the
/// original input order. Unparseable URLs are skipped, never fatal.
pub fn score_urls(urls: &[String], title: &str, config: &RankerConfig) -> Vec<ScoredUrl> {
    let keywords = extract_keywords(title, config);
    let mut by_location: IndexMap<String, ScoredUrl> = IndexMap::new();

    for location in urls {
        let parsed = match Url::parse(location) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(url = %location, %error, "Skipping unparseable sitemap URL");
                continue;
            }
        };

        let path = parsed.path().to_lowercase();
        let segments = path_segments(&path);
        let score = score_path(&path, &segments, &keywords);
        debug!(url = %location, score, "Scored sitemap URL");

        match by_location.entry(normalize_url(location)) {
            Entry::Occupied(mut entry) => {
                if score > entry.get().score {
                    *entry.get_mut() = ScoredUrl {
                        location: location.clone(),
                        score,
                    };
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(ScoredUrl {
                    location: location.clone(),
                    score,
                });
            }
        }
    }

    // Excluded URLs sit at -1 and are never selectable, whatever the threshold.
    let mut selected: Vec<ScoredUrl> = by_location
        .into_values()
        .filter(|s| s.score > config.score_threshold && s.score > SCORE_EXCLUDED)
        .collect();
    selected.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    selected.truncate(config.max_results);
    selected
}

/// Split a lowercased path into non-empty segments on `/` and `-`.
fn path_segments(path: &str) -> Vec<String> {
    path.split(['/', '-'])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn score_path(path: &str, segments: &[String], keywords: &TitleKeywords) -> f64 {
    if is_excluded(path, segments) {
        return SCORE_EXCLUDED;
    }

    let mut score = 0.0;

    // Structural bonuses
    if segments.len() <= 3 {
        score += SCORE_SHORT_PATH;
    }
    if path.contains("category") {
        score += SCORE_CATEGORY_PATH;
    }
    if path.contains("collection") {
        score += SCORE_COLLECTION_PATH;
    }
    if path.contains("guide") {
        score += SCORE_GUIDE_PATH;
    }
    if path.contains("blog") {
        score += SCORE_BLOG_PATH;
    }

    // Category keywords weigh heaviest
    for category in &keywords.categories {
        score += CATEGORY_MATCH_WEIGHT * best_similarity(category, segments);
    }

    // Tiered bonus for every title keyword, category ones included
    for word in &keywords.words {
        let s = best_similarity(word, segments);
        if s > 0.8 {
            score += STRONG_MATCH_WEIGHT * s;
        } else if s > 0.6 {
            score += GOOD_MATCH_WEIGHT * s;
        } else if s > 0.4 {
            score += WEAK_MATCH_WEIGHT * s;
        }
    }

    // Reverse pass: segments matching back into the title reinforce the
    // score on top of the keyword bonuses above.
    for segment in segments {
        if segment.chars().count() > 3 {
            let s = best_similarity(segment, &keywords.words);
            if s > REVERSE_MATCH_CUTOFF {
                score += s;
            }
        }
    }

    // The "page" penalty is a substring check, so it also catches paths
    // like /homepage that the /page/ exclusion above does not.
    if path.contains("page") {
        score += SCORE_PAGE_PENALTY;
    }
    if segments.len() > 4 {
        score += SCORE_DEEP_PATH_PENALTY;
    }

    score
}

fn is_excluded(path: &str, segments: &[String]) -> bool {
    EXCLUDED_PATTERNS.iter().any(|p| path.contains(p))
        || DATE_ARCHIVE.is_match(path)
        || segments
            .iter()
            .any(|s| EXCLUDED_SEGMENTS.contains(&s.as_str()))
}
