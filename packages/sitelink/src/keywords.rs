//! Title keyword extraction.
//!
//! Turns a product title into the keyword sets the scorer matches against
//! URL path segments: all retained tokens, plus the subset that belongs to
//! the closed category vocabulary.

use crate::config::RankerConfig;

/// Keywords extracted from a product title.
///
/// `words` keeps title order (with duplicates removed) so that scoring is
/// deterministic; `categories` is the intersection with the configured
/// category vocabulary, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleKeywords {
    pub words: Vec<String>,
    pub categories: Vec<String>,
}

impl TitleKeywords {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract keywords from a product title.
///
/// Splits on whitespace and hyphens, lowercases every token, and drops
/// tokens of length <= 3 or present in the stopword list. An empty or
/// whitespace-only title yields an empty set.
pub fn extract_keywords(title: &str, config: &RankerConfig) -> TitleKeywords {
    let mut words: Vec<String> = Vec::new();

    for token in title.split(|c: char| c.is_whitespace() || c == '-') {
        let token = token.to_lowercase();
        if token.chars().count() <= 3 {
            continue;
        }
        if config.stopwords.iter().any(|s| *s == token) {
            continue;
        }
        if words.contains(&token) {
            continue;
        }
        words.push(token);
    }

    let categories = words
        .iter()
        .filter(|w| config.category_terms.iter().any(|c| c == *w))
        .cloned()
        .collect();

    TitleKeywords { words, categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(title: &str) -> TitleKeywords {
        extract_keywords(title, &RankerConfig::default())
    }

    #[test]
    fn lowercases_and_keeps_title_order() {
        let keywords = extract("Blue Running Shoes");
        assert_eq!(keywords.words, vec!["blue", "running", "shoes"]);
        assert_eq!(keywords.categories, vec!["shoes"]);
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        // "for" and "with" are stopwords, "men" is too short
        let keywords = extract("Leather Jacket for Men with Zipper");
        assert_eq!(keywords.words, vec!["leather", "jacket", "zipper"]);
        assert_eq!(keywords.categories, vec!["jacket"]);
    }

    #[test]
    fn splits_on_hyphens() {
        let keywords = extract("Long-Sleeve Cotton T-Shirt");
        assert_eq!(keywords.words, vec!["long", "sleeve", "cotton", "shirt"]);
        assert_eq!(keywords.categories, vec!["shirt"]);
    }

    #[test]
    fn deduplicates_repeated_tokens() {
        let keywords = extract("Shoes Shoes SHOES");
        assert_eq!(keywords.words, vec!["shoes"]);
    }

    #[test]
    fn empty_title_yields_empty_set() {
        assert!(extract("").is_empty());
        assert!(extract("   \t ").is_empty());
    }

    #[test]
    fn respects_custom_vocabulary() {
        let config = RankerConfig::default()
            .with_stopwords(vec!["sofa".to_string()])
            .with_category_terms(vec!["sectional".to_string()]);

        let keywords = extract_keywords("Sectional Sofa Grey", &config);
        assert_eq!(keywords.words, vec!["sectional", "grey"]);
        assert_eq!(keywords.categories, vec!["sectional"]);
    }
}
