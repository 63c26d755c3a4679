//! Page labeling for ranked URLs.
//!
//! The link inserter needs a human-readable label for every URL it places.
//! Labels come from the page markup (`<title>`, `og:title`, then `<h1>`),
//! with the last path segment as the fallback when the page gives nothing.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::error::{LinkError, LinkResult};

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title[^>]*>(.*?)</title>").unwrap());
static OG_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta[^>]+property=["']og:title["'][^>]+content=["']([^"']+)["']"#).unwrap()
});
static H1_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").unwrap());
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Trait for turning a URL into a link label.
#[async_trait]
pub trait PageLabeler: Send + Sync {
    /// Fetch and return a label for the page at `url`.
    async fn label(&self, url: &str) -> LinkResult<String>;
}

/// HTTP labeler that reads the page's own title markup.
pub struct HttpPageLabeler {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpPageLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPageLabeler {
    /// Create a new HTTP labeler with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "SitelinkBot/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Extract a label from HTML, trying `<title>`, `og:title`, then `<h1>`.
    fn extract_label(html: &str) -> Option<String> {
        for pattern in [&TITLE_TAG, &OG_TITLE, &H1_TAG] {
            if let Some(text) = pattern
                .captures(html)
                .and_then(|cap| cap.get(1))
                .map(|m| MARKUP.replace_all(m.as_str(), "").trim().to_string())
            {
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
        None
    }
}

#[async_trait]
impl PageLabeler for HttpPageLabeler {
    async fn label(&self, url: &str) -> LinkResult<String> {
        debug!(url = %url, "Fetching page label");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Label request failed");
                LinkError::LabelFetch {
                    url: url.to_string(),
                    source: Box::new(e),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinkError::LabelFetch {
                url: url.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("HTTP {}", status),
                )),
            });
        }

        let html = response.text().await.map_err(|e| LinkError::LabelFetch {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        Ok(Self::extract_label(&html).unwrap_or_else(|| label_from_path(url)))
    }
}

/// Derive a fallback label from the URL path.
///
/// Uses the last non-empty path segment with hyphens turned into spaces and
/// words capitalized; falls back to the host, then to the raw URL.
pub fn label_from_path(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(segment) = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        {
            return capitalize_words(&segment.replace('-', " "));
        }
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }
    url.to_string()
}

fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_title_tag() {
        let html = r#"<html><head><title>Running Shoes | Shop</title>
            <meta property="og:title" content="OG Title"/></head>
            <body><h1>Heading</h1></body></html>"#;
        assert_eq!(
            HttpPageLabeler::extract_label(html),
            Some("Running Shoes | Shop".to_string())
        );
    }

    #[test]
    fn falls_back_to_og_title_then_h1() {
        let og_only = r#"<head><meta property="og:title" content="Summer Collection"/></head>"#;
        assert_eq!(
            HttpPageLabeler::extract_label(og_only),
            Some("Summer Collection".to_string())
        );

        let h1_only = "<body><h1>Our <em>Best</em> Jackets</h1></body>";
        assert_eq!(
            HttpPageLabeler::extract_label(h1_only),
            Some("Our Best Jackets".to_string())
        );
    }

    #[test]
    fn empty_title_does_not_win() {
        let html = "<head><title>  </title></head><body><h1>Jackets</h1></body>";
        assert_eq!(
            HttpPageLabeler::extract_label(html),
            Some("Jackets".to_string())
        );
    }

    #[test]
    fn no_markup_yields_none() {
        assert_eq!(HttpPageLabeler::extract_label("<p>plain page</p>"), None);
    }

    #[test]
    fn path_fallback_uses_last_segment() {
        assert_eq!(
            label_from_path("https://x.com/collections/running-shoes"),
            "Running Shoes"
        );
        assert_eq!(
            label_from_path("https://x.com/collections/running-shoes/"),
            "Running Shoes"
        );
        assert_eq!(label_from_path("https://x.com/"), "x.com");
        assert_eq!(label_from_path("not a url"), "not a url");
    }
}
