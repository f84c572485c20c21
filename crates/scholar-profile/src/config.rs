//! Configuration for the scholar profile presenter.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Author page base URL on Semantic Scholar.
    pub const AUTHOR_PAGE: &str = "https://www.semanticscholar.org/author";

    /// Paper page base URL on Semantic Scholar.
    pub const PAPER_PAGE: &str = "https://www.semanticscholar.org/paper";

    /// Default author identifier the presenter is built around.
    pub const DEFAULT_AUTHOR_ID: &str = "2372230806";

    /// Request timeout, bounded as a hardening measure.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Snapshot cache TTL (24 hours, fixed expiration measured from fetch time).
    pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

    /// Maximum cached snapshots. The key scheme supports multiple author ids.
    pub const CACHE_MAX_SIZE: u64 = 16;

    /// Forced refresh period. Re-fetches regardless of TTL.
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field sets requested from the Graph API.
pub mod fields {
    /// Author profile fields, including the per-paper subfields the
    /// normalization pass consumes.
    pub const PROFILE: &[&str] = &[
        "name",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
        "papers.title",
        "papers.authors",
        "papers.venue",
        "papers.year",
        "papers.citationCount",
        "papers.url",
        "papers.openAccessPdf",
        "papers.paperId",
    ];
}

/// Presentation constants.
pub mod display {
    /// Publications shown per page.
    pub const PAGE_SIZE: usize = 3;

    /// Maximum interests derived from paper titles and venues.
    pub const MAX_INTERESTS: usize = 3;

    /// Maximum coauthors shown.
    pub const MAX_COAUTHORS: usize = 6;
}

/// Identity used when the API response omits profile fields.
#[derive(Debug, Clone)]
pub struct FallbackIdentity {
    /// Profile owner's display name.
    pub name: String,

    /// Affiliation text.
    pub affiliation: String,

    /// Homepage URL (may be empty).
    pub homepage: String,
}

impl Default for FallbackIdentity {
    fn default() -> Self {
        Self {
            name: "Niklas Bubeck".to_string(),
            affiliation: "Technical University of Munich".to_string(),
            homepage: String::new(),
        }
    }
}

/// Presenter configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar author identifier to present.
    pub author_id: String,

    /// Semantic Scholar API key (optional, raises rate limits upstream).
    pub api_key: Option<String>,

    /// Base URL for Graph API (overridable for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Snapshot cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cached snapshots.
    pub cache_max_size: u64,

    /// Forced refresh period.
    pub refresh_interval: Duration,

    /// Identity fallbacks for absent profile fields.
    pub fallback: FallbackIdentity,
}

impl Config {
    /// Create a configuration for the given author.
    #[must_use]
    pub fn new(author_id: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            author_id: author_id.into(),
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            refresh_interval: api::REFRESH_INTERVAL,
            fallback: FallbackIdentity::default(),
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            author_id: api::DEFAULT_AUTHOR_ID.to_string(),
            api_key: None,
            graph_api_url: format!("{base_url}/graph/v1"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            refresh_interval: api::REFRESH_INTERVAL,
            fallback: FallbackIdentity::default(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let author_id = std::env::var("SCHOLAR_AUTHOR_ID")
            .unwrap_or_else(|_| api::DEFAULT_AUTHOR_ID.to_string());
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(author_id, api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::DEFAULT_AUTHOR_ID, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.author_id, api::DEFAULT_AUTHOR_ID);
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new("42", Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.author_id, "42");
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://localhost:9999");
        assert_eq!(config.graph_api_url, "http://localhost:9999/graph/v1");
    }

    #[test]
    fn test_profile_fields() {
        assert!(fields::PROFILE.contains(&"hIndex"));
        assert!(fields::PROFILE.contains(&"papers.openAccessPdf"));
        // i10-index is computed locally, never requested
        assert!(!fields::PROFILE.iter().any(|f| f.contains("i10")));
    }
}
