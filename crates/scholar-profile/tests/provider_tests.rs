//! Mock-based provider tests using wiremock.
//!
//! Verify the caching contract and the fail-silent error paths against a
//! mocked Semantic Scholar API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_profile::error::ClientError;
use scholar_profile::observe::EventSink;
use scholar_profile::{Config, DataProvider, ScholarClient};

/// Sink that records refresh failures for assertions.
#[derive(Debug, Default)]
struct RecordingSink {
    failures: Mutex<Vec<String>>,
}

impl EventSink for RecordingSink {
    fn refresh_failed(&self, author_id: &str, error: &ClientError) {
        self.failures.lock().unwrap().push(format!("{author_id}: {error}"));
    }

    fn region_missing(&self, _region: &str) {}
}

fn test_config(mock_server: &MockServer) -> Config {
    Config::for_testing(&mock_server.uri())
}

fn provider_with(config: Config, sink: Arc<RecordingSink>) -> DataProvider {
    let client = ScholarClient::new(&config).unwrap();
    DataProvider::new(client, config, sink)
}

fn sample_profile_json() -> serde_json::Value {
    json!({
        "name": "Niklas Bubeck",
        "affiliations": [{"name": "TUM"}],
        "homepage": "https://example.org",
        "paperCount": 3,
        "citationCount": 120,
        "hIndex": 5,
        "papers": [
            {
                "paperId": "p1",
                "title": "Deep learning for vision",
                "authors": [
                    {"authorId": "a0", "name": "Niklas Bubeck"},
                    {"authorId": "a1", "name": "Ada L."}
                ],
                "venue": "CVPR",
                "year": 2024,
                "citationCount": 100,
                "url": "https://www.semanticscholar.org/paper/p1",
                "openAccessPdf": {"url": "https://arxiv.org/pdf/p1.pdf"}
            },
            {
                "paperId": "p2",
                "title": "Data pruning at scale",
                "authors": [{"authorId": "a1", "name": "Ada L."}],
                "venue": "arXiv",
                "year": 2023,
                "citationCount": 15
            },
            {
                "paperId": "p3",
                "title": "A journal study",
                "authors": [],
                "venue": "Nature",
                "year": 2020,
                "citationCount": 5
            }
        ]
    })
}

async fn mount_profile(mock_server: &MockServer, body: serde_json::Value, expect: u64) {
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/2372230806"))
        .and(query_param_contains("fields", "papers.openAccessPdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expect)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_cache_hit_issues_zero_requests() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, sample_profile_json(), 1).await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));

    let first = provider.fetch_profile().await.unwrap();
    let second = provider.fetch_profile().await.unwrap();

    // Deep-equal snapshot, and the mock's expect(1) verifies zero extra
    // requests on drop
    assert_eq!(*first, *second);
    assert_eq!(first.name, "Niklas Bubeck");
}

#[tokio::test]
async fn test_expired_cache_issues_exactly_one_request() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, sample_profile_json(), 2).await;

    let mut config = test_config(&mock_server);
    config.cache_ttl = Duration::from_millis(50);
    let provider = provider_with(config, Arc::new(RecordingSink::default()));

    provider.fetch_profile().await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    provider.fetch_profile().await.unwrap();
}

#[tokio::test]
async fn test_normalization_of_live_payload() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, sample_profile_json(), 1).await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));
    let snapshot = provider.fetch_profile().await.unwrap();

    assert_eq!(snapshot.affiliation, "TUM");
    assert_eq!(snapshot.citation_stats.total_citations, 120);
    // Locally computed: papers with >= 10 citations
    assert_eq!(snapshot.citation_stats.i10_index, 2);
    // Owner excluded, Ada counted across two papers
    assert_eq!(snapshot.coauthors.len(), 1);
    assert_eq!(snapshot.coauthors[0].name, "Ada L.");
    assert_eq!(snapshot.coauthors[0].count, 2);
    // PDF preferred for the link, landing page kept separately
    assert_eq!(snapshot.publications[0].link.as_deref(), Some("https://arxiv.org/pdf/p1.pdf"));
    assert_eq!(
        snapshot.publications[0].publication_url.as_deref(),
        Some("https://www.semanticscholar.org/paper/p1")
    );
    // Empty author list falls back
    assert_eq!(snapshot.publications[2].authors, "Unknown");
}

#[tokio::test]
async fn test_fallbacks_when_payload_is_empty() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, json!({}), 1).await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));
    let snapshot = provider.fetch_profile().await.unwrap();

    assert_eq!(snapshot.name, "Niklas Bubeck");
    assert_eq!(snapshot.affiliation, "Technical University of Munich");
    assert_eq!(snapshot.homepage, "");
    assert!(snapshot.publications.is_empty());
    assert_eq!(snapshot.citation_stats.paper_count, 0);
}

#[tokio::test]
async fn test_server_error_is_typed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));
    let error = provider.fetch_profile().await.unwrap_err();

    assert!(matches!(error, ClientError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_not_found_is_typed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such author"))
        .mount(&mock_server)
        .await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));
    let error = provider.fetch_profile().await.unwrap_err();

    assert!(matches!(error, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>not json</html>")
                .insert_header("content-type", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));
    let error = provider.fetch_profile().await.unwrap_err();

    assert!(matches!(error, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_refresh_failure_keeps_stale_and_reports_to_sink() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, sample_profile_json(), 1).await;

    let sink = Arc::new(RecordingSink::default());
    let provider = provider_with(test_config(&mock_server), sink.clone());

    let first = provider.fetch_profile().await.unwrap();
    assert!(sink.failures.lock().unwrap().is_empty());

    // Swap the API to failing and force a refresh
    mock_server.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    assert!(provider.refresh().await.is_none());

    // Stale snapshot retained, failure reported only to the sink
    let cached = provider.cached().await.unwrap();
    assert_eq!(*cached, *first);
    let failures = sink.failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("2372230806"));
}

#[tokio::test]
async fn test_refresh_bypasses_valid_cache() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, sample_profile_json(), 2).await;

    let provider = provider_with(test_config(&mock_server), Arc::new(RecordingSink::default()));

    provider.fetch_profile().await.unwrap();
    // Within TTL, but refresh must still hit the network (expect(2))
    assert!(provider.refresh().await.is_some());
}
