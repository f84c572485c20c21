//! Snapshot provider: fetch, normalize, cache.
//!
//! Owns the 24-hour TTL cache of normalized snapshots, keyed by author id.
//! Reads never trigger a background refresh; the hourly forced refresh is
//! driven by the caller (see the shell's timer) and keeps stale data on
//! failure, reporting only to the observability sink.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use moka::future::Cache;

use crate::client::ScholarClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::observe::EventSink;
use crate::profile::{ProfileSnapshot, normalize};

/// One cached fetch result. Superseded, never mutated.
#[derive(Clone)]
struct CacheEntry {
    snapshot: Arc<ProfileSnapshot>,
    fetched_at: DateTime<Utc>,
}

/// Fetches author profiles and caches normalized snapshots.
pub struct DataProvider {
    client: ScholarClient,
    cache: Cache<String, CacheEntry>,
    config: Config,
    sink: Arc<dyn EventSink>,
}

impl DataProvider {
    /// Create a provider over the given client.
    #[must_use]
    pub fn new(client: ScholarClient, config: Config, sink: Arc<dyn EventSink>) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Self { client, cache, config, sink }
    }

    /// Author id this provider presents.
    #[must_use]
    pub fn author_id(&self) -> &str {
        &self.config.author_id
    }

    /// Return the current profile snapshot, fetching only on a cache miss
    /// or expiry. A valid cache hit issues zero network requests.
    ///
    /// # Errors
    ///
    /// Returns the client error when a live fetch is required and fails.
    pub async fn fetch_profile(&self) -> ClientResult<Arc<ProfileSnapshot>> {
        let key = cache_key(&self.config.author_id);

        if let Some(entry) = self.cache.get(&key).await {
            tracing::debug!(author_id = %self.config.author_id, "Using cached profile snapshot");
            return Ok(entry.snapshot);
        }

        self.fetch_and_store().await
    }

    /// Force a re-fetch regardless of TTL. On failure the previous snapshot
    /// is silently retained and `None` is returned; the failure goes to the
    /// observability sink only.
    pub async fn refresh(&self) -> Option<Arc<ProfileSnapshot>> {
        match self.fetch_and_store().await {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                self.sink.refresh_failed(&self.config.author_id, &error);
                None
            }
        }
    }

    /// Snapshot currently cached, if any. Never touches the network.
    pub async fn cached(&self) -> Option<Arc<ProfileSnapshot>> {
        let key = cache_key(&self.config.author_id);
        self.cache.get(&key).await.map(|entry| entry.snapshot)
    }

    async fn fetch_and_store(&self) -> ClientResult<Arc<ProfileSnapshot>> {
        let author_id = &self.config.author_id;
        tracing::info!(author_id = %author_id, "Fetching profile from Semantic Scholar");

        let fetched_at = Utc::now();
        let raw = self.client.author_profile(author_id).await?;
        let snapshot = Arc::new(normalize(&raw, &self.config.fallback));

        tracing::info!(
            author_id = %author_id,
            papers = snapshot.publications.len(),
            citations = snapshot.citation_stats.total_citations,
            "Profile snapshot normalized"
        );

        self.store(cache_key(author_id), CacheEntry { snapshot: snapshot.clone(), fetched_at })
            .await;

        Ok(snapshot)
    }

    /// Insert guarded by timestamp: a later-completing fetch must not
    /// overwrite an entry with a strictly newer `fetched_at`.
    async fn store(&self, key: String, entry: CacheEntry) {
        if let Some(existing) = self.cache.get(&key).await {
            if existing.fetched_at > entry.fetched_at {
                tracing::debug!("Discarding fetch result older than cached entry");
                return;
            }
        }
        self.cache.insert(key, entry).await;
    }
}

impl std::fmt::Debug for DataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProvider").field("author_id", &self.config.author_id).finish()
    }
}

/// Cache key for an author. Single-author system, but the scheme supports
/// multiple identifiers.
fn cache_key(author_id: &str) -> String {
    format!("profile_{author_id}")
}
