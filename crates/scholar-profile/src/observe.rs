//! Observability sink.
//!
//! Fetch failures and missing render regions are never surfaced to the end
//! user; they go to an injected sink so embedders and tests can observe them.

use crate::error::ClientError;

/// Receiver for conditions the presenter swallows.
pub trait EventSink: Send + Sync {
    /// A forced or first-load fetch failed; the previous snapshot (if any)
    /// stays in place.
    fn refresh_failed(&self, author_id: &str, error: &ClientError);

    /// A render surface region was missing; the update step was skipped.
    fn region_missing(&self, region: &str);
}

/// Default sink: structured log lines via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn refresh_failed(&self, author_id: &str, error: &ClientError) {
        tracing::warn!(author_id = %author_id, error = %error, "Profile refresh failed, keeping stale data");
    }

    fn region_missing(&self, region: &str) {
        tracing::warn!(region = %region, "Render region missing, step skipped");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::EventSink;
    use crate::error::ClientError;

    /// Sink that records every event for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub failures: Mutex<Vec<String>>,
        pub missing: Mutex<Vec<String>>,
    }

    impl EventSink for RecordingSink {
        fn refresh_failed(&self, author_id: &str, error: &ClientError) {
            self.failures.lock().unwrap().push(format!("{author_id}: {error}"));
        }

        fn region_missing(&self, region: &str) {
            self.missing.lock().unwrap().push(region.to_string());
        }
    }
}
