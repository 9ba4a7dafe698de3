//! In-memory response cache with per-entry time-to-live.
//!
//! Entries are kept after they expire so they can still be served as a
//! degraded fallback when the live path is unavailable. An expired entry
//! is only removed when it is overwritten by a newer payload or the
//! whole cache is cleared. At most one entry exists per key.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

/// A cached upstream payload.
#[derive(Clone, Debug)]
pub(crate) struct CacheEntry {
    payload: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) <= self.ttl
    }
}

/// Cache of parsed upstream responses keyed by endpoint string.
#[derive(Debug, Default)]
pub(crate) struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Payload for the key if it is still within its TTL.
    pub(crate) fn fresh(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(Instant::now()))
            .map(|entry| &entry.payload)
    }

    /// Payload for the key regardless of freshness.
    pub(crate) fn any(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.payload)
    }

    /// Store a payload, replacing any previous entry for the key.
    pub(crate) fn insert(&mut self, key: String, payload: Value, ttl: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Drop all entries, fresh and stale alike.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Force an entry past its TTL without waiting for wall-clock time.
    #[cfg(test)]
    pub(crate) fn expire(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.ttl = Duration::ZERO;
        }
    }
}
