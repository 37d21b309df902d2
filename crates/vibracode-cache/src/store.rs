// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyed staleness cache.
//!
//! Each entry holds an `Arc` of the fetched value plus its fetch time.
//! Entries are replaced wholesale on refetch, never merged field-by-field,
//! so derived statistics computed from a cached list can never drift from
//! the list itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::{Duration, Instant};

use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

use crate::clock::{Clock, SystemClock};

struct Entry<V> {
    value: Arc<V>,
    fetched_at: Instant,
}

/// A keyed cache with time-based staleness and fetch coalescing.
///
/// Concurrent [`get_or_fetch`](Self::get_or_fetch) calls for the same key
/// serialize behind a per-key lock, so at most one fetch per key is in
/// flight at a time; a slow key never blocks reads of other keys.
pub struct ResourceCache<K, V> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: StdMutex<HashMap<K, Entry<V>>>,
    fetch_locks: StdMutex<HashMap<K, Arc<AsyncMutex<()>>>>,
}

impl<K, V> ResourceCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a cache with the given staleness window and the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock (used by tests).
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: StdMutex::new(HashMap::new()),
            fetch_locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key` if it exists and is not stale.
    pub fn get_if_fresh(&self, key: &K) -> Option<Arc<V>> {
        let now = self.clock.now();
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries.get(key).and_then(|entry| {
            if now.duration_since(entry.fetched_at) < self.ttl {
                Some(Arc::clone(&entry.value))
            } else {
                None
            }
        })
    }

    /// Return a fresh value for `key`, fetching with `fetch` if the entry is
    /// missing or stale.
    ///
    /// Concurrent callers for the same key coalesce: only one runs `fetch`,
    /// the rest pick up the entry it populated.
    pub async fn get_or_fetch<F>(&self, key: K, fetch: F) -> Arc<V>
    where
        F: Future<Output = V>,
    {
        if let Some(value) = self.get_if_fresh(&key) {
            debug!(key = ?key, "cache hit");
            return value;
        }

        let lock = self.fetch_lock(&key);
        let _guard = lock.lock().await;

        // Another caller may have populated the entry while we waited.
        if let Some(value) = self.get_if_fresh(&key) {
            debug!(key = ?key, "cache hit after coalesced fetch");
            return value;
        }

        debug!(key = ?key, "cache miss, fetching");
        let value = Arc::new(fetch.await);
        self.insert(key, Arc::clone(&value));
        value
    }

    /// Fetch unconditionally and replace the entry, ignoring staleness.
    ///
    /// This is the pull-to-refresh path: it still serializes with other
    /// fetches of the same key.
    pub async fn refresh<F>(&self, key: K, fetch: F) -> Arc<V>
    where
        F: Future<Output = V>,
    {
        let lock = self.fetch_lock(&key);
        let _guard = lock.lock().await;

        debug!(key = ?key, "forced refresh");
        let value = Arc::new(fetch.await);
        self.insert(key, Arc::clone(&value));
        value
    }

    /// Drop the entry for `key`, forcing the next read to refetch.
    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if entries.remove(key).is_some() {
            debug!(key = ?key, "cache entry invalidated");
        }
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let count = entries.len();
        entries.clear();
        debug!(count, "cache cleared");
    }

    fn insert(&self, key: K, value: Arc<V>) {
        let fetched_at = self.clock.now();
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(key, Entry { value, fetched_at });
    }

    fn fetch_lock(&self, key: &K) -> Arc<AsyncMutex<()>> {
        let mut locks = self.fetch_locks.lock().expect("cache lock poisoned");
        Arc::clone(locks.entry(key.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::clock::ManualClock;

    fn cache_with_manual_clock(ttl_secs: u64) -> (Arc<ResourceCache<String, Vec<u32>>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = Arc::new(ResourceCache::with_clock(
            Duration::from_secs(ttl_secs),
            Arc::clone(&clock) as Arc<dyn Clock>,
        ));
        (cache, clock)
    }

    #[tokio::test]
    async fn fresh_entry_is_served_without_refetch() {
        let (cache, _clock) = cache_with_manual_clock(30);
        let fetches = AtomicU32::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch("users".to_string(), async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    vec![1, 2, 3]
                })
                .await;
            assert_eq!(*value, vec![1, 2, 3]);
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_entry_is_refetched() {
        let (cache, clock) = cache_with_manual_clock(30);
        let fetches = AtomicU32::new(0);

        let fetch = || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            vec![7]
        };

        cache.get_or_fetch("users".to_string(), fetch()).await;
        clock.advance(Duration::from_secs(31));
        cache.get_or_fetch("users".to_string(), fetch()).await;

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch_before_ttl() {
        let (cache, _clock) = cache_with_manual_clock(300);
        let fetches = AtomicU32::new(0);

        let fetch = || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            vec![9]
        };

        cache.get_or_fetch("users".to_string(), fetch()).await;
        cache.invalidate(&"users".to_string());
        cache.get_or_fetch("users".to_string(), fetch()).await;

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn refresh_replaces_a_fresh_entry() {
        let (cache, _clock) = cache_with_manual_clock(300);

        cache.get_or_fetch("users".to_string(), async { vec![1] }).await;
        let value = cache.refresh("users".to_string(), async { vec![2] }).await;
        assert_eq!(*value, vec![2]);

        // The replaced value is what subsequent reads see.
        let again = cache
            .get_or_fetch("users".to_string(), async { vec![3] })
            .await;
        assert_eq!(*again, vec![2]);
    }

    #[tokio::test]
    async fn keys_are_cached_independently() {
        let (cache, _clock) = cache_with_manual_clock(300);

        cache.get_or_fetch("users".to_string(), async { vec![1] }).await;
        cache.get_or_fetch("sessions".to_string(), async { vec![2] }).await;
        cache.invalidate(&"users".to_string());

        assert!(cache.get_if_fresh(&"users".to_string()).is_none());
        assert!(cache.get_if_fresh(&"sessions".to_string()).is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_fetches_for_one_key_coalesce() {
        let (cache, _clock) = cache_with_manual_clock(300);
        let fetches = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let fetches = Arc::clone(&fetches);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch("users".to_string(), async move {
                        fetches.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        vec![42]
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(*handle.await.unwrap(), vec![42]);
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }
}
