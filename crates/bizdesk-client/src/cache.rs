use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

struct CacheEntry {
    value: Value,
    stored_at: DateTime<Utc>,
}

/// Read-query cache with a freshness window.
///
/// An entry younger than `stale_time` is served without refetching; entries older than
/// `gc_time` are dropped on the next purge. Values are kept as JSON so one cache can
/// hold every query type.
#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    stale_time: Duration,
    gc_time: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_times(Duration::minutes(5), Duration::minutes(10))
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_times(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            entries: Arc::default(),
            stale_time,
            gc_time,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fresh<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.fresh_at(key, Utc::now())
    }

    pub fn fresh_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let value = {
            let entries = self.entries();
            let entry = entries.get(key)?;
            if now - entry.stored_at >= self.stale_time {
                return None;
            }
            entry.value.clone()
        };

        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!("cached query \"{key}\" has an unexpected shape: {e}");
                None
            }
        }
    }

    pub fn insert<T: Serialize>(&self, key: &str, value: &T) {
        self.insert_at(key, value, Utc::now());
    }

    pub fn insert_at<T: Serialize>(&self, key: &str, value: &T, now: DateTime<Utc>) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries().insert(
                    key.to_string(),
                    CacheEntry {
                        value,
                        stored_at: now,
                    },
                );
            }
            Err(e) => warn!("not caching query \"{key}\": {e}"),
        }
    }

    pub fn invalidate(&self, key: &str) -> bool {
        self.entries().remove(key).is_some()
    }

    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Drops everything, e.g. when the signed-in user changes.
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let gcTime = self.gc_time;
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, entry| now - entry.stored_at < gcTime);
        before - entries.len()
    }

    /// Serves a fresh cached value or runs `fetch` and caches its success.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.fresh(key) {
            debug!("query \"{key}\" served from cache");
            return Ok(cached);
        }

        self.purge_expired();
        let value = fetch().await?;
        self.insert(key, &value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
            .single()
            .expect("valid time")
            + Duration::minutes(minutes)
    }

    #[test]
    fn test_entry_is_fresh_within_stale_time() {
        let cache = QueryCache::new();
        cache.insert_at("profile", &vec![1, 2, 3], at(0));

        assert_eq!(cache.fresh_at::<Vec<u32>>("profile", at(4)), Some(vec![1, 2, 3]));
        assert_eq!(cache.fresh_at::<Vec<u32>>("profile", at(5)), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_purge_drops_entries_past_gc_time() {
        let cache = QueryCache::new();
        cache.insert_at("old", &"a", at(0));
        cache.insert_at("new", &"b", at(8));

        assert_eq!(cache.purge_expired_at(at(10)), 1);
        assert_eq!(cache.fresh_at::<String>("new", at(10)), Some("b".into()));
    }

    #[test]
    fn test_invalidate_and_prefix() {
        let cache = QueryCache::new();
        cache.insert("profile", &1);
        cache.insert("materials:list", &2);
        cache.insert("materials:7", &3);

        assert!(cache.invalidate("profile"));
        assert!(!cache.invalidate("profile"));
        assert_eq!(cache.invalidate_prefix("materials:"), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_forgets_fresh_entries() {
        let cache = QueryCache::new();
        cache.insert("profile", &json!({ "user": { "id": 4 } }));
        cache.insert("materials:list", &2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.fresh::<Value>("profile"), None);
    }

    #[tokio::test]
    async fn test_get_or_fetch_fetches_once_while_fresh() {
        let cache = QueryCache::new();
        let calls = std::cell::Cell::new(0);

        for _ in 0..3 {
            let value: Result<String, String> = cache
                .get_or_fetch("greeting", || async {
                    calls.set(calls.get() + 1);
                    Ok("hello".to_string())
                })
                .await;
            assert_eq!(value.as_deref(), Ok("hello"));
        }
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_get_or_fetch_does_not_cache_errors() {
        let cache = QueryCache::new();
        let result: Result<u32, &str> = cache.get_or_fetch("count", || async { Err("down") }).await;
        assert_eq!(result, Err("down"));
        assert!(cache.is_empty());
    }
}
