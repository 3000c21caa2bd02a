//! TTL cache for mapped record sets, keyed by store range.
//!
//! A best-effort read accelerator, not a correctness mechanism: every
//! mutation clears it, and the reconciliation engine never consults it for
//! its own read-modify-write sequence. Instances are injected into the
//! services rather than shared as globals, so test runs stay isolated.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry<T> {
    data: Vec<T>,
    expires_at: Instant,
}

pub struct SheetCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> SheetCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached records for a range, or None. An entry past its TTL counts as
    /// absent and is evicted on the spot.
    pub fn get(&self, range: &str) -> Option<Vec<T>> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(range) {
            Some(entry) if Instant::now() <= entry.expires_at => Some(entry.data.clone()),
            Some(_) => {
                entries.remove(range);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, range: &str, data: Vec<T>) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            range.to_string(),
            CacheEntry {
                data,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drop everything. Called after any mutation to the backing range;
    /// there is no partial invalidation by key.
    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn set_then_get_within_ttl_returns_the_data() {
        let cache = SheetCache::new(Duration::from_secs(60));
        cache.set("EntryExit!A:G", vec![1, 2, 3]);
        assert_eq!(cache.get("EntryExit!A:G"), Some(vec![1, 2, 3]));
        assert_eq!(cache.get("Other!A:G"), None);
    }

    #[test]
    fn expired_entries_are_absent_and_evicted() {
        let cache = SheetCache::new(Duration::from_millis(10));
        cache.set("k", vec![1]);
        sleep(Duration::from_millis(30));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn set_overwrites_and_clear_drops_all_ranges() {
        let cache = SheetCache::new(Duration::from_secs(60));
        cache.set("a", vec![1]);
        cache.set("a", vec![2]);
        cache.set("b", vec![3]);
        assert_eq!(cache.get("a"), Some(vec![2]));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("b"), None);
    }
}
