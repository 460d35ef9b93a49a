// In-memory entity cache.
// Keyed by entity id, insert-once, with hit/miss counters for the status bar.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Utc};

/// A cached value with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CachedEntry<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedEntry<T> {
    /// Create a new cache entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

/// Counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCounters {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Unbounded id → entity map. Entries are never replaced or evicted.
#[derive(Debug)]
pub struct EntityCache<T> {
    entries: HashMap<i64, CachedEntry<T>>,
    hits: u64,
    misses: u64,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<T> EntityCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry, counting the outcome as a hit or a miss.
    pub fn lookup(&mut self, id: i64) -> Option<&T> {
        match self.entries.get(&id) {
            Some(entry) => {
                self.hits += 1;
                Some(&entry.data)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up an entry without touching the counters.
    pub fn peek(&self, id: i64) -> Option<&CachedEntry<T>> {
        self.entries.get(&id)
    }

    /// Insert a value if the id is absent.
    ///
    /// Returns `false` and leaves the existing entry untouched when the id is
    /// already cached.
    pub fn insert(&mut self, id: i64, data: T) -> bool {
        match self.entries.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(CachedEntry::new(data));
                true
            }
        }
    }

    pub fn counters(&self) -> CacheCounters {
        CacheCounters {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_counts_hits_and_misses() {
        let mut cache = EntityCache::new();

        assert!(cache.lookup(1).is_none());
        cache.insert(1, "one");
        assert_eq!(cache.lookup(1), Some(&"one"));
        assert_eq!(cache.lookup(1), Some(&"one"));

        let counters = cache.counters();
        assert_eq!(counters.entries, 1);
        assert_eq!(counters.hits, 2);
        assert_eq!(counters.misses, 1);
    }

    #[test]
    fn test_insert_never_overwrites() {
        let mut cache = EntityCache::new();

        assert!(cache.insert(5, "first"));
        let cached_at = cache.peek(5).unwrap().cached_at;

        assert!(!cache.insert(5, "second"));
        let entry = cache.peek(5).unwrap();
        assert_eq!(entry.data, "first");
        assert_eq!(entry.cached_at, cached_at);
        assert_eq!(cache.counters().entries, 1);
    }

    #[test]
    fn test_peek_does_not_count() {
        let mut cache = EntityCache::new();
        cache.insert(2, 20);

        assert!(cache.peek(2).is_some());
        assert!(cache.peek(3).is_none());
        assert_eq!(cache.counters(), CacheCounters {
            entries: 1,
            hits: 0,
            misses: 0
        });
    }
}
