//! Concept name caching.
//!
//! Provides a thread-safe LRU cache of normalized concept names keyed by
//! concept id. The cached value never carries an article or id suffix, so one
//! entry serves every combination of rendering flags.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use lru::LruCache;
use snomed_cnl::{NormalizedName, SctId};

use crate::config::NameCacheConfig;

/// Thread-safe LRU cache of normalized concept names.
///
/// Entries are content-addressed: a concept id always maps to the same name,
/// so a racing insert from another thread is equivalent to this one and
/// entries never go stale.
///
/// # Example
///
/// ```rust
/// use snomed_cnl::NormalizedName;
/// use snomed_cnl_renderer::{NameCache, NameCacheConfig};
///
/// let cache = NameCache::new(NameCacheConfig::default());
/// cache.insert(80891009, NormalizedName::from_fsn("Heart structure (body structure)"));
///
/// assert_eq!(cache.get(80891009).map(|n| n.text), Some("heart structure".to_string()));
/// ```
pub struct NameCache {
    inner: Mutex<LruCache<SctId, NormalizedName>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl NameCache {
    /// Creates a name cache with the given configuration.
    pub fn new(config: NameCacheConfig) -> Self {
        Self::with_capacity(config.max_entries)
    }

    /// Creates a name cache holding at most `max_entries` names.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Gets the cached name of a concept, promoting it to most-recently-used.
    pub fn get(&self, concept_id: SctId) -> Option<NormalizedName> {
        let found = self
            .inner
            .lock()
            .ok()
            .and_then(|mut cache| cache.get(&concept_id).cloned());

        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Stores the normalized name of a concept.
    ///
    /// If the cache is full, the least recently used entry is evicted.
    pub fn insert(&self, concept_id: SctId, name: NormalizedName) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.put(concept_id, name);
        }
    }

    /// Checks if a concept is cached (without affecting LRU order).
    pub fn contains(&self, concept_id: SctId) -> bool {
        match self.inner.lock() {
            Ok(cache) => cache.contains(&concept_id),
            _ => false,
        }
    }

    /// Returns the number of cached names.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(cache) => cache.len(),
            _ => 0,
        }
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entries and counters.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for NameCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("NameCache")
            .field("entries", &stats.entries)
            .field("hits", &stats.hits)
            .field("misses", &stats.misses)
            .finish()
    }
}

/// Statistics about the name cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached names.
    pub entries: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that missed.
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache (0.0 when unused).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
