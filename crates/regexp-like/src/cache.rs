//! Memoizing cache for translated LIKE patterns.
//!
//! Entries are keyed by pattern and case sensitivity. Each entry remembers
//! when it was last referenced and whether it is pinned (`keep`). When a
//! bounded cache is full, a miss triggers an eviction sweep that removes the
//! oldest tenth (rounded up) of the unpinned entries. If every entry is
//! pinned the new expression is returned without being stored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use regex::Regex;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::translate::{CaseSensitivity, translate};

/// Fraction denominator for eviction sweeps: one tenth of evictable entries.
const SWEEP_DIVISOR: usize = 10;

/// A bounded, recency-ordered cache of compiled LIKE patterns.
pub struct LikeCache {
    state: Mutex<CacheState>,
    /// Total cache hits (for statistics).
    total_hits: AtomicUsize,
    /// Total cache misses (for statistics).
    total_misses: AtomicUsize,
    /// Entries removed by eviction sweeps.
    total_evictions: AtomicUsize,
    /// Misses served without storing because every entry was pinned.
    total_bypasses: AtomicUsize,
}

struct CacheState {
    entries: HashMap<String, CacheEntry>,
    max_entries: Option<usize>,
    /// Logical clock; every reference takes the next tick.
    clock: u64,
}

struct CacheEntry {
    regex: Arc<Regex>,
    keep: bool,
    last_referenced: u64,
}

/// Build the cache key for a pattern: the pattern followed by its case tag.
fn cache_key(pattern: &str, case: CaseSensitivity) -> String {
    let mut key = String::with_capacity(pattern.len() + 1);
    key.push_str(pattern);
    key.push(case.tag());
    key
}

impl CacheState {
    const fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn is_full(&self) -> bool {
        self.max_entries
            .is_some_and(|max| self.entries.len() >= max)
    }

    /// Remove the least recently referenced tenth of the unpinned entries.
    ///
    /// Returns the number of entries removed; zero means everything is pinned.
    fn sweep(&mut self) -> usize {
        let mut evictable: Vec<(u64, String)> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.keep)
            .map(|(key, entry)| (entry.last_referenced, key.clone()))
            .collect();

        if evictable.is_empty() {
            return 0;
        }

        evictable.sort_by_key(|(when, _)| *when);
        let count = evictable.len().div_ceil(SWEEP_DIVISOR);
        tracing::debug!(
            evictable = evictable.len(),
            evicting = count,
            "LIKE cache eviction sweep"
        );

        for (_, key) in evictable.into_iter().take(count) {
            self.entries.remove(&key);
        }
        count
    }
}

impl LikeCache {
    /// Create a cache with the given configuration.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                max_entries: config.max_entries,
                clock: 0,
            }),
            total_hits: AtomicUsize::new(0),
            total_misses: AtomicUsize::new(0),
            total_evictions: AtomicUsize::new(0),
            total_bypasses: AtomicUsize::new(0),
        }
    }

    /// Create an unbounded cache.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(CacheConfig::new())
    }

    /// Create a cache bounded to `max_entries`.
    #[must_use]
    pub fn bounded(max_entries: usize) -> Self {
        Self::new(CacheConfig::bounded(max_entries))
    }

    // The cache is only an optimization, so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get or translate the expression for a LIKE pattern.
    ///
    /// On a hit the entry's recency is refreshed and, if `keep` is `Some`,
    /// its pinned flag is overwritten. On a miss the pattern is translated
    /// and stored, pinned only if `keep` is `Some(true)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the translated expression fails to compile. Such
    /// patterns are never stored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use regexp_like::LikeCache;
    ///
    /// let cache = LikeCache::bounded(10);
    /// let first = cache.lookup("test%", false, None)?;
    /// let second = cache.lookup("test%", false, None)?;
    /// assert!(Arc::ptr_eq(&first, &second));
    /// assert_eq!(cache.len(), 1);
    /// # Ok::<(), regexp_like::LikeError>(())
    /// ```
    pub fn lookup(
        &self,
        pattern: &str,
        case: impl Into<CaseSensitivity>,
        keep: Option<bool>,
    ) -> Result<Arc<Regex>> {
        let case = case.into();
        let key = cache_key(pattern, case);
        let mut state = self.lock();
        let now = state.tick();

        if let Some(entry) = state.entries.get_mut(&key) {
            entry.last_referenced = now;
            if let Some(keep) = keep {
                entry.keep = keep;
            }
            self.total_hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(&entry.regex));
        }

        self.total_misses.fetch_add(1, Ordering::Relaxed);
        let regex = Arc::new(translate(pattern, case)?);

        if state.is_full() {
            let evicted = state.sweep();
            self.total_evictions.fetch_add(evicted, Ordering::Relaxed);

            if evicted == 0 {
                self.total_bypasses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    pattern,
                    size = state.entries.len(),
                    "LIKE cache full of pinned entries, not storing"
                );
                return Ok(regex);
            }
        }

        tracing::debug!(pattern, key = %key, keep = keep.unwrap_or(false), "LIKE cache miss");
        state.entries.insert(
            key,
            CacheEntry {
                regex: Arc::clone(&regex),
                keep: keep.unwrap_or(false),
                last_referenced: now,
            },
        );
        Ok(regex)
    }

    /// Remove a single pattern. Returns the remaining number of entries.
    ///
    /// Removing a pattern that is not cached is a silent no-op.
    pub fn remove(&self, pattern: &str, case: impl Into<CaseSensitivity>) -> usize {
        let key = cache_key(pattern, case.into());
        let mut state = self.lock();
        if state.entries.remove(&key).is_some() {
            tracing::debug!(pattern, key = %key, "removed LIKE cache entry");
        }
        state.entries.len()
    }

    /// Remove every entry. Always returns zero.
    pub fn clear(&self) -> usize {
        let mut state = self.lock();
        let cleared = state.entries.len();
        state.entries.clear();
        tracing::debug!(cleared, "cleared LIKE cache");
        state.entries.len()
    }

    /// Remove `pattern` if given, otherwise clear everything.
    ///
    /// Returns the remaining number of entries.
    pub fn remove_or_clear(&self, pattern: Option<&str>, case: impl Into<CaseSensitivity>) -> usize {
        match pattern {
            Some(pattern) => self.remove(pattern, case),
            None => self.clear(),
        }
    }

    /// Check if a pattern is cached.
    #[must_use]
    pub fn contains(&self, pattern: &str, case: impl Into<CaseSensitivity>) -> bool {
        let key = cache_key(pattern, case.into());
        self.lock().entries.contains_key(&key)
    }

    /// Pinned state of a cached pattern, or `None` if it is not cached.
    #[must_use]
    pub fn is_pinned(&self, pattern: &str, case: impl Into<CaseSensitivity>) -> Option<bool> {
        let key = cache_key(pattern, case.into());
        self.lock().entries.get(&key).map(|entry| entry.keep)
    }

    /// Get the current number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the entry bound, if any.
    #[must_use]
    pub fn max_entries(&self) -> Option<usize> {
        self.lock().max_entries
    }

    /// Change the entry bound.
    ///
    /// Existing entries are kept; a lowered bound is enforced by the sweeps
    /// of subsequent misses.
    pub fn set_max_entries(&self, max_entries: Option<usize>) {
        self.lock().max_entries = max_entries;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            size: state.entries.len(),
            max_entries: state.max_entries,
            pinned: state.entries.values().filter(|entry| entry.keep).count(),
            total_hits: self.total_hits.load(Ordering::Relaxed),
            total_misses: self.total_misses.load(Ordering::Relaxed),
            total_evictions: self.total_evictions.load(Ordering::Relaxed),
            total_bypasses: self.total_bypasses.load(Ordering::Relaxed),
        }
    }

    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }
}

impl Default for LikeCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl std::fmt::Debug for LikeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikeCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics about a LIKE cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached patterns.
    pub size: usize,
    /// Entry bound, if any.
    pub max_entries: Option<usize>,
    /// Number of pinned entries.
    pub pinned: usize,
    /// Total cache hits.
    pub total_hits: usize,
    /// Total cache misses.
    pub total_misses: usize,
    /// Total entries removed by eviction sweeps.
    pub total_evictions: usize,
    /// Total misses returned uncached because every entry was pinned.
    pub total_bypasses: usize,
}

impl CacheStats {
    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_hits + self.total_misses;
        if total == 0 {
            1.0
        } else {
            self.total_hits as f64 / total as f64
        }
    }
}

/// Process-wide cache, configured from the environment on first use.
pub static GLOBAL_CACHE: LazyLock<LikeCache> = LazyLock::new(|| {
    let config = CacheConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring LIKE cache environment configuration");
        CacheConfig::default()
    });
    LikeCache::new(config)
});

/// Look up a pattern in the global cache without changing its pin.
pub fn cached(pattern: &str, case: impl Into<CaseSensitivity>) -> Result<Arc<Regex>> {
    GLOBAL_CACHE.lookup(pattern, case, None)
}

/// Look up a pattern in the global cache, setting its pin to `keep`.
pub fn cached_keep(keep: bool, pattern: &str, case: impl Into<CaseSensitivity>) -> Result<Arc<Regex>> {
    GLOBAL_CACHE.lookup(pattern, case, Some(keep))
}

/// Remove one pattern from the global cache, or clear it when `pattern` is
/// `None`. Returns the remaining number of entries.
pub fn clear_cache(pattern: Option<&str>, case: impl Into<CaseSensitivity>) -> usize {
    GLOBAL_CACHE.remove_or_clear(pattern, case)
}

/// Number of entries in the global cache.
#[must_use]
pub fn cache_size() -> usize {
    GLOBAL_CACHE.len()
}
