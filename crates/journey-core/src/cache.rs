// crates/journey-core/src/cache.rs

//! # Response Cache
//!
//! Time-bound in-memory memoisation. An entry older than the freshness window
//! is treated as absent and overwritten by the next compute; nothing is ever
//! purged proactively, so the map holds at most one entry per distinct key
//! requested during the process lifetime.
//!
//! The map lock is held across the whole read-check-compute-store sequence,
//! so concurrent misses on a key compute once.

use crate::model::{Level, Theme};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Default freshness window: five minutes.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Source of "now" for freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Composite key of a globe response: (theme, level, bounds or `"all"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub theme: Theme,
    pub level: Level,
    pub bounds: String,
}

impl CacheKey {
    pub const ALL_BOUNDS: &'static str = "all";

    pub fn new(theme: Theme, level: Level, bounds: Option<String>) -> Self {
        CacheKey {
            theme,
            level,
            bounds: bounds.unwrap_or_else(|| Self::ALL_BOUNDS.to_owned()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.theme, self.level, self.bounds)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Freshness-bounded memoisation keyed by `K`.
pub struct ResponseCache<K, V> {
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    freshness: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(freshness: Duration) -> Self {
        Self::with_clock(freshness, Arc::new(SystemClock))
    }

    pub fn with_clock(freshness: Duration, clock: Arc<dyn Clock>) -> Self {
        ResponseCache {
            entries: Mutex::new(HashMap::new()),
            freshness,
            clock,
        }
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Returns the fresh cached value for `key`, or computes, stores and
    /// returns a new one.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_compute(key, || Ok::<V, std::convert::Infallible>(compute())) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`ResponseCache::get_or_compute`]. Errors are
    /// returned to the caller and never stored.
    pub fn get_or_try_compute<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let mut entries = self.lock();
        let now = self.clock.now();

        if let Some(entry) = entries.get(&key) {
            if now.saturating_duration_since(entry.stored_at) < self.freshness {
                tracing::trace!("cache hit");
                return Ok(entry.value.clone());
            }
        }

        tracing::debug!("cache miss, computing");
        let value = compute()?;
        entries.insert(
            key,
            CacheEntry {
                value: value.clone(),
                stored_at: self.clock.now(),
            },
        );
        Ok(value)
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means a compute panicked; the map itself is intact.
    fn lock(&self) -> MutexGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> fmt::Debug for ResponseCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("freshness", &self.freshness)
            .finish_non_exhaustive()
    }
}

/// A clock that only moves when told to. Used by tests.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self
            .offset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self
            .offset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.base + *offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn cache_with_clock() -> (ResponseCache<CacheKey, u32>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = ResponseCache::with_clock(DEFAULT_FRESHNESS, clock.clone());
        (cache, clock)
    }

    fn key() -> CacheKey {
        CacheKey::new(Theme::Borderscapes, Level::Macroareas, None)
    }

    #[test]
    fn computes_once_within_window() {
        let (cache, clock) = cache_with_clock();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            calls.get()
        };

        assert_eq!(cache.get_or_compute(key(), compute), 1);
        clock.advance(Duration::from_secs(60));
        assert_eq!(cache.get_or_compute(key(), compute), 1);
        clock.advance(Duration::from_secs(239));
        assert_eq!(cache.get_or_compute(key(), compute), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn recomputes_exactly_once_after_window() {
        let (cache, clock) = cache_with_clock();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            calls.get()
        };

        cache.get_or_compute(key(), compute);
        clock.advance(DEFAULT_FRESHNESS);
        assert_eq!(cache.get_or_compute(key(), compute), 2);
        assert_eq!(cache.get_or_compute(key(), compute), 2);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_are_independent() {
        let (cache, _clock) = cache_with_clock();
        let bounded = CacheKey::new(
            Theme::Borderscapes,
            Level::Macroareas,
            Some("50,40,20,0".into()),
        );
        assert_eq!(cache.get_or_compute(key(), || 1), 1);
        assert_eq!(cache.get_or_compute(bounded, || 2), 2);
        assert_eq!(cache.get_or_compute(key(), || 3), 1);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let (cache, _clock) = cache_with_clock();
        let failed: Result<u32, &str> = cache.get_or_try_compute(key(), || Err("disk gone"));
        assert_eq!(failed, Err("disk gone"));
        assert!(cache.is_empty());

        let ok: Result<u32, &str> = cache.get_or_try_compute(key(), || Ok(7));
        assert_eq!(ok, Ok(7));
    }

    #[test]
    fn cache_key_display() {
        assert_eq!(key().to_string(), "borderscapes-macroareas-all");
    }
}
