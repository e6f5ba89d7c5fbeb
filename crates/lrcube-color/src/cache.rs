//! Bounded memo of tone-curve evaluations.
//!
//! Results are grouped in one bucket per structurally distinct curve (see
//! [`ToneCurve::identity_key`]). When a new bucket pushes the number of
//! buckets past the capacity, the oldest bucket by insertion is dropped as
//! a whole. Access does not refresh a bucket's position.
//!
//! The cache only saves work: a cleared or evicted cache yields the same
//! outputs as a warm one.
//!
//! # Example
//!
//! ```rust
//! use lrcube_color::ToneCurveCache;
//! use lrcube_core::ToneCurve;
//!
//! let cache = ToneCurveCache::with_capacity(4);
//! let curve = ToneCurve::identity();
//! assert_eq!(cache.evaluate(&curve, 64), 64);
//! assert_eq!(cache.evaluate(&curve, 64), 64);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use lrcube_core::ToneCurve;
use tracing::trace;

use crate::tone_curve;

/// Number of curve buckets kept by [`ToneCurveCache::global`].
pub const DEFAULT_CURVE_CAPACITY: usize = 100;

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to evaluate the curve.
    pub misses: u64,
    /// Buckets dropped to stay within capacity.
    pub evictions: u64,
    /// Buckets currently held.
    pub curves: usize,
}

impl CacheStats {
    /// Hit rate as percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[derive(Debug, Default)]
struct Buckets {
    levels: HashMap<String, [Option<u8>; 256]>,
    order: VecDeque<String>,
}

/// Thread-safe, capacity-bounded tone-curve memo.
#[derive(Debug)]
pub struct ToneCurveCache {
    capacity: usize,
    buckets: Mutex<Buckets>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Default for ToneCurveCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CURVE_CAPACITY)
    }
}

impl ToneCurveCache {
    /// Creates a cache holding at most `capacity` curves (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            buckets: Mutex::new(Buckets::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static ToneCurveCache {
        static GLOBAL: OnceLock<ToneCurveCache> = OnceLock::new();
        GLOBAL.get_or_init(ToneCurveCache::default)
    }

    /// Maximum number of curve buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Evaluates `curve` at `input`, consulting the cache first.
    pub fn evaluate(&self, curve: &ToneCurve, input: u8) -> u8 {
        self.evaluate_keyed(&curve.identity_key(), curve, input)
    }

    /// Like [`ToneCurveCache::evaluate`] with a precomputed
    /// [`ToneCurve::identity_key`]. `key` must belong to `curve`.
    pub fn evaluate_keyed(&self, key: &str, curve: &ToneCurve, input: u8) -> u8 {
        let mut buckets = self.lock();

        if let Some(&Some(level)) = buckets.levels.get(key).map(|b| &b[usize::from(input)]) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return level;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let level = tone_curve::evaluate(curve, input);

        if !buckets.levels.contains_key(key) {
            buckets.levels.insert(key.to_string(), [None; 256]);
            buckets.order.push_back(key.to_string());
            self.evict_over_capacity(&mut buckets);
        }
        if let Some(bucket) = buckets.levels.get_mut(key) {
            bucket[usize::from(input)] = Some(level);
        }
        level
    }

    fn evict_over_capacity(&self, buckets: &mut Buckets) {
        while buckets.order.len() > self.capacity {
            let Some(oldest) = buckets.order.pop_front() else {
                break;
            };
            buckets.levels.remove(&oldest);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            trace!(curve = %oldest, "evicted tone curve bucket");
        }
    }

    /// Number of curve buckets currently held.
    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    /// True when no curve is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when a bucket exists for `curve`.
    pub fn contains(&self, curve: &ToneCurve) -> bool {
        self.lock().levels.contains_key(&curve.identity_key())
    }

    /// Drops every bucket. Counters are kept.
    pub fn clear(&self) {
        let mut buckets = self.lock();
        buckets.levels.clear();
        buckets.order.clear();
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            curves: self.len(),
        }
    }

    // A panic while holding the lock cannot leave a bucket half-written in
    // a way that changes results, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Buckets> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
