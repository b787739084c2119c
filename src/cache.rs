/*!
 * Analysis caching.
 *
 * Folder runs and repeated CLI invocations often analyze the same script text
 * with the same settings; the cache keeps the finished `ScriptAnalysis` so the
 * normalizer and pause detector run once per distinct input. The cache holds
 * at most `capacity` analyses; the oldest entry is evicted first.
 */

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use parking_lot::RwLock;
use log::debug;

use crate::analysis::{ExpansionOptions, ScriptAnalysis};

/// Cache key: everything `ScriptAnalysis::analyze` depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    wpm: i32,
    options: ExpansionOptions,
}

/// Default number of analyses kept
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Entries plus their insertion order
#[derive(Debug, Default)]
struct CacheEntries {
    map: HashMap<CacheKey, ScriptAnalysis>,
    order: VecDeque<CacheKey>,
}

impl CacheEntries {
    // @returns: Number of entries evicted to make room
    fn insert(&mut self, key: CacheKey, analysis: ScriptAnalysis, capacity: usize) -> usize {
        if self.map.contains_key(&key) {
            return 0;
        }

        let mut evicted = 0;
        while self.map.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.map.remove(&oldest);
                    evicted += 1;
                }
                None => break,
            }
        }

        self.order.push_back(key.clone());
        self.map.insert(key, analysis);
        evicted
    }

    fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

/// Thread-safe, bounded cache of script analyses
pub struct AnalysisCache {
    entries: Arc<RwLock<CacheEntries>>,
    hits: Arc<RwLock<usize>>,
    misses: Arc<RwLock<usize>>,
    capacity: usize,
    enabled: bool,
}

impl AnalysisCache {
    pub fn new(enabled: bool) -> Self {
        Self::with_capacity(enabled, DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` analyses (minimum 1)
    pub fn with_capacity(enabled: bool, capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(CacheEntries::default())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            capacity: capacity.max(1),
            enabled,
        }
    }

    /// Return the cached analysis or compute and store it
    pub fn get_or_analyze(&self, text: &str, wpm: i32, options: &ExpansionOptions) -> ScriptAnalysis {
        if !self.enabled {
            return ScriptAnalysis::analyze(text, wpm, options);
        }

        let key = CacheKey {
            text: text.to_string(),
            wpm,
            options: *options,
        };

        if let Some(found) = self.entries.read().map.get(&key) {
            *self.hits.write() += 1;
            debug!("Analysis cache hit ({} chars @ {} WPM)", text.len(), wpm);
            return found.clone();
        }

        *self.misses.write() += 1;
        let analysis = ScriptAnalysis::analyze(text, wpm, options);
        let evicted = self.entries.write().insert(key, analysis.clone(), self.capacity);
        if evicted > 0 {
            debug!("Evicted {} analyses (capacity {})", evicted, self.capacity);
        }
        analysis
    }

    /// Get cache statistics
    // @returns: (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;
        debug!("Analysis cache cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.read().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for AnalysisCache {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            hits: Arc::clone(&self.hits),
            misses: Arc::clone(&self.misses),
            capacity: self.capacity,
            enabled: self.enabled,
        }
    }
}
