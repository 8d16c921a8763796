//! Memoisation store for distance closures.
//!
//! The closure is the one expensive step of table construction and is shared
//! read-only by every Grid Table built against the same seed pair.  The cache
//! is an explicit value handed to the builders, so callers (and tests) own its
//! lifetime and can reset it between runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use tracing::debug;

use super::closure::DistanceClosure;
use crate::alphabet::{to_string, Letter};

/// Seed pair identifying a closure: `(ciphertext, lacuna text)`.
pub type SeedKey = (Vec<Letter>, Vec<Letter>);

type Slot = Arc<OnceCell<Arc<DistanceClosure>>>;

/// Build-once cache of [`DistanceClosure`] values keyed by their seed pair.
///
/// Concurrent first requests for the same key block on a per-key
/// [`OnceCell`]; requests for different keys do not contend beyond the short
/// map lookup.
#[derive(Debug, Default)]
pub struct DistanceCache {
    slots: Mutex<HashMap<SeedKey, Slot>>,
}

impl DistanceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the closure for `(start, end)`, computing it on first use.
    pub fn closure(&self, start: &[Letter], end: &[Letter]) -> Arc<DistanceClosure> {
        let slot = {
            let mut slots = self.lock();
            slots
                .entry((start.to_vec(), end.to_vec()))
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };
        if let Some(closure) = slot.get() {
            debug!(seed = %to_string(start), "distance closure served from cache");
            return Arc::clone(closure);
        }
        Arc::clone(slot.get_or_init(|| {
            let closure = DistanceClosure::compute(start, end);
            debug!(
                seed = %to_string(start),
                entries = closure.len(),
                "distance closure computed"
            );
            Arc::new(closure)
        }))
    }

    /// Whether a closure for the seed pair has already been computed.
    pub fn contains(&self, start: &[Letter], end: &[Letter]) -> bool {
        self.lock()
            .get(&(start.to_vec(), end.to_vec()))
            .map_or(false, |slot| slot.get().is_some())
    }

    /// Number of computed closures.
    pub fn len(&self) -> usize {
        self.lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Whether no closure has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached closure.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SeedKey, Slot>> {
        // Slots are inserted whole, so a poisoned map is still consistent.
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::lacuna_text;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn closure_is_built_once_per_seed() {
        let cache = DistanceCache::new();
        let text = letters("KRYPTOS");
        let lacuna = lacuna_text(&text);
        assert!(cache.is_empty());
        let first = cache.closure(&text, &lacuna);
        let second = cache.closure(&text, &lacuna);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&text, &lacuna));
    }

    #[test]
    fn distinct_seeds_get_distinct_entries() {
        let cache = DistanceCache::new();
        let a = letters("KRYPTOS");
        let b = letters("PALIMPSEST");
        cache.closure(&a, &lacuna_text(&a));
        cache.closure(&b, &lacuna_text(&b));
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&lacuna_text(&a), &a));
    }

    #[test]
    fn clear_resets_the_store() {
        let cache = DistanceCache::new();
        let text = letters("ABSCISSA");
        let first = cache.closure(&text, &lacuna_text(&text));
        cache.clear();
        assert!(cache.is_empty());
        let rebuilt = cache.closure(&text, &lacuna_text(&text));
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(*first, *rebuilt);
    }
}
