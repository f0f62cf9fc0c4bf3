use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{DailyBar, Symbol};

/// Per-symbol bar series cache with a get-or-compute contract.
///
/// The generator behind the synthetic feed is randomized, so repeated lookups
/// for the same symbol must come from one cached series. The cache is an
/// explicit object owned by its feed, never a process-wide singleton.
#[derive(Debug, Default)]
pub struct SeriesCache {
    entries: Mutex<HashMap<Symbol, Arc<Vec<DailyBar>>>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached series for `symbol`, computing and storing it on
    /// first access.
    pub fn get_or_compute<F>(&self, symbol: &Symbol, compute: F) -> Arc<Vec<DailyBar>>
    where
        F: FnOnce() -> Vec<DailyBar>,
    {
        let mut entries = self
            .entries
            .lock()
            .expect("series cache lock should not be poisoned");
        entries
            .entry(symbol.clone())
            .or_insert_with(|| Arc::new(compute()))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("series cache lock should not be poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("series cache lock should not be poisoned")
            .clear();
    }
}
