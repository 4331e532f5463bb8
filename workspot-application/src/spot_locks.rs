use std::{collections::HashMap, sync::Arc};

use parking_lot::{ArcMutexGuard, Mutex, RawMutex};

/// Guard over one spot's mutex, owning its entry in the arena.
pub type SpotGuard = ArcMutexGuard<RawMutex, ()>;

/// Arena of per-spot mutexes.
///
/// The guard returned by [`exclusive`](Self::exclusive) must be held
/// across the whole (review write, aggregate recompute) sequence for
/// that spot. Each spot id maps to its own mutex, so flows touching
/// different spots never contend.
#[derive(Debug, Default)]
pub struct SpotLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SpotLocks {
    pub fn new() -> Self {
        Default::default()
    }

    /// Blocks until the calling flow owns the given spot exclusively.
    pub fn exclusive(&self, spot_id: &str) -> SpotGuard {
        // The arena lock is released before blocking on the spot's
        // mutex, otherwise one busy spot would stall all others.
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(spot_id.to_owned()).or_default())
        };
        lock.lock_arc()
    }

    /// Forgets the mutex of a deleted spot.
    pub(crate) fn discard(&self, spot_id: &str) {
        self.locks.lock().remove(spot_id);
    }
}
