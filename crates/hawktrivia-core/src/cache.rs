//! Single-slot cache with a wall-clock TTL.
//!
//! Policy: opportunistic reads, no mutual exclusion around recomputation.
//! The mutex only guards the slot itself; a caller that observes a miss
//! recomputes outside the lock, so two concurrent misses may both recompute
//! and both store. That redundant work is accepted as harmless — last write
//! wins and both writers store an equally fresh value.

use std::sync::Mutex;
use std::time::{Duration, Instant};

pub struct TimedSlot<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TimedSlot<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value if one exists and is younger than the TTL.
    pub fn get(&self) -> Option<T> {
        let slot = self.slot.lock().unwrap();
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Store a freshly computed value, replacing whatever was there.
    pub fn put(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some((Instant::now(), value));
    }

    /// Drop the cached value so the next read recomputes.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap();
        *slot = None;
    }
}
