use std::sync::{Mutex, MutexGuard};

use super::entry::{Entry, Placement};
use super::retainer::{RankedRetainer, RetainerError};

/// A retainer behind a mutex, for producers running on several threads.
///
/// Every operation takes the lock for its whole duration, so insertions are
/// serialized and a snapshot never observes a half-placed entry.
#[derive(Debug)]
pub struct SharedRetainer<T, W = f64> {
    inner: Mutex<RankedRetainer<T, W>>,
}

impl<T, W: PartialOrd> SharedRetainer<T, W> {
    pub fn new(limit: usize) -> Result<Self, RetainerError> {
        Ok(Self::from_retainer(RankedRetainer::new(limit)?))
    }

    pub fn from_retainer(retainer: RankedRetainer<T, W>) -> Self {
        Self {
            inner: Mutex::new(retainer),
        }
    }

    pub fn insert(&self, item: T, weight: W) {
        self.lock().insert(item, weight);
    }

    pub fn offer(&self, item: T, weight: W) -> Placement<T, W> {
        self.lock().offer(item, weight)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> RankedRetainer<T, W> {
        self.inner.into_inner().unwrap_or_else(|poisoned| {
            let mut retainer = poisoned.into_inner();
            retainer.restore_order();
            retainer
        })
    }

    // A panic while the lock is held can only come from a user `PartialOrd`
    // impl mid-placement. The entry set and counters are complete at that
    // point but the order may not be, so it is restored before reuse.
    fn lock(&self) -> MutexGuard<'_, RankedRetainer<T, W>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            let mut guard = poisoned.into_inner();
            guard.restore_order();
            guard
        })
    }
}

impl<T: Clone, W: Clone + PartialOrd> SharedRetainer<T, W> {
    pub fn snapshot(&self) -> Vec<Entry<T, W>> {
        self.lock().snapshot()
    }
}
