use std::cmp::Ordering;

use chrono::Utc;
use thiserror::Error;
use tracing::trace;

use super::entry::{Entry, Placement, Regime, RetainerStats};
use super::placement::{bubble_up, is_placed};
use crate::types::ranked_snapshot::{RankedSnapshot, SnapshotMetadata};

/// Upper bound on the storage reserved up front. Larger limits grow on demand.
const PREALLOCATE_MAX: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetainerError {
    #[error("Retainer limit must be at least 1")]
    ZeroLimit,
}

/// Keeps the `limit` heaviest items offered so far, heaviest first.
///
/// Candidates arrive one at a time and in any order. While fewer than `limit`
/// entries are held every candidate is appended and moved into place. Once
/// saturated, a candidate must be strictly heavier than the weakest entry to
/// take its slot; equal weights never displace an existing entry, and equal
/// weights never swap while an entry is moved into place. Among equals the
/// entry that occupied its position first stays ahead.
///
/// The retainer is a plain single-writer structure. Use
/// [`SharedRetainer`](super::SharedRetainer) or one retainer per producer
/// followed by [`absorb`](Self::absorb) when candidates come from several
/// threads.
#[derive(Debug, Clone)]
pub struct RankedRetainer<T, W = f64> {
    limit: usize,
    entries: Vec<Entry<T, W>>,
    stats: RetainerStats,
}

impl<T, W: PartialOrd> RankedRetainer<T, W> {
    pub fn new(limit: usize) -> Result<Self, RetainerError> {
        if limit == 0 {
            return Err(RetainerError::ZeroLimit);
        }

        Ok(Self {
            limit,
            entries: Vec::with_capacity(limit.min(PREALLOCATE_MAX)),
            stats: RetainerStats::default(),
        })
    }

    /// Offers a candidate, discarding the outcome.
    pub fn insert(&mut self, item: T, weight: W) {
        let _ = self.offer(item, weight);
    }

    /// Offers a candidate and reports where it landed.
    ///
    /// Counters are bumped once the outcome is known and before any entry
    /// moves, so a panic inside a weight comparison never leaves an entry
    /// held without being counted.
    pub fn offer(&mut self, item: T, weight: W) -> Placement<T, W> {
        if self.entries.len() < self.limit {
            self.entries.push(Entry::new(item, weight));
            self.stats.offered += 1;
            self.stats.appended += 1;
            let tail = self.entries.len() - 1;
            let index = bubble_up(&mut self.entries, tail);
            debug_assert!(is_placed(&self.entries, index));
            return Placement::Appended { index };
        }

        let last = self.limit - 1;
        if !outranks(&weight, &self.entries[last].weight) {
            self.stats.offered += 1;
            self.stats.rejected += 1;
            trace!(limit = self.limit, "candidate rejected by saturated retainer");
            return Placement::Rejected {
                entry: Entry::new(item, weight),
            };
        }

        let evicted = std::mem::replace(&mut self.entries[last], Entry::new(item, weight));
        self.stats.offered += 1;
        self.stats.replaced += 1;
        let index = bubble_up(&mut self.entries, last);
        trace!(limit = self.limit, index, "weakest entry replaced");
        debug_assert!(is_placed(&self.entries, index));

        Placement::Replaced { index, evicted }
    }

    /// Re-sorts the held entries after a placement was interrupted midway.
    ///
    /// Runs the same strict-greater walk for every position, so entries of
    /// equal weight keep their relative order.
    pub(crate) fn restore_order(&mut self) {
        for index in 1..self.entries.len() {
            bubble_up(&mut self.entries, index);
        }
    }

    /// Whether a candidate of this weight would be accepted right now.
    pub fn would_accept(&self, weight: &W) -> bool {
        match self.weakest() {
            Some(weakest) if self.is_saturated() => outranks(weight, &weakest.weight),
            _ => true,
        }
    }

    /// Merges another retainer into this one, offering its entries heaviest
    /// first. Entries already held win ties against the incoming ones.
    pub fn absorb(&mut self, other: RankedRetainer<T, W>) {
        for entry in other.entries {
            self.insert(entry.item, entry.weight);
        }
    }
}

impl<T, W> RankedRetainer<T, W> {
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn regime(&self) -> Regime {
        if self.entries.len() == self.limit {
            Regime::Saturated
        } else {
            Regime::Growing
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.regime() == Regime::Saturated
    }

    /// The lowest-weight entry currently held.
    pub fn weakest(&self) -> Option<&Entry<T, W>> {
        self.entries.last()
    }

    /// Borrowed view of the held entries, heaviest first.
    pub fn entries(&self) -> &[Entry<T, W>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T, W>> {
        self.entries.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    pub fn stats(&self) -> RetainerStats {
        self.stats
    }

    pub fn into_entries(self) -> Vec<Entry<T, W>> {
        self.entries
    }

    pub fn into_items(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.item).collect()
    }
}

impl<T: Clone, W: Clone> RankedRetainer<T, W> {
    /// Owned copy of the held entries, heaviest first.
    pub fn snapshot(&self) -> Vec<Entry<T, W>> {
        self.entries.clone()
    }

    pub fn report(&self) -> RankedSnapshot<T, W> {
        RankedSnapshot {
            entries: self.snapshot(),
            metadata: SnapshotMetadata {
                limit: self.limit,
                len: self.entries.len(),
                regime: self.regime(),
                stats: self.stats,
                taken_at: Utc::now(),
            },
        }
    }
}

impl<T, W: PartialOrd> Extend<(T, W)> for RankedRetainer<T, W> {
    fn extend<I: IntoIterator<Item = (T, W)>>(&mut self, iter: I) {
        for (item, weight) in iter {
            self.insert(item, weight);
        }
    }
}

impl<T, W> IntoIterator for RankedRetainer<T, W> {
    type Item = Entry<T, W>;
    type IntoIter = std::vec::IntoIter<Entry<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T, W> IntoIterator for &'a RankedRetainer<T, W> {
    type Item = &'a Entry<T, W>;
    type IntoIter = std::slice::Iter<'a, Entry<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Strictly greater. Ties and incomparable weights never outrank.
fn outranks<W: PartialOrd>(candidate: &W, incumbent: &W) -> bool {
    matches!(candidate.partial_cmp(incumbent), Some(Ordering::Greater))
}
