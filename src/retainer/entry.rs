use serde::{Deserialize, Serialize};

/// An `(item, weight)` pair held by a retainer.
///
/// The item is never inspected; only the weight takes part in ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T, W = f64> {
    pub item: T,
    pub weight: W,
}

impl<T, W> Entry<T, W> {
    pub fn new(item: T, weight: W) -> Self {
        Self { item, weight }
    }

    pub fn into_parts(self) -> (T, W) {
        (self.item, self.weight)
    }
}

/// Which of the two insertion regimes a retainer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Fewer than `limit` entries held; every insertion appends.
    Growing,
    /// Exactly `limit` entries held; an insertion either replaces the weakest
    /// entry or is rejected.
    Saturated,
}

/// How every insertion so far was resolved.
///
/// `offered == appended + replaced + rejected` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerStats {
    pub offered: u64,
    pub appended: u64,
    pub replaced: u64,
    pub rejected: u64,
}

/// Outcome of a single insertion.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement<T, W = f64> {
    /// The retainer had room; the entry now rests at `index`.
    Appended { index: usize },
    /// The weakest entry was overwritten and handed back as `evicted`.
    Replaced { index: usize, evicted: Entry<T, W> },
    /// The candidate could not outrank the weakest entry. Nothing changed.
    Rejected { entry: Entry<T, W> },
}

impl<T, W> Placement<T, W> {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Placement::Rejected { .. })
    }

    /// Final position of the accepted entry, `None` when rejected.
    pub fn index(&self) -> Option<usize> {
        match self {
            Placement::Appended { index } | Placement::Replaced { index, .. } => Some(*index),
            Placement::Rejected { .. } => None,
        }
    }
}
