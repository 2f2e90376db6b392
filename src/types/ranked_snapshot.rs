use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::retainer::{Entry, Regime, RetainerStats};
use crate::types::identifiers::SnapshotVersion;

/// A retainer's contents at one point in time, ready to hand to a consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSnapshot<T, W = f64> {
    pub entries: Vec<Entry<T, W>>,
    pub metadata: SnapshotMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub limit: usize,
    pub len: usize,
    pub regime: Regime,
    pub stats: RetainerStats,
    pub taken_at: DateTime<Utc>, // informational only
}

impl<T, W> RankedSnapshot<T, W> {
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }
}

impl<T: Serialize, W: Serialize> RankedSnapshot<T, W> {
    /// Digest of the ranked entries. Metadata does not take part, so two
    /// rounds that settle on the same ranking share a version.
    pub fn version(&self) -> Result<SnapshotVersion, serde_json::Error> {
        SnapshotVersion::from_entries(&self.entries)
    }
}
