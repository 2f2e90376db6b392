use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::retainer::Entry;

/// Content digest of a ranking: same items, same weights, same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotVersion(String);

impl SnapshotVersion {
    pub fn from_entries<T, W>(entries: &[Entry<T, W>]) -> Result<Self, serde_json::Error>
    where
        T: Serialize,
        W: Serialize,
    {
        let bytes = serde_json::to_vec(entries)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Ok(SnapshotVersion(format!("sha256:{hex}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
