pub mod identifiers;
pub mod ranked_snapshot;
pub mod selection_result;

pub use identifiers::SnapshotVersion;
pub use ranked_snapshot::{RankedSnapshot, SnapshotMetadata};
pub use selection_result::{
    Query, ScoreDetails, SelectedPlace, SelectionError, SelectionMetadata, SelectionResult,
    SelectionWhy,
};
