pub mod entry;
pub mod placement;
pub mod retainer;
pub mod shared;

pub use entry::{Entry, Placement, Regime, RetainerStats};
pub use retainer::{RankedRetainer, RetainerError};
pub use shared::SharedRetainer;
