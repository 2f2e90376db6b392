//! Bounded-capacity ranked retention for history, search and suggestion
//! results.
//!
//! `ranked-core` keeps the `limit` heaviest `(item, weight)` pairs out of a
//! stream of candidates without ever materializing the stream, in descending
//! weight order with a stable tie rule: among equal weights, whoever got
//! there first stays ahead. On top of the [`RankedRetainer`] sit place
//! candidates, scorers for the history and search views, a selector that
//! drives one ranking round, and serializable results for consumers.

pub mod config;
pub mod place;
pub mod retainer;
pub mod selection;
pub mod types;

pub use retainer::{Entry, Placement, RankedRetainer, Regime, RetainerError, SharedRetainer};
