use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized search query.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace
/// - No terms means "match everything"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .to_lowercase()
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        Self { raw, terms }
    }

    /// The empty query, used by views that rank every candidate.
    pub fn all() -> Self {
        Self::new("")
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A place that survived a ranking round.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPlace {
    pub url: String,
    pub title: Option<String>,
    pub visit_count: u32,
    pub last_visit: Option<DateTime<Utc>>,

    pub weight: f64,

    pub why: SelectionWhy,
}

/// Explanation for why a place received its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWhy {
    pub query_terms: Vec<String>,
    pub term_matches: usize,
}

/// Metadata describing the outcome of a ranking round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub query: String,
    pub limit: usize,

    pub candidates_considered: usize,
    pub candidates_matched: usize,
    pub candidates_retained: usize,
    pub candidates_rejected: usize,
    pub candidates_evicted: usize,
}

/// The final result of a ranking round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub places: Vec<SelectedPlace>,
    pub selection: SelectionMetadata,
}

/// Internal: scoring components before they collapse into a weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDetails {
    pub query_terms: Vec<String>,
    pub term_matches: usize,
    pub visit_count: u32,
    pub last_visit: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(usize),
}
