use chrono::{DateTime, Utc};

use crate::place::Place;
use crate::types::selection_result::{Query, ScoreDetails};

pub trait Scorer {
    fn score(&self, place: &Place, query: &Query) -> ScoreDetails {
        // A term matches when it occurs anywhere in the lowercased title or URL.
        let text = place.searchable_text();
        let term_matches = query
            .terms
            .iter()
            .filter(|term| text.contains(term.as_str()))
            .count();

        ScoreDetails {
            query_terms: query.terms.clone(),
            term_matches,
            visit_count: place.visit_count,
            last_visit: place.last_visit,
        }
    }

    fn score_value(&self, details: &ScoreDetails) -> f64;

    /// Candidates that do not match are never offered to the retainer.
    fn matches(&self, details: &ScoreDetails) -> bool {
        details.query_terms.is_empty() || details.term_matches > 0
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, place: &Place, query: &Query) -> ScoreDetails {
        (**self).score(place, query)
    }

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        (**self).score_value(details)
    }

    fn matches(&self, details: &ScoreDetails) -> bool {
        (**self).matches(details)
    }
}

/// "Most visited": weight is the raw visit count.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisitCountScorer;

impl Scorer for VisitCountScorer {
    fn score_value(&self, details: &ScoreDetails) -> f64 {
        f64::from(details.visit_count)
    }
}

/// Search suggestions: fraction of query terms matched, with visit count as a
/// tie-breaker that can never outweigh one extra matched term.
///
/// One extra term is worth `1 / N` for an `N`-term query. The tie-breaker is
/// `ln(1 + visits) / (POPULARITY_SCALE * N)`, and `ln(1 + u32::MAX)` is about
/// 22.2, so it stays below `0.7 / N` for any visit count.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermMatchScorer;

const POPULARITY_SCALE: f64 = 32.0;

impl Scorer for TermMatchScorer {
    fn score_value(&self, details: &ScoreDetails) -> f64 {
        let terms = details.query_terms.len().max(1) as f64;
        let coverage = details.term_matches as f64 / terms;
        let popularity = f64::from(details.visit_count).ln_1p() / (POPULARITY_SCALE * terms);

        coverage + popularity
    }
}

pub const DEFAULT_RECENCY_MAX_BOOST: f64 = 4.0;
pub const DEFAULT_RECENCY_DECAY_DAYS: f64 = 14.0;

/// Visit count scaled by how recently the place was last visited.
///
/// Formula: `visits * (1.0 + (MAX - 1.0) * exp(-days / DECAY))`
///
/// A place visited today gets the full boost; the boost fades towards 1.0
/// for places not visited in a long time. Places without a recorded visit
/// get no boost at all.
#[derive(Debug, Clone, Copy)]
pub struct FrecencyScorer {
    now: DateTime<Utc>,
    max_boost: f64,
    decay_days: f64,
}

impl FrecencyScorer {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_decay(now, DEFAULT_RECENCY_MAX_BOOST, DEFAULT_RECENCY_DECAY_DAYS)
    }

    pub fn with_decay(now: DateTime<Utc>, max_boost: f64, decay_days: f64) -> Self {
        Self {
            now,
            max_boost: max_boost.max(1.0),
            decay_days: decay_days.max(f64::EPSILON),
        }
    }

    pub fn recency_boost(&self, last_visit: Option<DateTime<Utc>>) -> f64 {
        let Some(last_visit) = last_visit else {
            return 1.0;
        };
        let days = (self.now - last_visit).num_days().max(0) as f64;

        1.0 + (self.max_boost - 1.0) * (-days / self.decay_days).exp()
    }
}

impl Scorer for FrecencyScorer {
    fn score_value(&self, details: &ScoreDetails) -> f64 {
        f64::from(details.visit_count) * self.recency_boost(details.last_visit)
    }
}
