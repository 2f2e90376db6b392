pub mod ranking;

use tracing::debug;

use crate::place::Place;
use crate::retainer::{Placement, RankedRetainer};
use crate::types::selection_result::{
	Query, SelectedPlace, SelectionError, SelectionMetadata, SelectionResult, SelectionWhy,
};
pub use ranking::{FrecencyScorer, Scorer, TermMatchScorer, VisitCountScorer};

pub struct RankedSelector<S> {
	scorer: S,
}

impl Default for RankedSelector<VisitCountScorer> {
	fn default() -> Self {
		Self {
			scorer: VisitCountScorer,
		}
	}
}

impl<S> RankedSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	pub fn scorer(&self) -> &S {
		&self.scorer
	}

	/// Runs one ranking round over `places`, keeping the `limit` heaviest.
	///
	/// Places are offered in input order, so among equal weights the one
	/// produced first is listed first.
	pub fn select<I>(
		&self,
		places: I,
		query: Query,
		limit: usize,
	) -> Result<SelectionResult, SelectionError>
	where
		I: IntoIterator<Item = Place>,
	{
		let mut retainer = RankedRetainer::new(limit).map_err(|_| SelectionError::InvalidLimit(limit))?;

		let mut candidates_considered = 0;
		let mut candidates_matched = 0;
		let mut candidates_rejected = 0;
		let mut candidates_evicted = 0;

		// 1. Scoring Phase, streamed straight into the retainer
		for place in places {
			candidates_considered += 1;

			let details = self.scorer.score(&place, &query);
			if !self.scorer.matches(&details) {
				continue;
			}
			candidates_matched += 1;

			let weight = self.scorer.score_value(&details);
			// Skip building the payload for candidates that cannot place
			if !retainer.would_accept(&weight) {
				candidates_rejected += 1;
				continue;
			}

			let selected = SelectedPlace {
				url: place.url,
				title: place.title,
				visit_count: place.visit_count,
				last_visit: place.last_visit,
				weight,
				why: SelectionWhy {
					query_terms: details.query_terms,
					term_matches: details.term_matches,
				},
			};

			// 2. Retention Phase
			match retainer.offer(selected, weight) {
				Placement::Appended { .. } => {}
				Placement::Replaced { .. } => candidates_evicted += 1,
				Placement::Rejected { .. } => candidates_rejected += 1,
			}
		}

		let places = retainer.into_items();

		debug!(
			query = %query.raw,
			limit,
			considered = candidates_considered,
			matched = candidates_matched,
			retained = places.len(),
			"ranking round complete"
		);

		let metadata = SelectionMetadata {
			query: query.raw,
			limit,
			candidates_considered,
			candidates_matched,
			candidates_retained: places.len(),
			candidates_rejected,
			candidates_evicted,
		};

		Ok(SelectionResult {
			places,
			selection: metadata,
		})
	}
}
