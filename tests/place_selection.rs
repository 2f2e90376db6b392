use chrono::{Duration, TimeZone, Utc};
use ranked_core::place::{Place, PlaceError};
use ranked_core::selection::{FrecencyScorer, RankedSelector, Scorer, TermMatchScorer, VisitCountScorer};
use ranked_core::types::{Query, SelectionError};

fn make_place(url: &str, title: &str, visits: u32) -> Place {
    Place::new(url, Some(title.to_string()), visits, None).unwrap()
}

fn urls(places: &[ranked_core::types::SelectedPlace]) -> Vec<&str> {
    places.iter().map(|p| p.url.as_str()).collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn place_requires_a_url() {
    let err = Place::new("   ", None, 1, None).unwrap_err();
    assert_eq!(err, PlaceError::EmptyUrl);
}

#[test]
fn place_normalizes_url_and_blank_title() {
    let place = Place::new("  https://example.org/ ", Some("  ".to_string()), 3, None).unwrap();
    assert_eq!(place.url, "https://example.org/");
    assert_eq!(place.title, None);
    assert_eq!(place.searchable_text(), "https://example.org/");
}

#[test]
fn query_normalizes_terms() {
    let query = Query::new("  Rust   BORROW checker ");
    assert_eq!(query.terms, vec!["rust", "borrow", "checker"]);
    assert!(!query.is_empty());
    assert!(Query::all().is_empty());
}

#[test]
fn most_visited_round_keeps_top_places_in_order() {
    init_tracing();
    let places = vec![
        make_place("https://a.example/", "A", 5),
        make_place("https://b.example/", "B", 3),
        make_place("https://c.example/", "C", 8),
        make_place("https://d.example/", "D", 1),
        make_place("https://e.example/", "E", 4),
    ];

    let selector = RankedSelector::default();
    let result = selector.select(places, Query::all(), 3).unwrap();

    assert_eq!(
        urls(&result.places),
        vec!["https://c.example/", "https://a.example/", "https://e.example/"]
    );
    assert_eq!(result.places[0].weight, 8.0);

    let meta = &result.selection;
    assert_eq!(meta.limit, 3);
    assert_eq!(meta.candidates_considered, 5);
    assert_eq!(meta.candidates_matched, 5);
    assert_eq!(meta.candidates_retained, 3);
    assert_eq!(meta.candidates_rejected, 1);
    assert_eq!(meta.candidates_evicted, 1);
}

#[test]
fn equal_visit_counts_keep_producer_order() {
    let places = vec![
        make_place("https://first.example/", "First", 2),
        make_place("https://second.example/", "Second", 2),
        make_place("https://third.example/", "Third", 2),
    ];

    let result = RankedSelector::new(VisitCountScorer)
        .select(places, Query::all(), 2)
        .unwrap();

    assert_eq!(
        urls(&result.places),
        vec!["https://first.example/", "https://second.example/"]
    );
    assert_eq!(result.selection.candidates_rejected, 1);
}

#[test]
fn zero_limit_round_is_invalid() {
    let result = RankedSelector::default().select(Vec::new(), Query::all(), 0);
    assert!(matches!(result, Err(SelectionError::InvalidLimit(0))));
}

#[test]
fn empty_round_yields_no_places() {
    let result = RankedSelector::default()
        .select(Vec::new(), Query::new("anything"), 5)
        .unwrap();

    assert!(result.places.is_empty());
    assert_eq!(result.selection.candidates_considered, 0);
    assert_eq!(result.selection.query, "anything");
}

#[test]
fn term_match_scorer_filters_and_ranks_by_coverage() {
    let places = vec![
        make_place("https://doc.rust-lang.org/book/", "The Rust Book", 2),
        make_place("https://news.example/", "Daily news", 50),
        make_place("https://rust-lang.org/", "Rust Programming Language", 10),
        make_place("https://crates.io/", "Rust package registry book index", 1),
    ];

    let result = RankedSelector::new(TermMatchScorer)
        .select(places, Query::new("rust book"), 10)
        .unwrap();

    assert_eq!(
        urls(&result.places),
        vec![
            "https://doc.rust-lang.org/book/",
            "https://crates.io/",
            "https://rust-lang.org/",
        ]
    );
    assert_eq!(result.selection.candidates_considered, 4);
    assert_eq!(result.selection.candidates_matched, 3);

    let why = &result.places[0].why;
    assert_eq!(why.query_terms, vec!["rust", "book"]);
    assert_eq!(why.term_matches, 2);
    assert_eq!(result.places[2].why.term_matches, 1);
}

#[test]
fn term_match_popularity_never_outweighs_coverage() {
    let scorer = TermMatchScorer;
    let query = Query::new("alpha beta");

    let popular = make_place("https://popular.example/alpha", "Alpha", u32::MAX);
    let precise = make_place("https://precise.example/", "alpha beta", 0);

    let popular_weight = scorer.score_value(&scorer.score(&popular, &query));
    let precise_weight = scorer.score_value(&scorer.score(&precise, &query));

    assert!(precise_weight > popular_weight);
}

#[test]
fn term_match_popularity_never_outweighs_coverage_for_long_queries() {
    let scorer = TermMatchScorer;

    for term_count in [2usize, 10, 46, 50, 200] {
        let terms: Vec<String> = (0..term_count).map(|i| format!("w{i:03}")).collect();
        let query = Query::new(terms.join(" "));

        let popular = make_place("https://popular.example/", "w000", u32::MAX);
        let precise = make_place("https://precise.example/", "w000 w001", 0);

        let popular_details = scorer.score(&popular, &query);
        let precise_details = scorer.score(&precise, &query);
        assert_eq!(popular_details.term_matches, 1);
        assert_eq!(precise_details.term_matches, 2);

        let popular_weight = scorer.score_value(&popular_details);
        let precise_weight = scorer.score_value(&precise_details);
        assert!(
            precise_weight > popular_weight,
            "{term_count} terms: {precise_weight} <= {popular_weight}"
        );
    }
}

#[test]
fn frecency_prefers_recent_visits() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let stale = Place::new("https://stale.example/", None, 10, Some(now - Duration::days(365))).unwrap();
    let fresh = Place::new("https://fresh.example/", None, 4, Some(now - Duration::hours(2))).unwrap();
    let never = Place::new("https://never.example/", None, 9, None).unwrap();

    let scorer = FrecencyScorer::new(now);
    assert!((scorer.recency_boost(Some(now)) - 4.0).abs() < 1e-9);
    assert!((scorer.recency_boost(None) - 1.0).abs() < f64::EPSILON);

    let result = RankedSelector::new(scorer)
        .select(vec![stale, fresh, never], Query::all(), 3)
        .unwrap();

    assert_eq!(
        urls(&result.places),
        vec![
            "https://fresh.example/",
            "https://stale.example/",
            "https://never.example/",
        ]
    );
    assert!((result.places[0].weight - 16.0).abs() < 1e-9);
    assert_eq!(result.places[0].last_visit, Some(now - Duration::hours(2)));
    assert_eq!(result.places[2].last_visit, None);
}

#[test]
fn frecency_boost_decays_with_age() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let scorer = FrecencyScorer::with_decay(now, 10.0, 30.0);

    let today = scorer.recency_boost(Some(now));
    let month = scorer.recency_boost(Some(now - Duration::days(30)));
    let year = scorer.recency_boost(Some(now - Duration::days(365)));
    let future = scorer.recency_boost(Some(now + Duration::days(3)));

    assert!((today - 10.0).abs() < 1e-9);
    assert!(today > month && month > year && year > 1.0);
    assert!((future - today).abs() < 1e-9, "future visits clamp to today");
}
