// tests/news_rank.rs
//
// Ranking contract for the news listing: filter correctness, composite
// ordering (priority rank asc, recency desc), truncation, and stability.

use chrono::{DateTime, Duration, TimeZone, Utc};

use emergilink_api::model::EmergencyNews;
use emergilink_api::news::{priority_rank, rank, NewsFilter};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn item(id: &str, category: &str, priority: &str, hour: i64) -> EmergencyNews {
    EmergencyNews {
        id: id.to_string(),
        title: format!("title {id}"),
        summary: format!("summary {id}"),
        content: format!("content {id}"),
        category: category.to_string(),
        location: "Bay Area".to_string(),
        published_at: base_time() + Duration::hours(hour),
        image_url: None,
        source: "EmergiLink News".to_string(),
        priority: priority.to_string(),
    }
}

/// Four items: normal@t4, urgent@t1, high@t2, urgent@t3.
fn fixture() -> Vec<EmergencyNews> {
    vec![
        item("n-normal", "safety_update", "normal", 4),
        item("n-urgent-old", "emergency_response", "urgent", 1),
        item("n-high", "community_alert", "high", 2),
        item("n-urgent-new", "emergency_response", "urgent", 3),
    ]
}

fn ids(out: &[EmergencyNews]) -> Vec<&str> {
    out.iter().map(|n| n.id.as_str()).collect()
}

#[test]
fn priority_rank_mapping() {
    assert_eq!(priority_rank("urgent"), 0);
    assert_eq!(priority_rank("high"), 1);
    assert_eq!(priority_rank("normal"), 2);
    assert_eq!(priority_rank("low"), 3);
    // unrecognized labels tie with "low"
    assert_eq!(priority_rank("critical"), 3);
    assert_eq!(priority_rank(""), 3);
    assert_eq!(priority_rank("URGENT"), 3);
}

#[test]
fn unfiltered_output_orders_by_priority_then_recency() {
    let out = rank(fixture(), &NewsFilter::default(), 10);
    assert_eq!(
        ids(&out),
        vec!["n-urgent-new", "n-urgent-old", "n-high", "n-normal"]
    );
}

#[test]
fn ordering_invariant_holds_for_adjacent_pairs() {
    let out = rank(fixture(), &NewsFilter::default(), 10);
    for pair in out.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (ra, rb) = (priority_rank(&a.priority), priority_rank(&b.priority));
        assert!(ra <= rb, "{} before {}", a.id, b.id);
        if ra == rb {
            assert!(a.published_at >= b.published_at, "{} before {}", a.id, b.id);
        }
    }
}

#[test]
fn priority_filter_keeps_only_matching_items() {
    let filter = NewsFilter {
        priority: Some("urgent".to_string()),
        ..Default::default()
    };
    let out = rank(fixture(), &filter, 10);
    assert_eq!(ids(&out), vec!["n-urgent-new", "n-urgent-old"]);
    assert!(out.iter().all(|n| n.priority == "urgent"));
}

#[test]
fn category_and_priority_filters_compose_as_and() {
    let mut items = fixture();
    items.push(item("n-urgent-safety", "safety_update", "urgent", 5));

    let filter = NewsFilter {
        category: Some("safety_update".to_string()),
        priority: Some("urgent".to_string()),
    };
    let out = rank(items, &filter, 10);
    assert_eq!(ids(&out), vec!["n-urgent-safety"]);
}

#[test]
fn filters_are_case_sensitive_with_no_normalization() {
    let filter = NewsFilter {
        category: Some("Emergency_Response".to_string()),
        ..Default::default()
    };
    assert!(rank(fixture(), &filter, 10).is_empty());

    let filter = NewsFilter {
        priority: Some("Urgent".to_string()),
        ..Default::default()
    };
    assert!(rank(fixture(), &filter, 10).is_empty());
}

#[test]
fn limit_one_returns_most_urgent_most_recent() {
    let out = rank(fixture(), &NewsFilter::default(), 1);
    assert_eq!(ids(&out), vec!["n-urgent-new"]);
}

#[test]
fn limit_zero_yields_empty() {
    assert!(rank(fixture(), &NewsFilter::default(), 0).is_empty());
}

#[test]
fn limit_beyond_filtered_count_yields_full_set() {
    let out = rank(fixture(), &NewsFilter::default(), 1_000);
    assert_eq!(out.len(), 4);
}

#[test]
fn output_length_is_min_of_limit_and_filtered_count() {
    for limit in 0..6 {
        let out = rank(fixture(), &NewsFilter::default(), limit);
        assert_eq!(out.len(), limit.min(4), "limit {limit}");
    }
}

#[test]
fn empty_input_is_not_an_error() {
    let out = rank(Vec::new(), &NewsFilter::default(), 20);
    assert!(out.is_empty());
}

#[test]
fn category_without_matches_yields_empty() {
    let filter = NewsFilter {
        category: Some("disaster_relief".to_string()),
        ..Default::default()
    };
    assert!(rank(fixture(), &filter, 20).is_empty());
}

#[test]
fn unknown_priority_ties_with_low_and_breaks_ties_on_recency() {
    let items = vec![
        item("n-low-old", "safety_update", "low", 1),
        item("n-mystery", "safety_update", "critical", 2),
        item("n-normal", "safety_update", "normal", 0),
    ];
    let out = rank(items, &NewsFilter::default(), 10);
    // normal outranks the rank-3 pair; within rank 3 the newer item wins
    assert_eq!(ids(&out), vec!["n-normal", "n-mystery", "n-low-old"]);
}

#[test]
fn items_equal_on_both_keys_keep_input_order() {
    let items = vec![
        item("n-first", "safety_update", "high", 2),
        item("n-second", "safety_update", "high", 2),
        item("n-third", "safety_update", "high", 2),
    ];
    let out = rank(items, &NewsFilter::default(), 10);
    assert_eq!(ids(&out), vec!["n-first", "n-second", "n-third"]);
}

#[test]
fn reranking_is_deterministic() {
    let a = rank(fixture(), &NewsFilter::default(), 3);
    let b = rank(fixture(), &NewsFilter::default(), 3);
    assert_eq!(a, b);
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let filter = NewsFilter {
        priority: Some("urgent".to_string()),
        ..Default::default()
    };
    let once = rank(fixture(), &filter, 100);
    let twice = rank(once.clone(), &filter, 100);
    assert_eq!(once, twice);
}
