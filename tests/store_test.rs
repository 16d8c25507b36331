//! Tests for the durable score store.

use tempfile::NamedTempFile;

use rankboard::{ConditionalWrite, ScoreStore, SqliteScoreStore};

const BOARD: &str = "GlobalLeaderboard";

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready store.
fn setup_test_store() -> (NamedTempFile, SqliteScoreStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let store = SqliteScoreStore::new(db_path).expect("Failed to create store");
    store.run_migrations().expect("Migrations failed");
    (db_file, store)
}

#[test]
fn test_first_write_accepted() {
    let (_db, store) = setup_test_store();
    let result = store
        .conditional_update_high_score(BOARD, "alice", 100)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Accepted);

    let record = store
        .personal_best(BOARD, "alice")
        .expect("Read failed")
        .expect("Record missing");
    assert_eq!(*record.high_score(), 100);
}

#[test]
fn test_lower_score_rejected_without_mutation() {
    let (_db, store) = setup_test_store();
    store
        .conditional_update_high_score(BOARD, "bob", 50)
        .expect("Write failed");

    let result = store
        .conditional_update_high_score(BOARD, "bob", 30)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Rejected);

    let record = store
        .personal_best(BOARD, "bob")
        .expect("Read failed")
        .expect("Record missing");
    assert_eq!(*record.high_score(), 50);
}

#[test]
fn test_equal_score_rejected() {
    let (_db, store) = setup_test_store();
    store
        .conditional_update_high_score(BOARD, "carol", 75)
        .expect("Write failed");

    let result = store
        .conditional_update_high_score(BOARD, "carol", 75)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Rejected);
}

#[test]
fn test_higher_score_accepted() {
    let (_db, store) = setup_test_store();
    store
        .conditional_update_high_score(BOARD, "dave", 10)
        .expect("Write failed");

    let result = store
        .conditional_update_high_score(BOARD, "dave", 11)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Accepted);

    let record = store
        .personal_best(BOARD, "dave")
        .expect("Read failed")
        .expect("Record missing");
    assert_eq!(*record.high_score(), 11);
}

#[test]
fn test_high_score_is_monotonic_over_sequence() {
    let (_db, store) = setup_test_store();
    let submissions = [40, 10, 55, 55, 20, 90, 89];
    let mut max_accepted = i64::MIN;

    for score in submissions {
        store
            .conditional_update_high_score(BOARD, "eve", score)
            .expect("Write failed");
        max_accepted = max_accepted.max(score);

        let record = store
            .personal_best(BOARD, "eve")
            .expect("Read failed")
            .expect("Record missing");
        assert_eq!(*record.high_score(), max_accepted);
    }
}

#[test]
fn test_players_are_independent() {
    let (_db, store) = setup_test_store();
    store
        .conditional_update_high_score(BOARD, "frank", 100)
        .expect("Write failed");

    let result = store
        .conditional_update_high_score(BOARD, "grace", 5)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Accepted);
}

#[test]
fn test_boards_are_independent() {
    let (_db, store) = setup_test_store();
    store
        .conditional_update_high_score("BoardA", "hank", 100)
        .expect("Write failed");

    let result = store
        .conditional_update_high_score("BoardB", "hank", 5)
        .expect("Write failed");
    assert_eq!(result, ConditionalWrite::Accepted);
}

#[test]
fn test_personal_best_not_found() {
    let (_db, store) = setup_test_store();
    let record = store
        .personal_best(BOARD, "nobody")
        .expect("Read failed");
    assert!(record.is_none());
}
