//! Durable personal-best storage.

mod error;
mod models;
mod schema;
mod sqlite;

pub use error::StoreError;
pub use models::{NewPlayerScore, PlayerScore};
pub use sqlite::SqliteScoreStore;

/// Result of a conditional high-score write.
///
/// `Rejected` is a normal business outcome (the stored personal best was
/// already at least as high), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalWrite {
    /// The write applied: no record existed, or the stored score was lower.
    Accepted,
    /// A record exists with a score greater than or equal to the submission.
    Rejected,
}

/// Durable store holding one personal-best record per (board, player).
///
/// The stored `high_score` is monotonically non-decreasing: the only mutation
/// path is [`ScoreStore::conditional_update_high_score`], which applies a
/// write only when it strictly raises the stored score. The accept/reject
/// decision must be atomic with respect to concurrent writers for the same
/// (board, player) key, so of two racing writes the larger score always ends
/// up on record.
pub trait ScoreStore: Send + Sync {
    /// Applies `score` as the player's new personal best if it is strictly
    /// greater than the stored one (or no record exists yet).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a backend fault. A lost comparison is
    /// reported as [`ConditionalWrite::Rejected`], never as an error.
    fn conditional_update_high_score(
        &self,
        board_id: &str,
        username: &str,
        score: i64,
    ) -> Result<ConditionalWrite, StoreError>;

    /// Reads the player's current personal-best record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a backend fault.
    fn personal_best(
        &self,
        board_id: &str,
        username: &str,
    ) -> Result<Option<PlayerScore>, StoreError>;
}
