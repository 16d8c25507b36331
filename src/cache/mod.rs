//! Ranked leaderboard cache.

mod error;
mod memory;

pub use error::CacheError;
pub use memory::MemoryRankedCache;

use derive_getters::Getters;
use derive_new::new;

/// One ranked member: a username and its cached score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct ScoreEntry {
    username: String,
    score: i64,
}

impl ScoreEntry {
    /// Consumes the entry, returning its username and score.
    pub fn into_parts(self) -> (String, i64) {
        (self.username, self.score)
    }
}

/// Per-board ordered ranking structure, score descending.
///
/// Membership is unique per username within a board; an upsert overwrites
/// the member's score unconditionally. Tie order among equal scores is
/// implementation-defined — callers may only rely on scores being
/// non-increasing by rank.
///
/// Every operation is total on empty or short boards: range queries beyond
/// the actual size return a shorter (possibly empty) list rather than
/// failing.
pub trait RankedCache: Send + Sync {
    /// Sets the member's score, overwriting any prior score.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on a backend fault.
    fn upsert(&self, board_id: &str, username: &str, score: i64) -> Result<(), CacheError>;

    /// Retains only the top `capacity` members by score descending,
    /// removing the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on a backend fault.
    fn trim(&self, board_id: &str, capacity: usize) -> Result<(), CacheError>;

    /// Returns the member's 0-based position in descending score order, or
    /// `None` if the member is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on a backend fault.
    fn rank_of(&self, board_id: &str, username: &str) -> Result<Option<usize>, CacheError>;

    /// Returns the inclusive index range `[start, stop]` over the ascending
    /// score ordering, with sorted-set index semantics: negative indices
    /// count from the end (`-1` is the highest score), out-of-range indices
    /// clamp, and an inverted or fully out-of-range span yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on a backend fault.
    fn range_by_rank(&self, board_id: &str, start: i64, stop: i64)
        -> Result<Vec<ScoreEntry>, CacheError>;

    /// Returns up to `n` members ordered by score descending.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on a backend fault.
    fn top_n(&self, board_id: &str, n: usize) -> Result<Vec<ScoreEntry>, CacheError>;
}
