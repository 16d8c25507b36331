//! Classification of a submission's standing on the ranked board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, instrument};

use crate::cache::{CacheError, RankedCache};

/// Durable-write outcome of a submission, as reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HighScoreState {
    /// The submission raised (or created) the durable personal best.
    NewHighscore,
    /// The submission did not beat the stored personal best.
    NotHighscore,
}

/// Ranked-board standing computed for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RankedOutcome {
    made_top_n: bool,
    rank: Option<u32>,
    boundary_score: Option<i64>,
    message: String,
}

impl RankedOutcome {
    /// Consumes the outcome, returning `(made_top_n, rank, boundary_score, message)`.
    pub fn into_parts(self) -> (bool, Option<u32>, Option<i64>, String) {
        (self.made_top_n, self.rank, self.boundary_score, self.message)
    }
}

/// Leaderboard side of a submission result.
///
/// Distinguishes a fully computed standing from a degraded one where the
/// durable write applied but the cache phase failed. There is no rollback
/// between the two stores: the durable record is authoritative and the
/// ranked cache is a disposable view, so a cache fault downgrades the
/// response instead of discarding the already-durable score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardOutcome {
    /// The cache phase completed and produced a standing.
    Ranked(RankedOutcome),
    /// The cache phase failed after the durable write; `detail` carries the
    /// underlying fault for diagnostics.
    Degraded {
        /// Player-facing retry invitation.
        message: String,
        /// Diagnostic detail from the failed cache operation.
        detail: String,
    },
}

/// Classifies a post-update rank against the capacity boundary.
///
/// A rank inside the capacity reports the 1-based position plus the entry at
/// the capacity cutoff index, when the board holds one. A missing or
/// out-of-capacity rank reports the score to beat: the boundary member's
/// score when the board is full, or zero with an invitation message while
/// the board is still filling up.
///
/// Read-only: the only cache access is the boundary lookup.
///
/// # Errors
///
/// Returns [`CacheError`] if the boundary lookup fails.
#[instrument(skip(cache))]
pub fn classify(
    cache: &dyn RankedCache,
    board_id: &str,
    capacity: usize,
    rank: Option<usize>,
) -> Result<RankedOutcome, CacheError> {
    if let Some(rank) = rank.filter(|r| *r < capacity) {
        let boundary = cache
            .range_by_rank(board_id, capacity as i64 - 1, capacity as i64 - 1)?
            .into_iter()
            .next()
            .map(|entry| *entry.score());

        let rank = rank as u32 + 1;
        debug!(rank, ?boundary, "Submission ranked inside capacity");
        return Ok(RankedOutcome {
            made_top_n: true,
            rank: Some(rank),
            boundary_score: boundary,
            message: format!("Congratulations! You are #{} on the leaderboard!", rank),
        });
    }

    let boundary = cache
        .range_by_rank(board_id, -(capacity as i64), -(capacity as i64))?
        .into_iter()
        .next();

    let outcome = match boundary {
        Some(entry) => {
            let score = *entry.score();
            debug!(boundary = score, "Submission outside capacity, board full");
            RankedOutcome {
                made_top_n: false,
                rank: None,
                boundary_score: Some(score),
                message: format!(
                    "Great effort! The {}th place score is {}. Keep going!",
                    capacity, score
                ),
            }
        }
        None => {
            debug!("Submission outside capacity, board still filling");
            RankedOutcome {
                made_top_n: false,
                rank: None,
                boundary_score: Some(0),
                message: "The leaderboard is still filling up! Be the first to reach the top!"
                    .to_string(),
            }
        }
    };
    Ok(outcome)
}
