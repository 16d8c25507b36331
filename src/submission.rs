//! Score submission coordination: the two-phase write protocol.

use std::sync::Arc;

use derive_more::{Display, Error, From};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::cache::{CacheError, RankedCache};
use crate::outcome::{classify, HighScoreState, LeaderboardOutcome, RankedOutcome};
use crate::store::{ConditionalWrite, ScoreStore, StoreError};

/// Board identifier for the single deployed leaderboard.
pub const GLOBAL_BOARD_ID: &str = "GlobalLeaderboard";

/// Default number of ranked entries retained per board.
pub const DEFAULT_CAPACITY: usize = 10;

const RETRY_MESSAGE: &str = "Failed to update leaderboard. Please try again.";

/// Terminal submission failure, before any mutation took effect.
#[derive(Debug, Display, Error, From)]
pub enum SubmissionError {
    /// Client input was missing or malformed; neither store was touched.
    #[display("{_0}")]
    Validation(#[error(not(source))] String),
    /// The durable store faulted; the cache was never touched.
    #[display("{_0}")]
    Store(StoreError),
}

/// Complete result of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    high_score: HighScoreState,
    leaderboard: LeaderboardOutcome,
}

impl SubmissionOutcome {
    /// Durable-write side of the result.
    pub fn high_score(&self) -> HighScoreState {
        self.high_score
    }

    /// Ranked-board side of the result.
    pub fn leaderboard(&self) -> &LeaderboardOutcome {
        &self.leaderboard
    }

    /// Consumes the outcome, returning both sides.
    pub fn into_parts(self) -> (HighScoreState, LeaderboardOutcome) {
        (self.high_score, self.leaderboard)
    }
}

/// Orchestrates a single score submission against the durable store and the
/// ranked cache.
///
/// The submission runs as validate, conditional durable write, cache update,
/// classify. The durable write is authoritative and gated on strictly
/// beating the stored personal best; the cache upsert is unconditional and
/// applies the raw submitted score even when the durable write was rejected,
/// so a cached rank can sit below a player's historical best. A cache fault
/// after a successful durable write degrades the outcome rather than rolling
/// anything back.
pub struct SubmissionCoordinator {
    store: Arc<dyn ScoreStore>,
    cache: Arc<dyn RankedCache>,
    board_id: String,
    capacity: usize,
}

impl SubmissionCoordinator {
    /// Creates a coordinator for the global board with the default capacity.
    pub fn new(store: Arc<dyn ScoreStore>, cache: Arc<dyn RankedCache>) -> Self {
        Self::with_board(store, cache, GLOBAL_BOARD_ID, DEFAULT_CAPACITY)
    }

    /// Creates a coordinator for a specific board and capacity.
    #[instrument(skip(store, cache))]
    pub fn with_board(
        store: Arc<dyn ScoreStore>,
        cache: Arc<dyn RankedCache>,
        board_id: impl Into<String> + std::fmt::Debug,
        capacity: usize,
    ) -> Self {
        info!("Creating SubmissionCoordinator");
        Self {
            store,
            cache,
            board_id: board_id.into(),
            capacity,
        }
    }

    /// The capacity boundary of the coordinated board.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Processes one score submission end to end.
    ///
    /// Both fields arrive as raw request values so the validation phase owns
    /// presence and numeric checks. `Accepted` and `Rejected` durable writes
    /// both proceed to the cache phase; only a store fault aborts.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Validation`] on missing or non-numeric
    /// input and [`SubmissionError::Store`] when the durable store faults.
    /// Cache faults are not errors: they yield a degraded
    /// [`LeaderboardOutcome`] in an `Ok` result.
    #[instrument(skip(self, username, score))]
    pub fn submit(
        &self,
        username: Option<&str>,
        score: Option<&Value>,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let (username, score) = validate(username, score)?;
        debug!(username = %username, score, "Submission validated");

        let high_score = match self
            .store
            .conditional_update_high_score(&self.board_id, &username, score)
        {
            Ok(ConditionalWrite::Accepted) => HighScoreState::NewHighscore,
            Ok(ConditionalWrite::Rejected) => HighScoreState::NotHighscore,
            Err(e) => {
                error!(error = %e, username = %username, "Durable write failed, aborting submission");
                return Err(SubmissionError::Store(e));
            }
        };

        let leaderboard = match self.rank_submission(&username, score) {
            Ok(outcome) => LeaderboardOutcome::Ranked(outcome),
            Err(e) => {
                warn!(error = %e, username = %username, "Cache phase failed, degrading outcome");
                LeaderboardOutcome::Degraded {
                    message: RETRY_MESSAGE.to_string(),
                    detail: e.to_string(),
                }
            }
        };

        info!(
            username = %username,
            score,
            high_score = %high_score,
            "Submission completed"
        );
        Ok(SubmissionOutcome {
            high_score,
            leaderboard,
        })
    }

    /// Cache phase: upsert, trim to capacity, re-rank, classify.
    fn rank_submission(&self, username: &str, score: i64) -> Result<RankedOutcome, CacheError> {
        self.cache.upsert(&self.board_id, username, score)?;
        self.cache.trim(&self.board_id, self.capacity)?;
        let rank = self.cache.rank_of(&self.board_id, username)?;
        classify(self.cache.as_ref(), &self.board_id, self.capacity, rank)
    }
}

/// Validation phase: both fields present, score integer-coercible.
fn validate(
    username: Option<&str>,
    score: Option<&Value>,
) -> Result<(String, i64), SubmissionError> {
    let (username, raw) = match (username, score) {
        (Some(u), Some(s)) => (u.to_string(), s),
        _ => {
            return Err(SubmissionError::Validation(
                "Username and score are required.".to_string(),
            ));
        }
    };

    let score = parse_score(raw).ok_or_else(|| {
        SubmissionError::Validation("Score must be a valid number.".to_string())
    })?;

    Ok((username, score))
}

/// Coerces a JSON value to an integer score: integer numbers pass through,
/// floats and numeric strings truncate toward zero.
fn parse_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }
}
