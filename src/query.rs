//! Read-only ranked leaderboard views.

use std::sync::Arc;

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::cache::{CacheError, RankedCache};

/// One formatted leaderboard row with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RankedEntry {
    username: String,
    score: i64,
    rank: u32,
}

/// Read-only formatter producing a ranked top-N view from the cache.
///
/// No side effects; an empty board formats to an empty list.
pub struct LeaderboardQueryService {
    cache: Arc<dyn RankedCache>,
    board_id: String,
}

impl LeaderboardQueryService {
    /// Creates a query service over the given board.
    #[instrument(skip(cache))]
    pub fn new(cache: Arc<dyn RankedCache>, board_id: impl Into<String> + std::fmt::Debug) -> Self {
        info!("Creating LeaderboardQueryService");
        Self {
            cache,
            board_id: board_id.into(),
        }
    }

    /// Returns up to `n` entries in descending score order, ranks assigned
    /// contiguously from 1 by position.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the cache read fails.
    #[instrument(skip(self))]
    pub fn get_top(&self, n: usize) -> Result<Vec<RankedEntry>, CacheError> {
        let entries = self.cache.top_n(&self.board_id, n)?;
        debug!(count = entries.len(), "Leaderboard read");

        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let (username, score) = entry.into_parts();
                RankedEntry {
                    username,
                    score,
                    rank: i as u32 + 1,
                }
            })
            .collect())
    }
}
