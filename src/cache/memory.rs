//! In-process ranked cache with sorted-set semantics.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, instrument};

use crate::cache::{CacheError, RankedCache, ScoreEntry};

/// In-memory ranked cache: one member-to-score map per board, held behind a
/// mutex so each operation is atomic with respect to the others.
///
/// Ordering follows sorted-set conventions: ascending by score, with equal
/// scores broken by username ascending. Descending views reverse that order.
#[derive(Debug, Default)]
pub struct MemoryRankedCache {
    boards: Mutex<HashMap<String, HashMap<String, i64>>>,
}

impl MemoryRankedCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, HashMap<String, i64>>>, CacheError> {
        self.boards
            .lock()
            .map_err(|_| CacheError::new("ranked cache mutex poisoned"))
    }

    /// Members of a board sorted ascending by (score, username).
    fn ascending(
        boards: &HashMap<String, HashMap<String, i64>>,
        board_id: &str,
    ) -> Vec<(String, i64)> {
        let mut members: Vec<(String, i64)> = boards
            .get(board_id)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .unwrap_or_default();
        members.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        members
    }
}

impl RankedCache for MemoryRankedCache {
    #[instrument(skip(self))]
    fn upsert(&self, board_id: &str, username: &str, score: i64) -> Result<(), CacheError> {
        let mut boards = self.lock()?;
        boards
            .entry(board_id.to_string())
            .or_default()
            .insert(username.to_string(), score);
        debug!(board_id = %board_id, username = %username, score, "Member upserted");
        Ok(())
    }

    #[instrument(skip(self))]
    fn trim(&self, board_id: &str, capacity: usize) -> Result<(), CacheError> {
        let mut boards = self.lock()?;
        let evicted: Vec<String> = {
            let members = Self::ascending(&boards, board_id);
            if members.len() <= capacity {
                return Ok(());
            }
            let excess = members.len() - capacity;
            members
                .into_iter()
                .take(excess)
                .map(|(name, _)| name)
                .collect()
        };
        if let Some(board) = boards.get_mut(board_id) {
            for name in &evicted {
                board.remove(name);
            }
        }
        debug!(board_id = %board_id, evicted = evicted.len(), "Board trimmed to capacity");
        Ok(())
    }

    #[instrument(skip(self))]
    fn rank_of(&self, board_id: &str, username: &str) -> Result<Option<usize>, CacheError> {
        let boards = self.lock()?;
        let members = Self::ascending(&boards, board_id);
        let rank = members
            .iter()
            .rev()
            .position(|(name, _)| name == username);
        Ok(rank)
    }

    #[instrument(skip(self))]
    fn range_by_rank(
        &self,
        board_id: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<ScoreEntry>, CacheError> {
        let boards = self.lock()?;
        let members = Self::ascending(&boards, board_id);
        let len = members.len() as i64;

        let mut start = if start < 0 { len + start } else { start };
        let stop = if stop < 0 { len + stop } else { stop };
        if start < 0 {
            start = 0;
        }
        let stop = stop.min(len - 1);
        if len == 0 || start > stop || start >= len {
            return Ok(Vec::new());
        }

        Ok(members[start as usize..=stop as usize]
            .iter()
            .map(|(name, score)| ScoreEntry::new(name.clone(), *score))
            .collect())
    }

    #[instrument(skip(self))]
    fn top_n(&self, board_id: &str, n: usize) -> Result<Vec<ScoreEntry>, CacheError> {
        let boards = self.lock()?;
        let members = Self::ascending(&boards, board_id);
        Ok(members
            .into_iter()
            .rev()
            .take(n)
            .map(|(name, score)| ScoreEntry::new(name, score))
            .collect())
    }
}
