//! Rankboard - capacity-bounded global leaderboard service
//!
//! This library maintains a global ranking of player scores backed by a
//! durable personal-best record and a fast ranked cache.
//!
//! # Architecture
//!
//! - **Store**: durable personal bests with a conditional, monotonic write
//!   ([`ScoreStore`], backed by SQLite)
//! - **Cache**: fixed-capacity ranked board with sorted-set semantics
//!   ([`RankedCache`])
//! - **Submission**: the two-phase write protocol reconciling one score
//!   against both ([`SubmissionCoordinator`])
//! - **Query**: read-only ranked top-N views ([`LeaderboardQueryService`])
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rankboard::{MemoryRankedCache, SqliteScoreStore, SubmissionCoordinator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = Arc::new(SqliteScoreStore::new("rankboard.db".to_string())?);
//! let cache = Arc::new(MemoryRankedCache::new());
//! let coordinator = SubmissionCoordinator::new(store, cache);
//!
//! let outcome = coordinator.submit(Some("alice"), Some(&serde_json::json!(100)))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cache;
mod http;
mod outcome;
mod query;
mod store;
mod submission;

// Crate-level exports - ranked cache
pub use cache::{CacheError, MemoryRankedCache, RankedCache, ScoreEntry};

// Crate-level exports - HTTP surface
pub use http::{router, AppState, SubmitScoreRequest};

// Crate-level exports - outcome classification
pub use outcome::{classify, HighScoreState, LeaderboardOutcome, RankedOutcome};

// Crate-level exports - leaderboard queries
pub use query::{LeaderboardQueryService, RankedEntry};

// Crate-level exports - durable store
pub use store::{
    ConditionalWrite, NewPlayerScore, PlayerScore, ScoreStore, SqliteScoreStore, StoreError,
};

// Crate-level exports - submission protocol
pub use submission::{
    SubmissionCoordinator, SubmissionError, SubmissionOutcome, DEFAULT_CAPACITY, GLOBAL_BOARD_ID,
};
