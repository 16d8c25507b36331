//! Durable store models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::store::schema;

/// Personal-best record for one player on one board.
///
/// `high_score` is non-decreasing over the record's lifetime; rows are
/// created on the first accepted submission and never deleted.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::player_scores)]
pub struct PlayerScore {
    board_id: String,
    username: String,
    high_score: i64,
    last_updated: NaiveDateTime,
}

/// Insertable record for a player's first accepted submission.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::player_scores)]
pub struct NewPlayerScore {
    board_id: String,
    username: String,
    high_score: i64,
    last_updated: NaiveDateTime,
}
