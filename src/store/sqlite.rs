//! SQLite-backed durable score store.

use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info, instrument};

use crate::store::{
    schema, ConditionalWrite, NewPlayerScore, PlayerScore, ScoreStore, StoreError,
};

/// Embedded schema migrations for the player score table.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Durable score store backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteScoreStore {
    db_path: String,
}

impl SqliteScoreStore {
    /// Creates a new store connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, StoreError> {
        info!(path = %db_path, "Creating SqliteScoreStore");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a migration fails to apply.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration error: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }
}

impl ScoreStore for SqliteScoreStore {
    #[instrument(skip(self))]
    fn conditional_update_high_score(
        &self,
        board_id: &str,
        username: &str,
        score: i64,
    ) -> Result<ConditionalWrite, StoreError> {
        debug!(board_id = %board_id, username = %username, score, "Conditional high-score write");
        let mut conn = self.connection()?;

        // The read and the write must decide together; an immediate
        // transaction takes the SQLite write lock up front so a racing
        // submission for the same key cannot interleave between them.
        conn.immediate_transaction(|conn| {
            use schema::player_scores::dsl;

            let stored = dsl::player_scores
                .filter(dsl::board_id.eq(board_id))
                .filter(dsl::username.eq(username))
                .select(dsl::high_score)
                .first::<i64>(conn)
                .optional()?;

            match stored {
                Some(best) if best >= score => {
                    debug!(stored = best, submitted = score, "Write rejected, not a new high score");
                    Ok(ConditionalWrite::Rejected)
                }
                Some(best) => {
                    diesel::update(
                        dsl::player_scores
                            .filter(dsl::board_id.eq(board_id))
                            .filter(dsl::username.eq(username)),
                    )
                    .set((
                        dsl::high_score.eq(score),
                        dsl::last_updated.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)?;

                    info!(previous = best, new = score, "Personal best raised");
                    Ok(ConditionalWrite::Accepted)
                }
                None => {
                    let record = NewPlayerScore::new(
                        board_id.to_string(),
                        username.to_string(),
                        score,
                        Utc::now().naive_utc(),
                    );
                    diesel::insert_into(dsl::player_scores)
                        .values(&record)
                        .execute(conn)?;

                    info!(new = score, "First personal best recorded");
                    Ok(ConditionalWrite::Accepted)
                }
            }
        })
    }

    #[instrument(skip(self))]
    fn personal_best(
        &self,
        board_id: &str,
        username: &str,
    ) -> Result<Option<PlayerScore>, StoreError> {
        debug!(board_id = %board_id, username = %username, "Looking up personal best");
        let mut conn = self.connection()?;

        use schema::player_scores::dsl;
        let record = dsl::player_scores
            .filter(dsl::board_id.eq(board_id))
            .filter(dsl::username.eq(username))
            .first::<PlayerScore>(&mut conn)
            .optional()?;

        Ok(record)
    }
}
