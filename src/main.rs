//! Rankboard server binary.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rankboard::{AppState, MemoryRankedCache, SqliteScoreStore, GLOBAL_BOARD_ID};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!(db_path = %cli.db_path, capacity = cli.capacity, "Starting rankboard");

    let store = SqliteScoreStore::new(cli.db_path.clone())?;
    store.run_migrations()?;

    let cache = MemoryRankedCache::new();
    let state = AppState::new(
        Arc::new(store),
        Arc::new(cache),
        GLOBAL_BOARD_ID,
        cli.capacity,
    );
    let app = rankboard::router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
