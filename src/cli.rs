//! Command-line interface for rankboard.

use clap::Parser;

/// Rankboard - capacity-bounded global leaderboard service
#[derive(Parser, Debug)]
#[command(name = "rankboard")]
#[command(about = "Leaderboard service with durable personal bests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Path to the database file (created if it doesn't exist)
    #[arg(long, default_value = "rankboard.db")]
    pub db_path: String,

    /// Number of ranked entries retained on the board
    #[arg(long, default_value = "10")]
    pub capacity: usize,
}
