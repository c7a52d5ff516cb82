//! # Main — CLI entry point
//!
//! Resolves the database path and logging format, initializes the
//! memory-mapped factoring database once, and dispatches to the thin
//! factor-printing driver in `cli`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use factor63::config;
use factor63::Database;

#[derive(Parser)]
#[command(name = "factor63", about = "Deterministic factorization of signed 63-bit integers")]
struct Cli {
    /// Path to the precomputed factor.bin database (or set FACTOR63_DB)
    #[arg(long, env = "FACTOR63_DB")]
    database: Option<std::path::PathBuf>,

    /// Numbers to factor. If omitted, reads one decimal integer per line
    /// from stdin.
    numbers: Vec<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    if config::log_format_is_json() {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let db_path = config::resolve_db_path(cli.database);

    let start = std::time::Instant::now();
    let db = Database::init(&db_path)
        .with_context(|| format!("failed to load database at {}", db_path.display()))?;
    debug!(path = %db_path.display(), elapsed_ms = start.elapsed().as_millis(), "database loaded");

    cli::run(&db, &cli.numbers)
}
