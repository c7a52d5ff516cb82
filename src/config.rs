//! Resolves the database path and logging format from CLI flags and
//! environment variables, CLI flags taking precedence — the same layering
//! the original used for `DATABASE_URL`.

use std::path::PathBuf;

/// Default location searched for the database file when neither a flag nor
/// `FACTOR63_DB` is set.
pub const DEFAULT_DB_PATH: &str = "factor.bin";

/// Resolve the database path: explicit CLI flag wins, then `FACTOR63_DB`,
/// then [`DEFAULT_DB_PATH`].
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("FACTOR63_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

/// Whether structured logging should be emitted as JSON (for log
/// aggregators) or human-readable text (for a terminal), per `LOG_FORMAT`.
pub fn log_format_is_json() -> bool {
    std::env::var("LOG_FORMAT").as_deref() == Ok("json")
}
