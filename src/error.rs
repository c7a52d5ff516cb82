//! Library error type for database initialization.
//!
//! `factor`/`isprime` never fail after a successful [`crate::Database::init`];
//! the only two failure kinds in this crate live here, matching spec.md §7's
//! "exactly two error kinds."

/// Failure to initialize the factoring database.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The database file could not be opened for reading.
    #[error("failed to open database file: {0}")]
    Open(#[source] std::io::Error),

    /// The file was opened but could not be mapped, including the case
    /// where its length does not match the five arrays' published sizes —
    /// a mismatched file can never be mapped into the right shape, so it is
    /// surfaced as a mapping failure rather than a third variant.
    #[error("failed to map database file: {0}")]
    Mmap(#[source] std::io::Error),
}
