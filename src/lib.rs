//! # factor63 — deterministic factorization of signed 63-bit integers
//!
//! A single call resolves any `|n| < 2^63` into its complete `(prime,
//! exponent)` factorization with full primality certainty — no
//! probabilistic result ever leaks to the caller.
//!
//! ## Pipeline
//!
//! [`factor`] cascades through, in order: sign and power-of-two stripping,
//! a wheel GCD against the product of the first 15 odd primes ([`gcd`]),
//! a `factor_table` shortcut for cofactors below `M` ([`small_factors`]),
//! a Montgomery-arithmetic strong-Fermat primality shortcut with a
//! pseudoprime exception table ([`montgomery`], [`psp`]), and finally a
//! Brent-variant Pollard rho with collision-table backtracking
//! ([`rho`], [`collision`]) for anything that survives all of the above.
//!
//! ## Database
//!
//! All of this depends on `factor.bin`, a ~6 GB precomputed file mapped
//! once via [`Database::init`] ([`database`]) and never unmapped — see
//! that module for the exact layout.
//!
//! ## Example
//!
//! ```no_run
//! let db = factor63::Database::init("factor.bin").expect("database");
//! assert!(factor63::isprime(&db, 3037000493));
//! assert_eq!(factor63::factor_to_vec(&db, 360), vec![(2, 3), (3, 2), (5, 1)]);
//! ```

pub mod collision;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod gcd;
pub mod montgomery;
pub mod psp;
pub mod rho;
pub mod small_factors;

pub use database::Database;
pub use engine::{factor, factor_to_vec, isprime, MAX_FACTORS};
pub use error::InitError;
