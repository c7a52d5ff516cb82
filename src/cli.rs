//! Thin factor-printing driver. Reads decimal integers from argv (if any
//! were given) or one per line from stdin, factors each, sorts the result
//! ascending by prime (the `-1` entry, if present, sorts first on its own),
//! and prints `n: p p p ...` in GNU-factor style — exponent `e` printed as
//! `e` repetitions of the prime. Sorting and formatting are this driver's
//! concern, not the core's.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::database::Database;
use crate::engine::factor_to_vec;

/// Print the factorization of every candidate in `numbers`, or of every
/// line read from stdin if `numbers` is empty.
pub fn run(db: &Database, numbers: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if numbers.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("reading stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            print_factorization(db, &mut out, line)?;
        }
    } else {
        for n in numbers {
            print_factorization(db, &mut out, n)?;
        }
    }
    Ok(())
}

fn print_factorization(db: &Database, out: &mut impl Write, text: &str) -> Result<()> {
    let n: i64 = text
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid signed 64-bit integer", text))?;

    let mut factors = factor_to_vec(db, n);
    factors.sort_by_key(|&(p, _)| if p < 0 { (0, p) } else { (1, p) });

    write!(out, "{}:", n)?;
    for (p, e) in factors {
        for _ in 0..e {
            write!(out, " {}", p)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
