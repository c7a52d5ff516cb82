//! # Top-level orchestration
//!
//! `isprime` and `factor`: sign/parity stripping, wheel GCD against the
//! product of the first 15 odd primes, the small-range `factor_table`
//! shortcut, the Fermat+exception primality shortcut, and the Pollard-rho
//! fallback — cascaded in the order that makes the common case (small
//! factors, or outright primality) cheap.

use crate::database::Database;
use crate::gcd::{oddgcd, SMALL_PRIMES, WHEEL};
use crate::montgomery::MontgomeryCtx;
use crate::psp::fastisprime63;
use crate::rho::pollard_rho;
use crate::small_factors::{smallest_prime_factor, smallfactors63, M};

/// Minimum buffer length required by [`factor`]. 15 distinct positive
/// primes exhaust `M`'s bound on the product of small primes well before
/// `2^63` (3·5·…·53 ≈ 1.6·10^19 > 2^63), plus one optional `-1` entry.
pub const MAX_FACTORS: usize = 16;

/// True iff `n` is prime.
///
/// Total over all `i64`: `n <= 1` and `n == 0` both simply return `false`,
/// matching the convention that primality has an unambiguous answer at
/// every integer (unlike `factor`, whose domain excludes 0 by contract).
pub fn isprime(db: &Database, n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    if n & 1 == 0 {
        return n == 2;
    }
    if n < M {
        return smallest_prime_factor(db, n).is_none();
    }
    for &sp in &SMALL_PRIMES {
        if n % sp == 0 {
            return n == sp;
        }
    }
    fastisprime63(db, n as i64)
}

/// Factor `n` into `(prime, exponent)` pairs, written into `p`/`e` starting
/// at index 0. Returns the count of entries written.
///
/// `p` and `e` must have length `>= `[`MAX_FACTORS`]. `n == 0` is accepted
/// per this crate's resolution of the original's undefined behavior there
/// and yields a single `(0, 1)` entry; every other `|n| < 2^63` is fully
/// supported.
pub fn factor(db: &Database, n0: i64, p: &mut [i64], e: &mut [u32]) -> usize {
    debug_assert!(p.len() >= MAX_FACTORS && e.len() >= MAX_FACTORS);

    if n0 == 0 {
        p[0] = 0;
        e[0] = 1;
        return 1;
    }

    let mut k = 0usize;
    let mut n: u64;
    if n0 < 0 {
        p[k] = -1;
        e[k] = 1;
        k += 1;
        n = n0.unsigned_abs();
    } else {
        n = n0 as u64;
    }

    if n & 1 == 0 {
        let tz = n.trailing_zeros();
        p[k] = 2;
        e[k] = tz;
        n >>= tz;
        k += 1;
    }

    let mut f = oddgcd(n, WHEEL);
    for &sp in &SMALL_PRIMES {
        if f <= 1 {
            break;
        }
        if f % sp == 0 {
            f /= sp;
            p[k] = sp as i64;
            e[k] = 0;
            loop {
                n /= sp;
                e[k] += 1;
                if n % sp != 0 {
                    break;
                }
            }
            k += 1;
        }
    }

    if n < M {
        k += smallfactors63(db, &mut p[k..], &mut e[k..], n, &mut n);
        return k;
    }
    if fastisprime63(db, n as i64) {
        p[k] = n as i64;
        e[k] = 1;
        k += 1;
        return k;
    }

    let ctx = MontgomeryCtx::new(n);
    pollard_rho(db, &ctx, p, e, k)
}

/// Ergonomic wrapper over [`factor`] for in-process Rust callers who don't
/// need the fixed-buffer ABI.
pub fn factor_to_vec(db: &Database, n: i64) -> Vec<(i64, u32)> {
    let mut p = [0i64; MAX_FACTORS];
    let mut e = [0u32; MAX_FACTORS];
    let k = factor(db, n, &mut p, &mut e);
    p[..k].iter().copied().zip(e[..k].iter().copied()).collect()
}
