//! # Pollard rho (Brent variant) with collision-table backtracking
//!
//! Brent's cycle-detection variant of Pollard rho, batching GCD probes over
//! doubling epochs (`i = 1, 2, 4, ...`) with a stride-bounded accumulated
//! product of differences. When a stride's batched GCD finds a nontrivial
//! factor, the driver backtracks one step at a time to find the exact
//! iteration where the cycle collided, then uses that iteration count to
//! index into a precomputed table of candidate small primes — avoiding a
//! second, unbounded GCD-based search for the factor that caused it.

use crate::collision::{collision_start, next_divisor};
use crate::database::Database;
use crate::gcd::oddgcd;
use crate::montgomery::MontgomeryCtx;
use crate::psp::fastisprime63;
use crate::small_factors::{smallfactors63, M};

/// Iteration budget. Must be a multiple of [`MAXSTRIDE`], exceed 13193 (so
/// every prime below `2^21` is guaranteed to be hit during rho), and satisfy
/// `collision_index[ITERATIONS - 1] != 0`.
const ITERATIONS: u64 = 300288;
/// Stride bound for batching GCD probes. Must be a power of two.
const MAXSTRIDE: u64 = 256;

#[inline]
fn abs_diff(y: u64, x: u64) -> u64 {
    (y as i64).wrapping_sub(x as i64).unsigned_abs()
}

/// Integer square root with an exactness check, tolerant of floating-point
/// rounding in either direction.
fn exact_isqrt(f: u64) -> Option<u64> {
    if f == 0 {
        return Some(0);
    }
    let mut s = (f as f64).sqrt() as u64;
    while s > 0 && s * s > f {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= f {
        s += 1;
    }
    if s * s == f {
        Some(s)
    } else {
        None
    }
}

/// Run Pollard rho against `ctx.n`, appending discovered `(prime, exponent)`
/// pairs to `p`/`e` starting at index `k`. Returns the new `k`.
///
/// Precondition: `ctx.n >= M`, `ctx.n` is odd, and composite (not caught by
/// `fastisprime63`). `ctx.n` may still have prime factors below `M` — since
/// `M * M > 2^63`, at most one of its factors can be `>= M`, so any batched
/// GCD result below `M` is handed to `smallfactors63` rather than assumed
/// prime, and the final residual `m` is re-checked against `M` before
/// being treated as done.
pub fn pollard_rho(db: &Database, ctx: &MontgomeryCtx, p: &mut [i64], e: &mut [u32], mut k: usize) -> usize {
    let one = ctx.one;
    let mut m = ctx.n;
    let mut y = one;
    let mut f = one;

    let mut i: u64 = 1;
    while i < ITERATIONS {
        let mask = if i < MAXSTRIDE { i - 1 } else { MAXSTRIDE - 1 };
        let x = y;
        let mut y0 = y;
        let mut j: u64 = 0;

        while j < i && i + j < ITERATIONS {
            y = ctx.mulredc(y, y.wrapping_add(one));
            f = ctx.mulredc(f, abs_diff(y, x));
            j += 1;

            if j & mask != 0 {
                continue;
            }

            f = oddgcd(m, f);
            if f == 1 {
                y0 = y;
                continue;
            }

            if f >= M {
                // Backtrack one step at a time from the last checkpoint to
                // find the exact iteration where the cycle collided.
                y = y0;
                j -= mask + 1;
                loop {
                    y = ctx.mulredc(y, y.wrapping_add(one));
                    f = oddgcd(m, abs_diff(y, x));
                    j += 1;
                    if f != 1 {
                        break;
                    }
                }

                let mut idx = collision_start(db, (i + j - 2) as usize);
                while f >= M {
                    if fastisprime63(db, f as i64) {
                        p[k] = f as i64;
                        e[k] = 1;
                        m /= f;
                        k += 1;
                        f = 1;
                    } else if let Some(s) = exact_isqrt(f) {
                        f = s;
                    } else {
                        let (prime, next_idx) = next_divisor(db, idx, f);
                        idx = next_idx;
                        p[k] = prime as i64;
                        e[k] = 0;
                        loop {
                            f /= prime;
                            m /= prime;
                            e[k] += 1;
                            if f % prime != 0 {
                                break;
                            }
                        }
                        while m % prime == 0 {
                            m /= prime;
                            e[k] += 1;
                        }
                        k += 1;
                    }
                }
            }

            k += smallfactors63(db, &mut p[k..], &mut e[k..], f, &mut m);
            if m < M {
                k += smallfactors63(db, &mut p[k..], &mut e[k..], m, &mut m);
                return k;
            }
            if fastisprime63(db, m as i64) {
                p[k] = m as i64;
                e[k] = 1;
                k += 1;
                return k;
            }

            y0 = y;
            f = one;
        }

        i <<= 1;
    }

    // Every prime below 2^21 was hit during the epochs above (ITERATIONS >
    // 13193), so the residual m here is either a prime square or a
    // semiprime; its smaller prime factor lives in the final collision
    // bucket.
    let (prime, _) = next_divisor(db, collision_start(db, (ITERATIONS - 1) as usize), m);
    p[k] = prime as i64;
    m /= prime;
    if m == prime {
        e[k] = 2;
        k += 1;
    } else {
        e[k] = 1;
        k += 1;
        p[k] = m as i64;
        e[k] = 1;
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterations_divisible_by_maxstride() {
        assert_eq!(ITERATIONS % MAXSTRIDE, 0);
    }

    #[test]
    fn iterations_exceeds_small_prime_guarantee() {
        assert!(ITERATIONS > 13193);
    }

    #[test]
    fn exact_isqrt_finds_perfect_squares() {
        assert_eq!(exact_isqrt(0), Some(0));
        assert_eq!(exact_isqrt(1), Some(1));
        assert_eq!(exact_isqrt(9), Some(3));
        assert_eq!(exact_isqrt(10_000_000_000), Some(100_000));
        assert_eq!(exact_isqrt(10), None);
        assert_eq!(exact_isqrt(99), None);
    }

    #[test]
    fn exact_isqrt_handles_large_values_near_precision_limit() {
        let p: u64 = 3_037_000_493; // close to M, prime
        assert_eq!(exact_isqrt(p * p), Some(p));
    }
}
