//! Collision-table lookup: turns a detected rho cycle length into the
//! starting offset of a bounded list of candidate small primes.

use crate::database::Database;

/// Starting offset into `collision_table` for cycle-length bucket `c`.
///
/// Each bucket's list is implicitly terminated by the next bucket's start;
/// callers scan forward from this offset testing divisibility, as
/// [`crate::rho`] does.
#[inline]
pub fn collision_start(db: &Database, c: usize) -> usize {
    db.collision_index[c] as usize
}

/// Candidate primes at and after `start`, as a plain slice view for
/// sequential scanning.
#[inline]
pub fn candidates(db: &Database, start: usize) -> &[u32] {
    &db.collision_table[start..]
}

/// Scan [`candidates`] from `start` for the first prime dividing `target`,
/// returning that prime and the index to resume scanning from for any
/// further divisors of the same or a later target.
#[inline]
pub fn next_divisor(db: &Database, start: usize, target: u64) -> (u64, usize) {
    let cands = candidates(db, start);
    let mut i = 0;
    while target % (cands[i] as u64) != 0 {
        i += 1;
    }
    (cands[i] as u64, start + i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_start_reads_index() {
        let db = Database::from_arrays(vec![], vec![0; 65], vec![7, 11, 13, 17], vec![0, 2], vec![]);
        assert_eq!(collision_start(&db, 0), 0);
        assert_eq!(collision_start(&db, 1), 2);
        assert_eq!(candidates(&db, collision_start(&db, 1)), &[13, 17]);
    }

    #[test]
    fn next_divisor_scans_forward_past_non_divisors() {
        let db = Database::from_arrays(vec![], vec![0; 65], vec![7, 11, 13, 17], vec![0], vec![]);
        let (prime, next) = next_divisor(&db, 0, 13);
        assert_eq!(prime, 13);
        assert_eq!(next, 2);
        let (prime, next) = next_divisor(&db, next, 17);
        assert_eq!(prime, 17);
        assert_eq!(next, 4);
    }
}
