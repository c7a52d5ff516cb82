//! # Database — the memory-mapped precomputed tables
//!
//! `factor.bin` is five contiguous arrays concatenated with no padding:
//! `psptable63` (i64), `psptable63_index` (i32), `collision_table` (u32),
//! `collision_index` (i32), `factor_table` (u16), in that order. The whole
//! file is mapped once, read-only, and reinterpreted as five typed slices
//! over the single mapping — no copying, no per-array allocation.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::{Advice, Mmap};

use crate::error::InitError;

pub const PSPTABLE63_LEN: usize = 23_355_139;
pub const PSPTABLE63_INDEX_LEN: usize = 64;
pub const COLLISION_TABLE_LEN: usize = 146_144_317;
pub const COLLISION_INDEX_LEN: usize = 808_315;
pub const FACTOR_TABLE_LEN: usize = 1_518_500_250;

const PSP_BYTES: usize = PSPTABLE63_LEN * 8;
const PSP_IDX_BYTES: usize = PSPTABLE63_INDEX_LEN * 4;
const COLLISION_BYTES: usize = COLLISION_TABLE_LEN * 4;
const COLLISION_IDX_BYTES: usize = COLLISION_INDEX_LEN * 4;
const FACTOR_BYTES: usize = FACTOR_TABLE_LEN * 2;

const TOTAL_LEN: u64 =
    (PSP_BYTES + PSP_IDX_BYTES + COLLISION_BYTES + COLLISION_IDX_BYTES + FACTOR_BYTES) as u64;

// Every split point below must land on a byte offset that is a multiple of
// the element width of the array starting there, so `bytemuck::cast_slice`
// never has to reject a misaligned slice at runtime.
const _: () = assert!(PSP_BYTES % 4 == 0, "psptable63_index offset must be 4-aligned");
const _: () = assert!((PSP_BYTES + PSP_IDX_BYTES) % 4 == 0, "collision_table offset must be 4-aligned");
const _: () = assert!(
    (PSP_BYTES + PSP_IDX_BYTES + COLLISION_BYTES) % 4 == 0,
    "collision_index offset must be 4-aligned"
);
const _: () = assert!(
    (PSP_BYTES + PSP_IDX_BYTES + COLLISION_BYTES + COLLISION_IDX_BYTES) % 2 == 0,
    "factor_table offset must be 2-aligned"
);

/// Process-lifetime handle to the five memory-mapped tables.
///
/// `Copy`/`Clone`, `Send`/`Sync`: every field is either a `&'static` slice of
/// a `Copy` primitive or a `&'static` reference, so sharing one `Database`
/// across threads needs no synchronization. The backing mapping is leaked
/// once in [`Database::init`] (or the test-only constructor) so these
/// slices can outlive any particular call stack — the single intentional
/// leak in this crate, matching the "never unmapped, process-wide state"
/// resource model of the original.
#[derive(Clone, Copy)]
pub struct Database {
    pub(crate) psptable63: &'static [i64],
    pub(crate) psptable63_index: &'static [i32],
    pub(crate) collision_table: &'static [u32],
    pub(crate) collision_index: &'static [i32],
    pub(crate) factor_table: &'static [u16],
}

impl Database {
    /// Open and map `path` read-only. Fails if the file cannot be opened,
    /// cannot be mapped, or does not have exactly the expected length — no
    /// partially-initialized `Database` is ever returned.
    pub fn init(path: impl AsRef<Path>) -> Result<Database, InitError> {
        let path_buf: PathBuf = path.as_ref().to_path_buf();

        let file = File::open(&path_buf).map_err(InitError::Open)?;

        let actual_len = file.metadata().map_err(InitError::Open)?.len();
        if actual_len != TOTAL_LEN {
            let msg = format!(
                "database file {} has length {actual_len}, expected {TOTAL_LEN}",
                path_buf.display()
            );
            return Err(InitError::Mmap(std::io::Error::new(std::io::ErrorKind::InvalidData, msg)));
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(InitError::Mmap)?;
        let _ = mmap.advise(Advice::WillNeed);

        let bytes: &'static [u8] = Box::leak(Box::new(mmap));
        Ok(Self::from_bytes(bytes))
    }

    /// Slice `bytes` into the five typed arrays in §3 layout order.
    ///
    /// `bytes` must already have exactly [`TOTAL_LEN`] length; callers are
    /// either [`Database::init`] (via a leaked mmap) or the in-memory test
    /// constructor below (via a leaked synthetic `Vec<u8>`).
    fn from_bytes(bytes: &'static [u8]) -> Database {
        let (psp_bytes, rest) = bytes.split_at(PSPTABLE63_LEN * 8);
        let (psp_idx_bytes, rest) = rest.split_at(PSPTABLE63_INDEX_LEN * 4);
        let (coll_bytes, rest) = rest.split_at(COLLISION_TABLE_LEN * 4);
        let (coll_idx_bytes, factor_bytes) = rest.split_at(COLLISION_INDEX_LEN * 4);

        Database {
            psptable63: bytemuck::cast_slice(psp_bytes),
            psptable63_index: bytemuck::cast_slice(psp_idx_bytes),
            collision_table: bytemuck::cast_slice(coll_bytes),
            collision_index: bytemuck::cast_slice(coll_idx_bytes),
            factor_table: bytemuck::cast_slice(factor_bytes),
        }
    }

    /// Build a `Database` from owned in-memory arrays, for tests that need
    /// the full `factor`/`isprime` pipeline without a multi-gigabyte
    /// production `factor.bin` on disk. Each array is leaked once, the same
    /// way `init` leaks its mmap.
    #[doc(hidden)]
    pub fn from_arrays(
        psptable63: Vec<i64>,
        psptable63_index: Vec<i32>,
        collision_table: Vec<u32>,
        collision_index: Vec<i32>,
        factor_table: Vec<u16>,
    ) -> Database {
        Database {
            psptable63: Box::leak(psptable63.into_boxed_slice()),
            psptable63_index: Box::leak(psptable63_index.into_boxed_slice()),
            collision_table: Box::leak(collision_table.into_boxed_slice()),
            collision_index: Box::leak(collision_index.into_boxed_slice()),
            factor_table: Box::leak(factor_table.into_boxed_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_len_matches_published_sizes() {
        let expected: u64 = 23_355_139u64 * 8
            + 64 * 4
            + 146_144_317u64 * 4
            + 808_315u64 * 4
            + 1_518_500_250u64 * 2;
        assert_eq!(TOTAL_LEN, expected);
    }

    #[test]
    fn init_rejects_missing_file() {
        let err = Database::init("/nonexistent/path/to/factor.bin").unwrap_err();
        assert!(matches!(err, InitError::Open(_)));
    }

    #[test]
    fn init_rejects_file_with_wrong_length() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();
        let err = Database::init(file.path()).unwrap_err();
        assert!(matches!(err, InitError::Mmap(_)));
    }

    #[test]
    fn from_arrays_round_trips_lookups() {
        let db = Database::from_arrays(
            vec![7, 11, 13],
            vec![0, 1, 2, 3],
            vec![100, 101],
            vec![0, 1],
            vec![0, 3, 0, 5],
        );
        assert_eq!(db.psptable63, &[7, 11, 13]);
        assert_eq!(db.factor_table, &[0, 3, 0, 5]);
    }
}
