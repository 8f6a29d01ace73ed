//! Const-fn CRC-32 lookup table generation.
//!
//! The table holds the CRC-32 remainder of every byte value, so the fold can
//! consume one byte per step instead of one bit. It is computed by `const fn`
//! and embedded in the binary: it is fully populated before any code runs and
//! is never written afterwards, so it can be shared across threads freely.
//!
//! | Entry | Value |
//! |-------|-------|
//! | `TABLE[0]` | `0x0000_0000` |
//! | `TABLE[1]` | `0x7707_3096` |
//! | `TABLE[128]` | `0xEDB8_8320` |
//! | `TABLE[255]` | `0x2D02_EF8D` |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256) or
// a `u8` index into a 256-entry array. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use core::{fmt, ops::Index};

/// CRC-32 (ISO-HDLC) polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x04C11DB7; the reflected form drives LSB-first
/// processing, which is what PNG, zlib and gzip specify.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Number of entries in a byte-indexed lookup table.
pub const TABLE_LEN: usize = 256;

/// Compute a single lookup table entry: `index` run through 8 rounds of
/// reflected polynomial division by `poly`.
#[must_use]
pub const fn table_entry(poly: u32, index: u8) -> u32 {
  let mut value = index as u32;
  let mut round = 0;
  while round < 8 {
    if value & 1 != 0 {
      value = (value >> 1) ^ poly;
    } else {
      value >>= 1;
    }
    round += 1;
  }
  value
}

/// Build the 256-entry lookup table for a reflected polynomial.
#[must_use]
pub const fn build_table(poly: u32) -> [u32; TABLE_LEN] {
  let mut table = [0u32; TABLE_LEN];
  let mut i = 0usize;
  while i < TABLE_LEN {
    table[i] = table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Immutable 256-entry CRC-32 lookup table for [`POLYNOMIAL`].
///
/// Index it with a byte value:
///
/// ```
/// use pngcrc::table::TABLE;
///
/// assert_eq!(TABLE[0], 0);
/// assert_eq!(TABLE[1], 0x7707_3096);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Crc32Table([u32; TABLE_LEN]);

impl Crc32Table {
  /// Build the table for [`POLYNOMIAL`].
  #[must_use]
  pub const fn new() -> Self {
    Self(build_table(POLYNOMIAL))
  }

  /// Entry for byte value `index`.
  #[inline(always)]
  #[must_use]
  pub const fn get(&self, index: u8) -> u32 {
    self.0[index as usize]
  }

  #[inline]
  #[must_use]
  pub const fn as_array(&self) -> &[u32; TABLE_LEN] {
    &self.0
  }
}

impl Default for Crc32Table {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Index<u8> for Crc32Table {
  type Output = u32;

  #[inline(always)]
  fn index(&self, index: u8) -> &u32 {
    &self.0[index as usize]
  }
}

impl fmt::Debug for Crc32Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32Table")
      .field("poly", &format_args!("{POLYNOMIAL:#010x}"))
      .field("len", &TABLE_LEN)
      .finish_non_exhaustive()
  }
}

/// The process-wide CRC-32 lookup table, computed at compile time.
pub static TABLE: Crc32Table = Crc32Table::new();

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bitwise;

  #[test]
  fn first_entries_match_standard_table() {
    assert_eq!(TABLE[0], 0x0000_0000);
    assert_eq!(TABLE[1], 0x7707_3096);
    assert_eq!(TABLE[2], 0xEE0E_612C);
    assert_eq!(TABLE[3], 0x9909_51BA);
  }

  #[test]
  fn notable_entries() {
    assert_eq!(TABLE[128], POLYNOMIAL);
    assert_eq!(TABLE[255], 0x2D02_EF8D);
  }

  #[test]
  fn entries_match_bitwise_byte_fold() {
    for i in 0..=255u8 {
      // A zero register folded over byte `i` is exactly entry `i`.
      assert_eq!(TABLE.get(i), bitwise::compute_byte(0, i), "entry {i}");
    }
  }

  #[test]
  fn index_and_get_agree() {
    for i in 0..=255u8 {
      assert_eq!(TABLE[i], TABLE.get(i));
      assert_eq!(TABLE.as_array()[usize::from(i)], TABLE.get(i));
    }
  }

  #[test]
  fn construction_is_deterministic() {
    assert_eq!(Crc32Table::new(), TABLE);
    assert_eq!(Crc32Table::default(), TABLE);
    assert_eq!(build_table(POLYNOMIAL), *TABLE.as_array());
  }

  #[test]
  fn table_is_cache_line_aligned() {
    assert_eq!(core::mem::align_of::<Crc32Table>(), 64);
    assert_eq!(core::mem::size_of::<Crc32Table>(), TABLE_LEN * 4);
  }

  #[test]
  fn const_evaluable() {
    const ENTRY_1: u32 = table_entry(POLYNOMIAL, 1);
    assert_eq!(ENTRY_1, 0x7707_3096);
  }

  #[test]
  fn debug_is_compact() {
    let dbg = std::format!("{TABLE:?}");
    assert_eq!(dbg, "Crc32Table { poly: 0xedb88320, len: 256, .. }");
  }
}
