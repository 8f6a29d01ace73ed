//! Portable table-driven CRC-32 kernel.
//!
//! Folds one byte per step through the 256-entry [`TABLE`]. The kernel works on
//! the raw register: no seeding, no final inversion. That is what lets the
//! two-segment and streaming forms carry the register across buffers and
//! invert exactly once at the end.

use crate::table::{Crc32Table, TABLE};

/// CRC-32 byte-at-a-time update against the process-wide table.
#[inline]
pub fn crc32_bytewise_ieee(crc: u32, data: &[u8]) -> u32 {
  crc32_bytewise(crc, data, &TABLE)
}

/// Update a CRC-32 register using a byte-at-a-time lookup table.
///
/// For each byte: `crc = (crc >> 8) ^ table[(crc ^ byte) & 0xFF]`.
#[inline]
pub fn crc32_bytewise(mut crc: u32, data: &[u8], table: &Crc32Table) -> u32 {
  for &b in data {
    // Truncating to u8 is the `& 0xFF` of the index computation.
    crc = (crc >> 8) ^ table.get((crc as u8) ^ b);
  }
  crc
}
