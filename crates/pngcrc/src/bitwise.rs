//! Table-less CRC-32 using branchless bitwise reduction.
//!
//! This is the canonical reference the table-driven fold is verified against,
//! and the only form usable in constant expressions ([`checksum_const`]).
//!
//! ```text
//! for each bit:
//!   mask = 0 - (crc & 1)    // 0x00000000 or 0xFFFFFFFF
//!   crc = (crc >> 1) ^ (POLYNOMIAL & mask)
//! ```
//!
//! Like the table kernel, these functions work on the raw register: the
//! caller seeds with `0xFFFF_FFFF` and inverts the result.

use crate::table::POLYNOMIAL;

/// Compute CRC-32 over a byte slice without using lookup tables.
///
/// # Example
///
/// ```
/// use pngcrc::bitwise::compute;
///
/// let crc = compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(crc, byte);
  }
  crc
}

/// Fold a single byte into the register.
#[inline]
#[must_use]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;

  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }

  crc
}

/// `const` evaluation of a complete CRC-32 (seeded and inverted).
///
/// Slow, but usable in constant expressions, e.g. to bake the CRC of a fixed
/// PNG chunk header into a binary.
///
/// ```
/// use pngcrc::bitwise::checksum_const;
///
/// const IEND_CRC: u32 = checksum_const(b"IEND");
/// assert_eq!(IEND_CRC, 0xAE42_6082);
/// ```
#[must_use]
pub const fn checksum_const(data: &[u8]) -> u32 {
  let mut crc = !0u32;
  let mut rest = data;
  while let [byte, tail @ ..] = rest {
    crc = compute_byte(crc, *byte);
    rest = tail;
  }
  !crc
}
