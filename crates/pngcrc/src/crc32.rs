//! CRC-32 (ISO-HDLC): the PNG / zlib / gzip checksum.
//!
//! This module provides:
//! - [`checksum`] / [`checksum2`] - one-shot free functions over one or two buffers
//! - [`Crc32`] - streaming hasher with resume, vectored update and combine

use crc_traits::{Checksum, ChecksumCombine};

use crate::{
  combine::{Gf2Matrix32, combine_crc32, generate_shift8_matrix_32},
  portable::crc32_bytewise_ieee,
  table::POLYNOMIAL,
};

// ─────────────────────────────────────────────────────────────────────────────
// One-shot functions
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 of a byte sequence.
///
/// Accepts anything that views as bytes: arrays, slices, `Vec<u8>`, `&str`.
/// The empty sequence yields 0.
///
/// ```
/// assert_eq!(pngcrc::checksum(b"123456789"), 0xCBF4_3926);
/// assert_eq!(pngcrc::checksum("123456789"), 0xCBF4_3926);
/// assert_eq!(pngcrc::checksum(Vec::<u8>::new()), 0);
/// ```
#[inline]
#[must_use]
pub fn checksum(data: impl AsRef<[u8]>) -> u32 {
  Crc32::checksum(data.as_ref())
}

/// CRC-32 of `data ‖ data2` without concatenating them.
///
/// The register runs across both buffers and is inverted once at the end, so
/// a PNG chunk's type field and its separately owned payload can be checked
/// in one call.
///
/// ```
/// assert_eq!(pngcrc::checksum2(b"1234", b"56789"), pngcrc::checksum(b"123456789"));
/// ```
#[inline]
#[must_use]
pub fn checksum2(data: impl AsRef<[u8]>, data2: impl AsRef<[u8]>) -> u32 {
  Crc32::checksum_pair(data.as_ref(), data2.as_ref())
}

// ─────────────────────────────────────────────────────────────────────────────
// Crc32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// Used in PNG chunks, zlib, gzip, ZIP and Ethernet.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use pngcrc::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF43926);
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
#[derive(Clone, Debug)]
pub struct Crc32 {
  state: u32,
}

impl Crc32 {
  /// Pre-computed shift-by-8 matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix32 = generate_shift8_matrix_32(POLYNOMIAL);

  /// Create a hasher to resume from a previous (finalized) CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ !0 }
  }

  /// CRC-32 of `a ‖ b`, folding both buffers through one register.
  #[inline]
  #[must_use]
  pub fn checksum_pair(a: &[u8], b: &[u8]) -> u32 {
    crc32_bytewise_ieee(crc32_bytewise_ieee(!0, a), b) ^ !0
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self { state: !0 }
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: !0 }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self { state: initial ^ !0 }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = crc32_bytewise_ieee(self.state, data);
  }

  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.state = crc32_bytewise_ieee(self.state, buf);
    }
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
