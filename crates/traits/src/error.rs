//! Error types.
//!
//! Checksum computation itself cannot fail; the only error is a computed value
//! that disagrees with the value stored alongside the data.

use core::fmt;

/// A computed checksum did not match the expected one.
///
/// Returned by [`Checksum::verify`](crate::Checksum::verify) when, for example,
/// a PNG chunk's trailing CRC field disagrees with the CRC of its type and data.
///
/// # Examples
///
/// ```
/// use crc_traits::ChecksumMismatch;
///
/// let err = ChecksumMismatch::new(0xCBF4_3926u32, 0u32);
/// assert_eq!(err.expected(), 0xCBF4_3926);
/// assert_eq!(err.to_string(), "checksum mismatch: expected 0xcbf43926, got 0x0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ChecksumMismatch<T> {
  expected: T,
  actual: T,
}

impl<T: Copy> ChecksumMismatch<T> {
  /// Create a mismatch error from the expected and actually computed values.
  #[inline]
  #[must_use]
  pub const fn new(expected: T, actual: T) -> Self {
    Self { expected, actual }
  }

  /// The checksum the caller expected (e.g. read from the data's trailer).
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> T {
    self.expected
  }

  /// The checksum computed over the data.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> T {
    self.actual
  }
}

impl<T: fmt::LowerHex> fmt::Display for ChecksumMismatch<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "checksum mismatch: expected {:#x}, got {:#x}", self.expected, self.actual)
  }
}

impl<T: fmt::LowerHex + fmt::Debug> core::error::Error for ChecksumMismatch<T> {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    let err = ChecksumMismatch::new(0xDEAD_BEEFu32, 0x1234u32);
    assert_eq!(err.to_string(), "checksum mismatch: expected 0xdeadbeef, got 0x1234");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", ChecksumMismatch::new(1u32, 2u32));
    assert_eq!(dbg, "ChecksumMismatch { expected: 1, actual: 2 }");
  }

  #[test]
  fn accessors() {
    let err = ChecksumMismatch::new(7u32, 9u32);
    assert_eq!(err.expected(), 7);
    assert_eq!(err.actual(), 9);
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<ChecksumMismatch<u32>>();
    assert_sync::<ChecksumMismatch<u32>>();
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = ChecksumMismatch::new(0u32, 1u32);
    assert!(err.source().is_none());
  }
}
