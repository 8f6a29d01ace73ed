//! Checksum traits.
//!
//! - **One-shot**: `checksum(data)` for buffers already in memory
//! - **Streaming**: `new` / `update` / `finalize` for data that arrives in pieces
//! - **Combine**: merge independently computed checksums of adjacent segments

use core::fmt::{Debug, LowerHex};

use crate::error::ChecksumMismatch;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// With `Sum`, a toy additive checksum:
///
/// ```rust
/// # use crc_traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: u32) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> u32 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// // One-shot
/// let sum = Sum::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Sum::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), sum);
///
/// // Checking a stored value
/// assert!(Sum::verify(b"hello world", sum).is_ok());
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes (4 for CRC-32).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default + LowerHex;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial value.
  ///
  /// Useful for resuming a checksum computation or for non-standard initial values.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot, as if they were
  /// one contiguous buffer.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Compute the checksum of `data` and compare it with `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`ChecksumMismatch`] carrying both values when they differ.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), ChecksumMismatch<Self::Output>> {
    let actual = Self::checksum(data);
    if actual == expected {
      Ok(())
    } else {
      Err(ChecksumMismatch::new(expected, actual))
    }
  }

  /// Wrap a reader so every byte read is checksummed.
  ///
  /// ```rust
  /// # use crc_traits::Checksum;
  /// # #[derive(Clone, Default)]
  /// # struct Sum(u32);
  /// # impl Checksum for Sum {
  /// #   const OUTPUT_SIZE: usize = 4;
  /// #   type Output = u32;
  /// #   fn new() -> Self { Self(0) }
  /// #   fn with_initial(initial: u32) -> Self { Self(initial) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
  /// #   }
  /// #   fn finalize(&self) -> u32 { self.0 }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// use std::io::Read;
  ///
  /// let mut reader = Sum::reader(&b"\x01\x02\x03"[..]);
  /// let mut buf = Vec::new();
  /// reader.read_to_end(&mut buf)?;
  /// assert_eq!(reader.crc(), 6);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums whose values for adjacent segments can be merged.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` in O(log n) time:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// ```rust
/// # use crc_traits::{Checksum, ChecksumCombine};
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: u32) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> u32 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # impl ChecksumCombine for Sum {
/// #   fn combine(a: u32, b: u32, _len_b: usize) -> u32 { a.wrapping_add(b) }
/// # }
/// let (a, b) = (b"hello ", b"world");
/// let combined = Sum::combine(Sum::checksum(a), Sum::checksum(b), b.len());
/// assert_eq!(combined, Sum::checksum(b"hello world"));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
