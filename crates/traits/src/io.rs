//! I/O adapters that checksum data as it is read or written.
//!
//! Both adapters hash exactly the bytes that were transferred: a short read
//! only hashes the filled prefix of the buffer, and vectored reads hash the
//! filled prefix across the slices in order.
//!
//! # Example
//!
//! ```rust
//! # use crc_traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.crc(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
use std::io::{IoSliceMut, Read, Result, Write};

/// Checksums every byte read from `R`.
///
/// The checksum only ever covers bytes that were actually delivered to the
/// caller, in the order they were delivered.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: crate::Checksum> {
  inner: R,
  hasher: C,
}

#[cfg(feature = "std")]
impl<R, C: crate::Checksum> ChecksumReader<R, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Checksum of the bytes read so far. Reading may continue afterwards.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Split into the inner reader and the checksum of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

#[cfg(feature = "std")]
impl<R: Read, C: crate::Checksum> Read for ChecksumReader<R, C> {
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(filled) = buf.get(..n) {
      self.hasher.update(filled);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<usize> {
    let n = self.inner.read_vectored(bufs)?;

    // The filled bytes are a prefix of the slices taken in order.
    let mut left = n;
    for buf in bufs.iter() {
      if left == 0 {
        break;
      }
      let take = left.min(buf.len());
      if let Some(filled) = buf.get(..take) {
        self.hasher.update(filled);
      }
      left -= take;
    }
    Ok(n)
  }
}

/// Checksums every byte written through to `W`.
///
/// Only the bytes the inner writer accepted are hashed, so a short write
/// followed by a retry of the remainder (as `write_all` does) hashes every
/// byte exactly once.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: crate::Checksum> {
  inner: W,
  hasher: C,
}

#[cfg(feature = "std")]
impl<W, C: crate::Checksum> ChecksumWriter<W, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Continue a checksum whose earlier part was written elsewhere.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of the bytes accepted so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Split into the inner writer and the checksum of everything written.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

#[cfg(feature = "std")]
impl<W: Write, C: crate::Checksum> Write for ChecksumWriter<W, C> {
  fn write(&mut self, buf: &[u8]) -> Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(accepted) = buf.get(..n) {
      self.hasher.update(accepted);
    }
    Ok(n)
  }

  fn flush(&mut self) -> Result<()> {
    self.inner.flush()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{io::Cursor, vec::Vec};

  use super::*;
  use crate::Checksum;

  #[derive(Clone, Debug, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }

    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Reader that returns at most `max` bytes per call.
  struct Trickle<'a> {
    data: &'a [u8],
    max: usize,
  }

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
      let n = self.max.min(buf.len()).min(self.data.len());
      buf[..n].copy_from_slice(&self.data[..n]);
      self.data = &self.data[n..];
      Ok(n)
    }
  }

  /// Writer that accepts at most `max` bytes per call.
  struct Narrow {
    out: Vec<u8>,
    max: usize,
  }

  impl Write for Narrow {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
      let n = self.max.min(buf.len());
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_hashes_short_reads() {
    let data = b"the quick brown fox";
    let mut reader = ChecksumReader::<_, Sum>::new(Trickle { data, max: 3 });
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
    assert_eq!(reader.crc(), Sum::checksum(data));
  }

  #[test]
  fn reader_vectored_hashes_filled_prefix() {
    let mut reader = ChecksumReader::<_, Sum>::new(Cursor::new(b"abcde".to_vec()));
    let mut a = [0u8; 2];
    let mut b = [0u8; 8];
    let n = reader
      .read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)])
      .unwrap();
    assert_eq!(n, 5);
    assert_eq!(reader.crc(), Sum::checksum(b"abcde"));
  }

  #[test]
  fn writer_hashes_accepted_bytes_once() {
    let data = b"hello world";
    let mut writer = ChecksumWriter::<_, Sum>::new(Narrow { out: Vec::new(), max: 4 });
    writer.write_all(data).unwrap();
    let (inner, crc) = writer.into_parts();
    assert_eq!(inner.out, data);
    assert_eq!(crc, Sum::checksum(data));
  }

  #[test]
  fn with_initial_resumes() {
    let mut writer = ChecksumWriter::<_, Sum>::with_initial(Vec::new(), Sum::checksum(b"ab"));
    writer.write_all(b"c").unwrap();
    assert_eq!(writer.crc(), Sum::checksum(b"abc"));
    assert_eq!(writer.inner(), &b"c".to_vec());
  }
}
