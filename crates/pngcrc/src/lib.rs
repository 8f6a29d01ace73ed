//! Table-driven CRC-32 for PNG chunks and other zlib-family formats.
//!
//! This crate computes the CRC-32 defined by ISO-HDLC with the reflected
//! polynomial `0xEDB88320`, the checksum PNG stores after every chunk and
//! zlib/gzip use for their payloads. A 256-entry lookup table is built at
//! compile time and folded one byte per step.
//!
//! | Entry point | Computes |
//! |-------------|----------|
//! | [`checksum`] | CRC of one byte sequence |
//! | [`checksum2`] | CRC of two buffers as if concatenated |
//! | [`Crc32`] | Streaming, resume, vectored and [`ChecksumCombine`] forms |
//! | [`table::TABLE`] | The lookup table itself |
//!
//! # Example
//!
//! ```rust
//! use pngcrc::{Checksum, ChecksumCombine, Crc32};
//!
//! // One-shot
//! let data = b"123456789";
//! let crc = pngcrc::checksum(data);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Two segments, one inversion
//! assert_eq!(pngcrc::checksum2(b"1234", b"56789"), crc);
//!
//! // Streaming
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Combine independently computed checksums
//! let (a, b) = data.split_at(4);
//! let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());
//! assert_eq!(combined, crc);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! pngcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod bitwise;
mod combine;
mod crc32;
#[cfg(feature = "std")]
pub mod io;
mod portable;
mod proptests;
pub mod table;

pub use crc32::{Crc32, checksum, checksum2};
// Re-export traits for convenience
pub use crc_traits::{Checksum, ChecksumCombine, ChecksumMismatch};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
