//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and checksum the bytes that actually
//! pass through (short reads and writes included).
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use pngcrc::{Checksum, Crc32};
//!
//! let mut reader = Crc32::reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), pngcrc::checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use crc_traits::io::{ChecksumReader, ChecksumWriter};
