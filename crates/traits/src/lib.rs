//! Checksum traits for the pngcrc crates.
//!
//! This crate provides the traits the CRC-32 implementation in `pngcrc`
//! conforms to, the error returned when a stored checksum does not match, and
//! (with `std`) reader/writer adapters that checksum data as it streams past.
//! It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot and streaming checksum computation |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` |
//! | [`ChecksumMismatch`] | A computed checksum differs from the stored one |
//! | [`io::ChecksumReader`] / [`io::ChecksumWriter`] | Checksum bytes during I/O (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::ChecksumMismatch;
