//! Fuzz target for the CRC-32 entry points.
//!
//! Tests that:
//! - The two-buffer form equals the one-shot checksum of the concatenation
//! - Incremental updates, resume and combine agree with one-shot
//! - The table kernel agrees with the bitwise reference

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pngcrc::{Checksum, ChecksumCombine, Crc32, bitwise};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input
    .split_point
    .strict_rem(data.len().strict_add(1));

  let oneshot = pngcrc::checksum(data);
  assert_eq!(oneshot, bitwise::compute(!0, data) ^ !0, "table/bitwise mismatch");

  let (a, b) = data.split_at(split);
  assert_eq!(pngcrc::checksum2(a, b), oneshot, "checksum2 mismatch");

  let mut hasher = Crc32::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "incremental mismatch");

  let crc_a = Crc32::checksum(a);
  let mut resumed = Crc32::resume(crc_a);
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "resume mismatch");

  let crc_b = Crc32::checksum(b);
  assert_eq!(Crc32::combine(crc_a, crc_b, b.len()), oneshot, "combine mismatch");

  assert!(Crc32::verify(data, oneshot).is_ok());
  assert!(Crc32::verify(data, !oneshot).is_err());
});
