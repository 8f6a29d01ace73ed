//! Fuzz target for CRC-32 combine chains.
//!
//! Folding `combine` over checksums of arbitrary consecutive chunks must give
//! the checksum of the whole input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pngcrc::{Checksum, ChecksumCombine, Crc32};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut splits: Vec<usize> = input
    .splits
    .iter()
    .map(|s| s.strict_rem(data.len().strict_add(1)))
    .collect();
  splits.sort_unstable();
  splits.dedup();

  let mut chunks = Vec::new();
  let mut prev = 0;
  for &split in &splits {
    chunks.push(&data[prev..split]);
    prev = split;
  }
  chunks.push(&data[prev..]);

  // Empty chunks stay in: combine over a zero-length tail is the identity.
  let combined = chunks
    .iter()
    .fold(Crc32::checksum(b""), |acc, chunk| Crc32::combine(acc, Crc32::checksum(chunk), chunk.len()));

  assert_eq!(combined, pngcrc::checksum(data), "combine chain mismatch");
});
