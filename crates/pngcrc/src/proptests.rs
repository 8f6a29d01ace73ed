//! Property tests for the CRC-32 entry points.
//!
//! 1. **Reference agreement**: the table kernel matches the bitwise reference
//!    and the independent `crc-fast` implementation.
//! 2. **Segment equivalence**: `checksum2`, vectored updates, arbitrary
//!    chunking, resume and combine all equal the one-shot checksum of the
//!    concatenation.

#![cfg(all(test, not(miri)))]

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use crc_traits::{Checksum, ChecksumCombine};
use proptest::prelude::*;

use crate::{Crc32, bitwise, checksum, checksum2, portable};

fn reference(data: &[u8]) -> u32 {
  bitwise::compute(!0, data) ^ !0
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn table_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(portable::crc32_bytewise_ieee(!0, &data) ^ !0, reference(&data));
    prop_assert_eq!(checksum(&data), reference(&data));
  }

  #[test]
  fn matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(checksum(&data), reference);
  }

  #[test]
  fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(checksum(&data), checksum(&data));
  }

  #[test]
  fn pair_equals_concatenation(
    a in proptest::collection::vec(any::<u8>(), 0..=512),
    b in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let mut joined = a.clone();
    joined.extend_from_slice(&b);

    prop_assert_eq!(checksum2(&a, &b), checksum(&joined));
    prop_assert_eq!(checksum2(&a, [0u8; 0]), checksum(&a));
    prop_assert_eq!(checksum2([0u8; 0], &b), checksum(&b));
  }

  #[test]
  fn chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut hasher = Crc32::new();
    for part in data.chunks(chunk) {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.finalize(), checksum(&data));

    let parts: Vec<&[u8]> = data.chunks(chunk).collect();
    prop_assert_eq!(Crc32::checksum_vectored(&parts), checksum(&data));
  }

  #[test]
  fn resume_and_combine_correctness(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let expected = reference(&data);

    let crc_a = Crc32::checksum(a);
    let mut resumed = Crc32::resume(crc_a);
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), expected);

    let combined = Crc32::combine(crc_a, Crc32::checksum(b), b.len());
    prop_assert_eq!(combined, expected,
      "combine(crc(A), crc(B), len(B)) != crc(A||B) at split {}/{}",
      split, data.len());
  }

  #[test]
  fn combine_matches_crc_fast_rust(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());

    let ref_crc_a = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, a);
    let ref_crc_b = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, b);
    let ref_combined =
      crc_fast::checksum_combine(CrcAlgorithm::Crc32IsoHdlc, ref_crc_a, ref_crc_b, b.len() as u64) as u32;

    prop_assert_eq!(combined, ref_combined);
  }

  #[test]
  fn single_bit_flip_detected(
    data in proptest::collection::vec(any::<u8>(), 1..=1024),
    position in any::<usize>(),
    bit in 0u8..8
  ) {
    let mut flipped = data.clone();
    let position = position % flipped.len();
    flipped[position] ^= 1 << bit;
    prop_assert_ne!(checksum(&flipped), checksum(&data));
  }
}
