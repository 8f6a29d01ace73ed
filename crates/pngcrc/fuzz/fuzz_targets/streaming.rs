//! Fuzz target for streaming CRC-32 updates.
//!
//! Arbitrary sequences of update calls must produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pngcrc::{Checksum, Crc32};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Finalize (non-consuming) after every update
  peek: bool,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = pngcrc::checksum(data);

  let mut hasher = Crc32::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(input.chunk_sizes.len());
      input.chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    if input.peek {
      assert_eq!(hasher.finalize(), pngcrc::checksum(&data[..end]), "prefix mismatch at {end}");
    }
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");

  hasher.reset();
  hasher.update(data);
  assert_eq!(hasher.finalize(), expected, "reset mismatch");
});
