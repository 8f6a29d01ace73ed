//! Fuzz target for vectored and I/O adapter CRC-32 APIs.
//!
//! Verifies that:
//! - `update_vectored()` matches one-shot for arbitrary segmentations
//! - `IoSlice` helpers match one-shot
//! - `ChecksumReader` / `ChecksumWriter` see exactly the bytes that moved

#![no_main]

use std::io::{IoSlice, Read, Write};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pngcrc::{Checksum, ChecksumReader, ChecksumWriter, Crc32};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes used to create the vectored slices.
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = input.data;
  let expected = pngcrc::checksum(&data);
  let slices = split_into_slices(&data, &input.chunk_sizes);

  assert_eq!(Crc32::checksum_vectored(&slices), expected, "checksum_vectored mismatch");

  let mut h = Crc32::new();
  h.update_vectored(&slices);
  assert_eq!(h.finalize(), expected, "update_vectored mismatch");

  let io_slices: Vec<IoSlice<'_>> = slices.iter().map(|s| IoSlice::new(s)).collect();
  let mut h = Crc32::new();
  h.update_io_slices(&io_slices);
  assert_eq!(h.finalize(), expected, "update_io_slices mismatch");

  let mut reader = ChecksumReader::<_, Crc32>::new(data.as_slice());
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();
  assert_eq!(reader.crc(), expected, "reader mismatch");

  let mut writer = ChecksumWriter::<_, Crc32>::new(Vec::new());
  for slice in &slices {
    writer.write_all(slice).unwrap();
  }
  assert_eq!(writer.crc(), expected, "writer mismatch");
  assert_eq!(writer.into_inner(), data);
});

fn split_into_slices<'a>(data: &'a [u8], chunk_sizes: &[usize]) -> Vec<&'a [u8]> {
  let mut slices = Vec::new();
  let mut offset = 0usize;
  let mut chunk_idx = 0usize;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1usize
    } else {
      let idx = chunk_idx.strict_rem(chunk_sizes.len());
      chunk_sizes[idx].strict_rem(512).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    slices.push(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  slices
}
