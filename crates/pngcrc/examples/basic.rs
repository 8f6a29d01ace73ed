//! Basic CRC-32 usage: one-shot, two-segment, streaming, resume and combine.
//!
//! Run with: `cargo run --example basic -p pngcrc`

use pngcrc::{Checksum, ChecksumCombine, Crc32};

fn main() {
  println!("=== CRC-32 Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  combine_example();
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc = pngcrc::checksum(data);
  println!("CRC-32:             0x{crc:08X}");
  assert_eq!(crc, 0xCBF4_3926);

  // Same value from two buffers, without concatenating them.
  let pair = pngcrc::checksum2(b"1234", b"56789");
  println!("CRC-32 (2 buffers): 0x{pair:08X}");
  assert_eq!(pair, crc);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC-32: 0x{crc:08X}");
  assert_eq!(crc, pngcrc::checksum(b"123456789"));

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  let extended = hasher.finalize();
  println!("Extended CRC-32:  0x{extended:08X}");

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  let new_crc = hasher.finalize();
  println!("Reset CRC-32:     0x{new_crc:08X}");

  println!();
}

/// Resume computation from a saved checksum.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved_state = pngcrc::checksum(part1);
  println!("Saved state after part1: 0x{saved_state:08X}");

  let mut resumed = Crc32::resume(saved_state);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:08X}");

  assert_eq!(final_crc, pngcrc::checksum2(part1, part2));
  println!("Verified: matches full computation");

  println!();
}

/// Merge checksums computed independently (e.g. on different threads).
fn combine_example() {
  println!("--- Combine ---\n");

  let data: Vec<u8> = (0..64 * 1024u32).map(|i| (i * 31 % 256) as u8).collect();
  let chunks: Vec<&[u8]> = data.chunks(16 * 1024).collect();

  let crcs: Vec<(u32, usize)> = std::thread::scope(|s| {
    let handles: Vec<_> = chunks
      .iter()
      .map(|chunk| s.spawn(move || (pngcrc::checksum(chunk), chunk.len())))
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  let combined = crcs
    .iter()
    .skip(1)
    .fold(crcs[0].0, |acc, &(crc, len)| Crc32::combine(acc, crc, len));

  println!("Combined from {} threads: 0x{combined:08X}", crcs.len());
  assert_eq!(combined, pngcrc::checksum(&data));
  println!("Verified: matches full computation");

  println!();
}
