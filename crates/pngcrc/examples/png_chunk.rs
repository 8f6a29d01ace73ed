//! Writing and checking PNG chunk CRCs.
//!
//! A PNG chunk is `length (4, BE) | type (4) | data (length) | crc (4, BE)`,
//! and the CRC covers `type | data`. The type and the data usually live in
//! different buffers, which is what `checksum2` is for.
//!
//! Run with: `cargo run --example png_chunk -p pngcrc`

use core::fmt;

use pngcrc::{Checksum, ChecksumMismatch, Crc32};

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

#[derive(Debug, PartialEq, Eq)]
enum ChunkError {
  /// The input does not start with the PNG signature.
  Signature,
  /// Chunk `index` runs past the end of the input.
  Truncated { index: usize },
  /// Chunk `index` carries a CRC that does not match its contents.
  Crc { index: usize, source: ChecksumMismatch<u32> },
}

impl fmt::Display for ChunkError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Signature => f.write_str("missing PNG signature"),
      Self::Truncated { index } => write!(f, "chunk {index} is truncated"),
      Self::Crc { index, source } => write!(f, "chunk {index}: {source}"),
    }
  }
}

fn write_chunk(out: &mut Vec<u8>, chunk_type: [u8; 4], data: &[u8]) {
  let len = u32::try_from(data.len()).unwrap_or(u32::MAX);
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(&chunk_type);
  out.extend_from_slice(data);
  out.extend_from_slice(&pngcrc::checksum2(chunk_type, data).to_be_bytes());
}

/// Walk the chunks after the signature, checking each trailer.
///
/// Every length field is bounds-checked before it is trusted.
fn check_chunks(png: &[u8]) -> Result<usize, ChunkError> {
  let mut rest = png.strip_prefix(&SIGNATURE[..]).ok_or(ChunkError::Signature)?;
  let mut index = 0;

  while !rest.is_empty() {
    let truncated = ChunkError::Truncated { index };

    let Some((len, tail)) = rest.split_first_chunk::<4>() else {
      return Err(truncated);
    };
    let len = u32::from_be_bytes(*len) as usize;

    // type + data
    let Some((body, tail)) = len.checked_add(4).and_then(|n| tail.split_at_checked(n)) else {
      return Err(truncated);
    };
    let Some((stored, tail)) = tail.split_first_chunk::<4>() else {
      return Err(truncated);
    };
    let stored = u32::from_be_bytes(*stored);

    Crc32::verify(body, stored).map_err(|source| ChunkError::Crc { index, source })?;

    let name = body.first_chunk::<4>().map(|t| String::from_utf8_lossy(t).into_owned());
    println!("  {} ({len} bytes): crc 0x{stored:08X} ok", name.unwrap_or_default());

    rest = tail;
    index += 1;
  }

  Ok(index)
}

/// 1x1 RGBA, one transparent black pixel.
fn tiny_png() -> Vec<u8> {
  let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0];
  let idat = [
    0x78, 0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4,
  ];

  let mut png = SIGNATURE.to_vec();
  write_chunk(&mut png, *b"IHDR", &ihdr);
  write_chunk(&mut png, *b"IDAT", &idat);
  write_chunk(&mut png, *b"IEND", &[]);
  png
}

fn main() {
  println!("=== PNG Chunk CRCs ===\n");

  let png = tiny_png();

  println!("Wrote {} bytes:", png.len());
  match check_chunks(&png) {
    Ok(n) => println!("{n} chunks verified\n"),
    Err(err) => println!("unexpected: {err}\n"),
  }

  // Corrupt one byte of the IHDR data.
  let mut damaged = png.clone();
  if let Some(byte) = damaged.get_mut(SIGNATURE.len() + 8) {
    *byte ^= 0x40;
  }

  println!("After flipping one bit:");
  match check_chunks(&damaged) {
    Ok(n) => println!("{n} chunks verified (corruption missed!)\n"),
    Err(err) => println!("  rejected: {err}\n"),
  }

  println!("After cutting the file short:");
  match check_chunks(&png[..png.len() - 3]) {
    Ok(n) => println!("{n} chunks verified (truncation missed!)"),
    Err(err) => println!("  rejected: {err}"),
  }
}
