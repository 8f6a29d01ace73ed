//! Known-answer tests from public CRC-32 catalogs and real PNG chunks.

use pngcrc::{Checksum, Crc32, table::TABLE};

const CHECK_STRING: &[u8] = b"123456789";
const CRC32_ISO_HDLC_CHECK: u32 = 0xCBF4_3926;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn crc32_produces_check_value() {
  let result = pngcrc::checksum(CHECK_STRING);
  assert_eq!(
    result, CRC32_ISO_HDLC_CHECK,
    "CRC-32/ISO-HDLC mismatch: got {result:#010X}, expected {CRC32_ISO_HDLC_CHECK:#010X}"
  );
}

#[test]
fn crc32_known_answers() {
  let cases: &[(&[u8], u32)] = &[
    (b"", 0x0000_0000),
    (b"a", 0xE8B7_BE43),
    (b"The quick brown fox jumps over the lazy dog", 0x414F_A339),
    (&[0x00; 32], 0x190A_55AD),
    (&[0xFF; 32], 0xFF6C_AB0B),
  ];

  for &(input, expected) in cases {
    let result = Crc32::checksum(input);
    assert_eq!(result, expected, "input {input:02x?}: got {result:#010X}");
  }
}

#[test]
fn crc32_every_byte_value() {
  let data: Vec<u8> = (0..=255u8).collect();
  assert_eq!(pngcrc::checksum(&data), 0x2905_8C73);
}

#[test]
fn table_head() {
  assert_eq!(TABLE[0], 0);
  assert_eq!(TABLE[1], 0x7707_3096);
}

// ─────────────────────────────────────────────────────────────────────────────
// PNG chunks
// ─────────────────────────────────────────────────────────────────────────────
//
// A chunk's CRC covers its 4-byte type followed by its data, never the length.

#[test]
fn png_ihdr_one_by_one_rgba() {
  let chunk_type = *b"IHDR";
  let data = [0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0];
  assert_eq!(pngcrc::checksum2(chunk_type, data), 0x1F15_C489);
}

#[test]
fn png_idat_payload() {
  let chunk_type = *b"IDAT";
  let data: Vec<u8> = vec![
    0x78, 0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4,
  ];
  assert_eq!(pngcrc::checksum2(chunk_type, &data), 0x8FE1_7B4B);
}

#[test]
fn png_iend() {
  assert_eq!(pngcrc::checksum2(b"IEND", b""), 0xAE42_6082);
  assert_eq!(pngcrc::checksum(b"IEND"), 0xAE42_6082);
}

#[test]
fn png_trailer_verification() {
  // Type + data + big-endian CRC as it appears on disk.
  let stored = 0x1F15_C489u32.to_be_bytes();
  let mut body = b"IHDR".to_vec();
  body.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]);

  assert!(Crc32::verify(&body, u32::from_be_bytes(stored)).is_ok());

  body[8] ^= 0x01;
  let err = Crc32::verify(&body, u32::from_be_bytes(stored)).unwrap_err();
  assert_eq!(err.expected(), 0x1F15_C489);
  assert_ne!(err.actual(), err.expected());
}
