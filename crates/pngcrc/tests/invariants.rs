use pngcrc::{Checksum, ChecksumCombine, Crc32};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn crc32_reflected_bitwise(poly_reflected: u32, data: &[u8]) -> u32 {
  let mut crc = 0xffff_ffffu32;
  for &b in data {
    crc ^= b as u32;
    for _ in 0..8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ 0xffff_ffff
}

#[test]
fn crc32_invariants() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = pngcrc::checksum(&data);
      let reference = crc32_reflected_bitwise(0xedb8_8320, &data);
      assert_eq!(oneshot, reference, "crc32 reference mismatch at len={}", len);

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        assert_eq!(
          pngcrc::checksum2(a, b),
          oneshot,
          "crc32 two-segment mismatch at len={} split={}",
          len,
          split
        );

        let mut h = Crc32::new();
        h.update(a);
        h.update(b);
        assert_eq!(
          h.finalize(),
          oneshot,
          "crc32 incremental mismatch at len={} split={}",
          len,
          split
        );

        let crc_a = Crc32::checksum(a);
        let mut r = Crc32::resume(crc_a);
        r.update(b);
        assert_eq!(
          r.finalize(),
          oneshot,
          "crc32 resume mismatch at len={} split={}",
          len,
          split
        );

        let crc_b = Crc32::checksum(b);
        let combined = Crc32::combine(crc_a, crc_b, b.len());
        assert_eq!(
          combined, oneshot,
          "crc32 combine mismatch at len={} split={}",
          len, split
        );
      }
    }
  }
}

#[test]
fn crc32_concurrent_callers_agree() {
  let data = gen_bytes(4096, 0x5d58_39a7_3d87_1ceb);
  let expected = pngcrc::checksum(&data);

  std::thread::scope(|s| {
    let handles: Vec<_> = (0..8)
      .map(|i| {
        let data = &data;
        s.spawn(move || {
          let (a, b) = data.split_at(i * 512);
          (pngcrc::checksum(data), pngcrc::checksum2(a, b))
        })
      })
      .collect();

    for handle in handles {
      let (whole, pair) = handle.join().unwrap();
      assert_eq!(whole, expected);
      assert_eq!(pair, expected);
    }
  });
}

#[test]
fn crc32_bit_flip_sensitivity() {
  for &len in &[1usize, 4, 13, 64] {
    let data = gen_bytes(len, len as u64);
    let base = pngcrc::checksum(&data);
    for bit in 0..len * 8 {
      let mut flipped = data.clone();
      flipped[bit / 8] ^= 1 << (bit % 8);
      assert_ne!(pngcrc::checksum(&flipped), base, "len={} bit={}", len, bit);
    }
  }
}
