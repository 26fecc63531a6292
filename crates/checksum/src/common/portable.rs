//! Portable CRC-32 kernels using lookup table algorithms.
//!
//! # Algorithm Overview
//!
//! Slice-by-N processes N bytes per iteration using N precomputed lookup tables.
//! Each table contains 256 entries representing the CRC contribution of a single
//! byte at a specific position in the input stream.
//!
//! The algorithm XORs the current CRC into the first 4 input bytes, then combines
//! N table lookups (one per byte position) using XOR. Bytes that do not fill a
//! whole block fall through to the byte-at-a-time path, so every length takes a
//! distinct mix of block and tail work.
//!
//! | Algorithm | Bytes/iter | Tables |
//! |-----------|------------|--------|
//! | bytewise | 1 | 1×256×u32 |
//! | slice-by-16 | 16 | 16×256×u32 |

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices use `& 0xFF` (0..255) or `>> 24` on a u32
#![allow(clippy::indexing_slicing)]

/// Update CRC-32 state one byte at a time.
#[inline]
pub fn bytewise_32(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &b in data {
    let index = ((crc ^ (b as u32)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-32 state using the slice-by-16 algorithm.
///
/// # Arguments
///
/// * `crc` - Current CRC state (pre-inverted)
/// * `data` - Input data
/// * `tables` - 16 lookup tables (256 entries each)
#[inline]
pub fn slice16_32(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 16]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<16>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
    let c = u32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]);
    let d = u32::from_le_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

    crc = tables[15][(a & 0xFF) as usize]
      ^ tables[14][((a >> 8) & 0xFF) as usize]
      ^ tables[13][((a >> 16) & 0xFF) as usize]
      ^ tables[12][(a >> 24) as usize]
      ^ tables[11][(b & 0xFF) as usize]
      ^ tables[10][((b >> 8) & 0xFF) as usize]
      ^ tables[9][((b >> 16) & 0xFF) as usize]
      ^ tables[8][(b >> 24) as usize]
      ^ tables[7][(c & 0xFF) as usize]
      ^ tables[6][((c >> 8) & 0xFF) as usize]
      ^ tables[5][((c >> 16) & 0xFF) as usize]
      ^ tables[4][(c >> 24) as usize]
      ^ tables[3][(d & 0xFF) as usize]
      ^ tables[2][((d >> 8) & 0xFF) as usize]
      ^ tables[1][((d >> 16) & 0xFF) as usize]
      ^ tables[0][(d >> 24) as usize];
  }

  // Process remaining bytes (0-15) with byte-at-a-time
  bytewise_32(crc, remainder, &tables[0])
}
