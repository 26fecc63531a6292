//! Const-fn reflected CRC-32 lookup table generation.
//!
//! Tables are built from the polynomial in *normal* (MSB-first) form. Each
//! entry is computed by long division on a 32-bit register and then reflected,
//! so the result drives the right-shifting update:
//!
//! ```text
//! crc = table[(crc ^ byte) & 0xFF] ^ (crc >> 8)
//! ```
//!
//! # Table Strategies
//!
//! | Strategy | Tables | Bytes/iter |
//! |----------|--------|------------|
//! | Bytewise | 1×256×u32 | 1 |
//! | Slice-by-16 | 16×256×u32 | 16 |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..16)
// or values masked with `& 0xFF`. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use super::reflect::reflect;

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Ethernet FCS / ISO-HDLC polynomial (0x04C11DB7) in normal form.
/// Used by IEEE 802.3, gzip, zip, PNG.
pub const ETHERNET_FCS_POLY: u32 = 0x04C1_1DB7;

/// Ethernet FCS polynomial in reflected form (for right-shifting bitwise code).
pub const ETHERNET_FCS_POLY_REFLECTED: u32 = reflect(ETHERNET_FCS_POLY as u64, 32) as u32;

const _: () = assert!(ETHERNET_FCS_POLY_REFLECTED == 0xEDB8_8320);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single reflected CRC-32 lookup table entry.
///
/// The byte is reflected into the top of the register, divided MSB-first by
/// `poly` for eight steps, and the remainder reflected back. `u32` shifts
/// discard bits above bit 31 at every step.
#[inline]
#[must_use]
pub const fn crc32_reflected_entry(poly: u32, index: u8) -> u32 {
  let mut crc = reflect(index as u64, 32) as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 0x8000_0000 != 0 {
      crc = (crc << 1) ^ poly;
    } else {
      crc <<= 1;
    }
    i += 1;
  }
  reflect(crc as u64, 32) as u32
}

/// Build the 256-entry reflected lookup table for a normal-form polynomial.
///
/// Defined for every 32-bit value, including degenerate polynomials. Entry 0
/// is always 0. Building twice from the same polynomial yields the same table.
///
/// # Example
///
/// ```
/// use checksum::{ETHERNET_FCS_POLY, build_reflected_table};
///
/// let table = build_reflected_table(ETHERNET_FCS_POLY);
/// assert_eq!(table[0], 0);
/// assert_eq!(table[1], 0x7707_3096);
/// assert_eq!(table[255], 0x2D02_EF8D);
/// ```
#[must_use]
pub const fn build_reflected_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc32_reflected_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Derive 16 slice-by-16 tables from a bytewise reflected table.
///
/// `tables[k][i]` is the register contribution of byte `i` followed by `k`
/// zero bytes; `tables[0]` is `base` itself.
#[must_use]
pub const fn generate_crc32_tables_16(base: &[u32; 256]) -> [[u32; 256]; 16] {
  let mut tables = [[0u32; 256]; 16];
  tables[0] = *base;

  let mut k = 1usize;
  while k < 16 {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}
