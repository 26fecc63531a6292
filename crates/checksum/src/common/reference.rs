//! Reference CRC-32 engines.
//!
//! Two independent formulations live here:
//!
//! - [`crc32_lut_update`]: the byte-at-a-time table-driven update. This is the
//!   engine every accelerated kernel is checked against.
//! - [`crc32_bitwise`]: one bit per step, no table. Obviously correct by
//!   inspection; used to validate the table-driven engine itself.
//!
//! Both return the raw register; the caller applies the final XOR exactly once,
//! after the last byte.
//!
//! # CRC Model
//!
//! | Parameter | Ethernet FCS |
//! |-----------|--------------|
//! | `width`   | 32 |
//! | `poly`    | 0x04C11DB7 (normal) |
//! | `init`    | 0xFFFFFFFF |
//! | `refin`/`refout` | true |
//! | `xorout`  | 0xFFFFFFFF |

// SAFETY: All array indexing uses bounded loop indices (0..data.len()) or `& 0xFF`.
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::{
  reflect::reflect,
  tables::{ETHERNET_FCS_POLY, build_reflected_table},
};

// ─────────────────────────────────────────────────────────────────────────────
// Table-Driven Update
// ─────────────────────────────────────────────────────────────────────────────

/// Advance a reflected CRC-32 register over `data` using a 256-entry table.
///
/// Bytes are consumed in buffer order; the reflection is already baked into
/// the table. An empty buffer returns `crc` unchanged.
///
/// # Example
///
/// ```
/// use checksum::{ETHERNET_FCS_POLY, build_reflected_table, crc32_lut_update};
///
/// let table = build_reflected_table(ETHERNET_FCS_POLY);
/// let crc = !crc32_lut_update(b"123456789", 0xFFFF_FFFF, &table);
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub const fn crc32_lut_update(data: &[u8], mut crc: u32, table: &[u32; 256]) -> u32 {
  let mut i = 0usize;
  while i < data.len() {
    crc = table[((crc ^ data[i] as u32) & 0xFF) as usize] ^ (crc >> 8);
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Bitwise Oracle
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for Ethernet FCS)
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Policy
// ─────────────────────────────────────────────────────────────────────────────

/// A reflected CRC-32 variant: polynomial plus register policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc32Params {
  /// Generator polynomial in normal (MSB-first) form.
  pub poly: u32,
  /// Initial register value.
  pub init: u32,
  /// Value XORed into the register once, after the last byte.
  pub xorout: u32,
}

impl Crc32Params {
  /// Ethernet FCS: init `0xFFFFFFFF`, final complement.
  pub const ETHERNET_FCS: Self = Self::new(ETHERNET_FCS_POLY, !0, !0);

  #[inline]
  #[must_use]
  pub const fn new(poly: u32, init: u32, xorout: u32) -> Self {
    Self { poly, init, xorout }
  }

  /// Polynomial in reflected form, for the bitwise oracle.
  #[inline]
  #[must_use]
  pub const fn poly_reflected(&self) -> u32 {
    reflect(self.poly as u64, 32) as u32
  }
}

/// Table-driven reference CRC-32 for one polynomial policy.
///
/// Owns its lookup table; there is no process-wide table state.
///
/// # Example
///
/// ```
/// use checksum::{Crc32Params, ReferenceCrc32};
///
/// let fcs = ReferenceCrc32::new(Crc32Params::ETHERNET_FCS);
/// assert_eq!(fcs.checksum(&[]), 0x0000_0000);
/// assert_eq!(fcs.checksum(&[0x00]), 0xD202_EF8D);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceCrc32 {
  params: Crc32Params,
  table: [u32; 256],
}

impl ReferenceCrc32 {
  /// Build the lookup table for `params`.
  #[must_use]
  pub const fn new(params: Crc32Params) -> Self {
    Self { params, table: build_reflected_table(params.poly) }
  }

  /// Rebuild the lookup table from the stored polynomial.
  pub fn rebuild(&mut self) {
    self.table = build_reflected_table(self.params.poly);
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> Crc32Params {
    self.params
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; 256] {
    &self.table
  }

  /// Advance a raw register over `data`, without init or final XOR.
  #[inline]
  #[must_use]
  pub const fn update(&self, crc: u32, data: &[u8]) -> u32 {
    crc32_lut_update(data, crc, &self.table)
  }

  /// Finished CRC of `data`: `init`, table update, `xorout` once at the end.
  #[inline]
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u32 {
    crc32_lut_update(data, self.params.init, &self.table) ^ self.params.xorout
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  let fcs = ReferenceCrc32::new(Crc32Params::ETHERNET_FCS);
  assert!(fcs.checksum(CHECK_INPUT) == 0xCBF4_3926);
  assert!(crc32_bitwise(Crc32Params::ETHERNET_FCS.poly_reflected(), !0, CHECK_INPUT) ^ !0 == 0xCBF4_3926);
};
