//! CRC-32 (Ethernet FCS) with runtime kernel selection.
//!
//! This module provides:
//! - [`Crc32`] - streaming Ethernet FCS checksum
//! - [`config`] - forced backend / threshold overrides
//! - [`kernel_test`] - every kernel available on this CPU, for differential testing
//!
//! # Hardware Acceleration
//!
//! - aarch64: CRC32 extension
//! - everywhere else: portable slice-by-16

pub mod config;
mod portable;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(test)]
mod proptests;

use traits::Checksum;

use self::config::Crc32Force;
use crate::dispatch::{Candidate, Crc32Dispatcher, Crc32Fn, Selected, select};

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Tables
// ─────────────────────────────────────────────────────────────────────────────

/// Portable kernel tables (pre-computed at compile time).
mod kernel_tables {
  use crate::common::tables::{ETHERNET_FCS_POLY, build_reflected_table, generate_crc32_tables_16};

  pub static FCS_TABLES_16: [[u32; 256]; 16] = generate_crc32_tables_16(&build_reflected_table(ETHERNET_FCS_POLY));
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher Selection
// ─────────────────────────────────────────────────────────────────────────────

const BYTEWISE: Selected<Crc32Fn> = Selected::new(portable::BYTEWISE_KERNEL_NAME, portable::crc32_fcs_bytewise as Crc32Fn);
const SLICE16: Selected<Crc32Fn> = Selected::new(portable::SLICE16_KERNEL_NAME, portable::crc32_fcs_slice16 as Crc32Fn);

/// Hardware candidates, best first.
#[cfg(target_arch = "aarch64")]
static HW_CANDIDATES: [Candidate<Crc32Fn>; 1] = [Candidate::new(
  aarch64::HWCRC_KERNEL_NAME,
  crate::dispatch::caps::aarch64_crc,
  aarch64::crc32_fcs_armv8_safe as Crc32Fn,
)];

#[cfg(not(target_arch = "aarch64"))]
static HW_CANDIDATES: [Candidate<Crc32Fn>; 0] = [];

/// Select the bulk CRC-32 kernel for the current platform.
fn select_crc32() -> Selected<Crc32Fn> {
  match config::get().effective_force {
    Crc32Force::Bytewise => BYTEWISE,
    Crc32Force::Portable => SLICE16,
    Crc32Force::Auto | Crc32Force::Hwcrc => select(&HW_CANDIDATES, SLICE16),
  }
}

/// Static dispatcher for CRC-32.
static CRC32_DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select_crc32);

/// Kernel used for a buffer of `len` bytes.
#[inline]
fn kernel_for_len(len: usize) -> Selected<Crc32Fn> {
  let cfg = config::get();
  if cfg.effective_force == Crc32Force::Auto && len < cfg.tunables.bytewise_max {
    BYTEWISE
  } else {
    CRC32_DISPATCHER.get()
  }
}

/// Name of the bulk kernel selected for this process.
#[must_use]
pub fn selected_backend() -> &'static str {
  CRC32_DISPATCHER.backend_name()
}

/// Name of the kernel that handles a single update of `len` bytes.
#[must_use]
pub fn backend_for_len(len: usize) -> &'static str {
  kernel_for_len(len).name
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 (Ethernet FCS)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 checksum (IEEE 802.3 Ethernet FCS / ISO-HDLC).
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub struct Crc32 {
  initial: u32,
  state: u32,
}

impl Crc32 {
  /// Create a hasher to resume from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { initial: crc ^ !0, state: crc ^ !0 }
  }

  /// Get the name of the currently selected bulk backend.
  #[must_use]
  pub fn backend_name() -> &'static str {
    selected_backend()
  }
}

impl Default for Crc32 {
  fn default() -> Self {
    <Self as Checksum>::new()
  }
}

impl Checksum for Crc32 {
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { initial: !0, state: !0 }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self { initial, state: initial }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = (kernel_for_len(data.len()).func)(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = self.initial;
  }
}
