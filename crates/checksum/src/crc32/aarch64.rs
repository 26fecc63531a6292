//! aarch64 CRC-32 kernel using the ARMv8 CRC32 extension.
//!
//! The `crc32{b,h,w,x}` instructions implement the reflected 0x04C11DB7
//! polynomial directly, with no final inversion; they advance the same raw
//! register as the table kernels.
//!
//! # Safety
//!
//! Uses `unsafe` for intrinsics. Callers must ensure the CRC extension is
//! available before executing the accelerated path (the dispatcher does this).
#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32b, __crc32d, __crc32h, __crc32w};

/// Kernel name reported by dispatch and diagnostics.
pub(crate) const HWCRC_KERNEL_NAME: &str = "aarch64/crc";

/// CRC-32 (Ethernet FCS) update using ARMv8 CRC32 instructions.
///
/// `crc` is the current state (pre-inverted).
///
/// # Safety
///
/// Caller must ensure the CRC extension is available.
#[inline]
#[target_feature(enable = "crc")]
#[allow(unused_unsafe)]
unsafe fn crc32_fcs_armv8(crc: u32, data: &[u8]) -> u32 {
  let mut state = crc;

  let (chunks8, tail8) = data.as_chunks::<8>();
  for chunk in chunks8 {
    // SAFETY: target_feature ensures the CRC extension is available.
    state = unsafe { __crc32d(state, u64::from_le_bytes(*chunk)) };
  }

  let (chunks4, tail4) = tail8.as_chunks::<4>();
  for chunk in chunks4 {
    // SAFETY: as above.
    state = unsafe { __crc32w(state, u32::from_le_bytes(*chunk)) };
  }

  let (chunks2, tail2) = tail4.as_chunks::<2>();
  for chunk in chunks2 {
    // SAFETY: as above.
    state = unsafe { __crc32h(state, u16::from_le_bytes(*chunk)) };
  }

  for &b in tail2 {
    // SAFETY: as above.
    state = unsafe { __crc32b(state, b) };
  }

  state
}

/// Safe wrapper for the ARMv8 CRC kernel.
#[inline]
pub fn crc32_fcs_armv8_safe(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: Dispatcher verifies the CRC extension before selecting this kernel.
  unsafe { crc32_fcs_armv8(crc, data) }
}
