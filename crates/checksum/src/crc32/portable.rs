//! Portable CRC-32 kernels (bytewise and slice-by-16).
//!
//! Polynomial-specific wrappers around the generic table kernels in
//! [`crate::common::portable`].

use super::kernel_tables;
use crate::common::portable;

/// Canonical kernel name for the byte-at-a-time table lookup kernel.
pub(crate) const BYTEWISE_KERNEL_NAME: &str = "portable/bytewise";

/// Canonical kernel name for the slice-by-16 kernel.
pub(crate) const SLICE16_KERNEL_NAME: &str = "portable/slice16";

/// Ethernet FCS byte-at-a-time lookup computation.
///
/// This is typically faster than slice-by-16 for tiny buffers because it uses a
/// single 256-entry table.
#[inline]
pub fn crc32_fcs_bytewise(crc: u32, data: &[u8]) -> u32 {
  portable::bytewise_32(crc, data, &kernel_tables::FCS_TABLES_16[0])
}

/// Ethernet FCS slice-by-16 computation.
#[inline]
pub fn crc32_fcs_slice16(crc: u32, data: &[u8]) -> u32 {
  portable::slice16_32(crc, data, &kernel_tables::FCS_TABLES_16)
}
