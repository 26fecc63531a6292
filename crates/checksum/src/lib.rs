//! Reflected CRC-32 (Ethernet FCS): table-driven reference engine and
//! accelerated kernels.
//!
//! The crate has two halves that are meant to be checked against each other:
//!
//! - **Reference**: [`reflect`], [`build_reflected_table`] and
//!   [`crc32_lut_update`], bundled per polynomial policy in [`ReferenceCrc32`].
//!   Works for any 32-bit polynomial.
//! - **Production**: [`Crc32`], which dispatches to the fastest kernel for the
//!   running CPU (portable bytewise / slice-by-16, aarch64 CRC extension).
//!
//! | Parameter | Ethernet FCS |
//! |-----------|--------------|
//! | Polynomial | 0x04C11DB7 (normal), 0xEDB88320 (reflected) |
//! | Initial value | 0xFFFFFFFF |
//! | Final XOR | 0xFFFFFFFF |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32, Crc32Params, ReferenceCrc32};
//!
//! let data = b"123456789";
//! let reference = ReferenceCrc32::new(Crc32Params::ETHERNET_FCS);
//! assert_eq!(reference.checksum(data), 0xCBF4_3926);
//! assert_eq!(Crc32::checksum(data), reference.checksum(data));
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! kernel selection then relies on compile-time target features only.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod common;

pub mod crc32;
pub mod dispatch;

pub use common::{
  reference::{Crc32Params, ReferenceCrc32, crc32_bitwise, crc32_lut_update},
  reflect::reflect,
  tables::{ETHERNET_FCS_POLY, ETHERNET_FCS_POLY_REFLECTED, build_reflected_table, generate_crc32_tables_16},
};
pub use crc32::{Crc32, config::Crc32Force};
// Re-export traits for convenience
pub use traits::Checksum;
