//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Bit reflection
//! - Const-fn reflected lookup table generation
//! - The table-driven reference engine and a bitwise oracle
//! - Generic slice-by-N table kernels

pub mod portable;
pub mod reference;
pub mod reflect;
pub mod tables;
