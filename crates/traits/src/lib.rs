//! Core traits for the fcscheck workspace.
//!
//! This crate provides the streaming interface every CRC engine in the
//! workspace conforms to, whether it is the table-driven reference or an
//! accelerated kernel. It is `no_std` compatible and has zero dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;

pub use checksum::Checksum;
