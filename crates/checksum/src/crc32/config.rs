//! CRC-32 runtime configuration (overrides + thresholds).
//!
//! This module centralizes selection knobs for the Ethernet FCS kernels:
//! - the length below which the bytewise kernel is used
//! - optional forced backend selection
//!
//! Overrides are read once from the environment (under `std`):
//!
//! | Variable | Values |
//! |----------|--------|
//! | `FCSCHECK_CRC32_FORCE` | `auto`, `bytewise`, `portable`, `hwcrc` |
//! | `FCSCHECK_CRC32_BYTEWISE_MAX` | length in bytes |
//!
//! Forced modes are always clamped to detected CPU capabilities.

use core::{fmt, str::FromStr};

use crate::dispatch::caps;

/// Default length below which `Auto` uses the single-table kernel.
pub const DEFAULT_BYTEWISE_MAX: usize = 16;

/// Forced backend selection for CRC-32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc32Force {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the byte-at-a-time table kernel.
  Bytewise,
  /// Force the portable slice-by-16 kernel.
  Portable,
  /// Force hardware CRC instructions (if available).
  ///
  /// - aarch64: ARMv8 CRC extension
  Hwcrc,
}

impl Crc32Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bytewise => "bytewise",
      Self::Portable => "portable",
      Self::Hwcrc => "hwcrc",
    }
  }
}

impl fmt::Display for Crc32Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unrecognized [`Crc32Force`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseForceError;

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC-32 backend (expected auto, bytewise, portable or hwcrc)")
  }
}

impl core::error::Error for ParseForceError {}

impl FromStr for Crc32Force {
  type Err = ParseForceError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") {
      return Ok(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("slice16")
    {
      return Ok(Self::Portable);
    }
    if value.eq_ignore_ascii_case("hwcrc") || value.eq_ignore_ascii_case("crc") {
      return Ok(Self::Hwcrc);
    }
    Err(ParseForceError)
  }
}

/// CRC-32 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Tunables {
  /// Buffers shorter than this use the bytewise kernel under `Auto`.
  pub bytewise_max: usize,
}

impl Default for Crc32Tunables {
  fn default() -> Self {
    Self { bytewise_max: DEFAULT_BYTEWISE_MAX }
  }
}

/// Full CRC-32 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Crc32Force,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: Crc32Force,
  pub tunables: Crc32Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Crc32Force,
  bytewise_max: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() { None } else { Some(value) }
  }

  Overrides {
    force: var("FCSCHECK_CRC32_FORCE").and_then(|v| v.parse().ok()).unwrap_or_default(),
    bytewise_max: var("FCSCHECK_CRC32_BYTEWISE_MAX").and_then(|v| v.trim().parse().ok()),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Downgrade a forced mode the CPU cannot honour.
#[inline]
#[must_use]
pub fn clamp_force_to_caps(requested: Crc32Force, has_hwcrc: bool) -> Crc32Force {
  match requested {
    Crc32Force::Hwcrc if !has_hwcrc => Crc32Force::Auto,
    other => other,
  }
}

/// Get the effective CRC-32 configuration for the current platform.
#[inline]
#[must_use]
pub fn get() -> Crc32Config {
  let ov = overrides();
  let requested_force = ov.force;
  let effective_force = clamp_force_to_caps(requested_force, caps::has_hwcrc());

  Crc32Config {
    requested_force,
    effective_force,
    tunables: Crc32Tunables { bytewise_max: ov.bytewise_max.unwrap_or(DEFAULT_BYTEWISE_MAX) },
  }
}
