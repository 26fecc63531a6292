//! Suite configuration.
//!
//! Defaults reproduce the canonical run. Environment variables override the
//! defaults and command-line flags override the environment:
//!
//! - `FCSCHECK_SEED`: generator seed, decimal or `0x` hex.
//! - `FCSCHECK_MAX_LEN`: longest buffer length to test (default 2047).
//! - `FCSCHECK_ALL_KERNELS`: `1`/`true` to also test every kernel directly.

use crate::{
  driver::{DEFAULT_LENGTH_BOUND, MAX_LENGTH_BOUND},
  error::ConfigError,
  rng::DEFAULT_SEED,
};

pub const ENV_SEED: &str = "FCSCHECK_SEED";
pub const ENV_MAX_LEN: &str = "FCSCHECK_MAX_LEN";
pub const ENV_ALL_KERNELS: &str = "FCSCHECK_ALL_KERNELS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
  pub seed: u64,
  /// Buffer capacity. Lengths `1..length_bound` are tested.
  pub length_bound: usize,
  pub all_kernels: bool,
}

impl Default for SuiteConfig {
  fn default() -> Self {
    Self { seed: DEFAULT_SEED, length_bound: DEFAULT_LENGTH_BOUND, all_kernels: false }
  }
}

impl SuiteConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Defaults overridden by whatever `lookup` returns for each variable.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    if let Some(value) = lookup(ENV_SEED) {
      config.seed = parse_seed(ENV_SEED, &value)?;
    }
    if let Some(value) = lookup(ENV_MAX_LEN) {
      config = config.with_max_len(parse_max_len(ENV_MAX_LEN, &value)?)?;
    }
    if let Some(value) = lookup(ENV_ALL_KERNELS) {
      config.all_kernels = parse_flag(ENV_ALL_KERNELS, &value)?;
    }
    Ok(config)
  }

  /// Test lengths `1..=max_len`.
  pub fn with_max_len(self, max_len: usize) -> Result<Self, ConfigError> {
    let length_bound = max_len.checked_add(1).ok_or(ConfigError::LengthBound(usize::MAX))?;
    Self { length_bound, ..self }.validated()
  }

  #[must_use]
  pub const fn max_len(&self) -> usize {
    self.length_bound.saturating_sub(1)
  }

  pub fn validated(self) -> Result<Self, ConfigError> {
    if !(2..=MAX_LENGTH_BOUND).contains(&self.length_bound) {
      return Err(ConfigError::LengthBound(self.length_bound));
    }
    Ok(self)
  }
}

pub fn parse_seed(key: &'static str, value: &str) -> Result<u64, ConfigError> {
  let value = value.trim();
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
    None => value.replace('_', "").parse(),
  };
  parsed.map_err(|_| invalid(key, value))
}

pub fn parse_max_len(key: &'static str, value: &str) -> Result<usize, ConfigError> {
  value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(invalid(key, value)),
  }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
  ConfigError::InvalidValue { key, value: value.to_owned() }
}
