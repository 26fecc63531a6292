//! Implementations placed under test.
//!
//! The harness only ever talks to a CRC implementation through
//! [`Crc32Engine`]: hand it bytes, get a finished CRC back. The crate's own
//! dispatched [`Crc32`] and each individual kernel are provided as engines;
//! anything else (an FFI binding, a vendor library) plugs in the same way.

use std::sync::OnceLock;

use checksum::{Checksum, Crc32, Crc32Params, crc32::kernel_test::{self, Kernel}};

/// A CRC-32 implementation under test.
pub trait Crc32Engine {
  /// Short label used in banners and logs.
  fn name(&self) -> &str;

  /// Polynomial policy this engine claims to implement.
  fn params(&self) -> Crc32Params {
    Crc32Params::ETHERNET_FCS
  }

  /// Finished CRC of `data`.
  ///
  /// `aux` is a previously finished CRC to continue from. The differential
  /// driver always passes `None`; engines without chaining support may ignore it.
  fn crc32(&self, data: &[u8], aux: Option<u32>) -> u32;
}

impl<E: Crc32Engine + ?Sized> Crc32Engine for &E {
  fn name(&self) -> &str {
    (**self).name()
  }

  fn params(&self) -> Crc32Params {
    (**self).params()
  }

  fn crc32(&self, data: &[u8], aux: Option<u32>) -> u32 {
    (**self).crc32(data, aux)
  }
}

impl<E: Crc32Engine + ?Sized> Crc32Engine for Box<E> {
  fn name(&self) -> &str {
    (**self).name()
  }

  fn params(&self) -> Crc32Params {
    (**self).params()
  }

  fn crc32(&self, data: &[u8], aux: Option<u32>) -> u32 {
    (**self).crc32(data, aux)
  }
}

/// The runtime-dispatched [`Crc32`].
///
/// Named `dispatch (<bulk kernel>)`; short updates may still run the bytewise kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchedEngine;

impl Crc32Engine for DispatchedEngine {
  fn name(&self) -> &str {
    static NAME: OnceLock<String> = OnceLock::new();
    NAME.get_or_init(|| format!("dispatch ({})", Crc32::backend_name()))
  }

  fn crc32(&self, data: &[u8], aux: Option<u32>) -> u32 {
    match aux {
      None => Crc32::checksum(data),
      Some(previous) => {
        let mut hasher = Crc32::resume(previous);
        hasher.update(data);
        hasher.finalize()
      }
    }
  }
}

/// One specific kernel, bypassing dispatch.
#[derive(Debug, Clone, Copy)]
pub struct KernelEngine {
  kernel: Kernel,
}

impl KernelEngine {
  #[must_use]
  pub const fn new(kernel: Kernel) -> Self {
    Self { kernel }
  }
}

impl Crc32Engine for KernelEngine {
  fn name(&self) -> &str {
    self.kernel.name
  }

  fn crc32(&self, data: &[u8], aux: Option<u32>) -> u32 {
    let state = aux.map_or(!0, |previous| previous ^ !0);
    (self.kernel.func)(state, data) ^ !0
  }
}

/// One engine per kernel the running CPU supports.
#[must_use]
pub fn kernel_engines() -> Vec<KernelEngine> {
  kernel_test::available_kernels().into_iter().map(KernelEngine::new).collect()
}

/// Engine backed by a closure.
pub struct FnEngine<F> {
  name: String,
  params: Crc32Params,
  func: F,
}

impl<F: Fn(&[u8]) -> u32> FnEngine<F> {
  pub fn new(name: impl Into<String>, func: F) -> Self {
    Self { name: name.into(), params: Crc32Params::ETHERNET_FCS, func }
  }

  /// Claim a different polynomial policy.
  #[must_use]
  pub fn with_params(mut self, params: Crc32Params) -> Self {
    self.params = params;
    self
  }
}

impl<F: Fn(&[u8]) -> u32> Crc32Engine for FnEngine<F> {
  fn name(&self) -> &str {
    &self.name
  }

  fn params(&self) -> Crc32Params {
    self.params
  }

  fn crc32(&self, data: &[u8], _aux: Option<u32>) -> u32 {
    (self.func)(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dispatched_check_value() {
    assert_eq!(DispatchedEngine.crc32(b"123456789", None), 0xCBF4_3926);
  }

  #[test]
  fn dispatched_name_marks_dispatch() {
    assert_eq!(DispatchedEngine.name(), format!("dispatch ({})", Crc32::backend_name()));
  }

  #[test]
  fn dispatched_continues_from_aux() {
    let first = DispatchedEngine.crc32(b"1234", None);
    assert_eq!(DispatchedEngine.crc32(b"56789", Some(first)), 0xCBF4_3926);
  }

  #[test]
  fn kernel_engines_continue_from_aux() {
    for engine in kernel_engines() {
      let first = engine.crc32(b"12345", None);
      assert_eq!(engine.crc32(b"6789", Some(first)), 0xCBF4_3926, "{}", engine.name());
    }
  }

  #[test]
  fn fn_engine_reports_name_and_params() {
    let params = Crc32Params::new(0x1EDC_6F41, !0, !0);
    let engine = FnEngine::new("const", |_: &[u8]| 7).with_params(params);
    assert_eq!(engine.name(), "const");
    assert_eq!(engine.params(), params);
    assert_eq!(engine.crc32(b"anything", None), 7);
  }
}
