//! Kernel dispatch: selection and caching.
//!
//! - [`Candidate`]: a kernel with a capability predicate
//! - [`Selected`]: the result of kernel selection
//! - [`select`]: choose the first available kernel from an ordered list
//! - [`Crc32Dispatcher`]: caches one selection per process
//!
//! Under `std`, capabilities are detected at runtime and the selection is cached
//! in a `OnceLock`. Without `std`, only features enabled at compile time
//! (`-C target-feature=...`) are considered, so re-running the selector is
//! branch-free after constant folding and nothing is cached.

/// Signature for CRC-32 kernels: `fn(state, data) -> state`.
///
/// `state` is the raw (pre-inverted) register; kernels never apply the final XOR.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// A candidate kernel with a capability requirement.
///
/// Candidates are ordered from best to worst.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "aarch64/crc").
  pub name: &'static str,
  /// Returns true when the running CPU can execute `func`.
  pub available: fn() -> bool,
  /// The kernel function pointer.
  pub func: F,
}

impl<F> Candidate<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, available: fn() -> bool, func: F) -> Self {
    Self { name, available, func }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Select the first available candidate, or `fallback` if none is.
#[inline]
#[must_use]
pub fn select<F: Copy>(candidates: &[Candidate<F>], fallback: Selected<F>) -> Selected<F> {
  candidates
    .iter()
    .find(|candidate| (candidate.available)())
    .map_or(fallback, |candidate| Selected::new(candidate.name, candidate.func))
}

/// Always-true predicate for portable kernels.
#[inline]
#[must_use]
pub const fn always() -> bool {
  true
}

/// Dispatcher for CRC-32 kernels.
///
/// ```ignore
/// static DISPATCH: Crc32Dispatcher = Crc32Dispatcher::new(select_crc32);
///
/// fn compute(crc: u32, data: &[u8]) -> u32 {
///   (DISPATCH.get().func)(crc, data)
/// }
/// ```
pub struct Crc32Dispatcher {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<Crc32Fn>>,
  selector: fn() -> Selected<Crc32Fn>,
}

impl Crc32Dispatcher {
  /// Create a dispatcher; `selector` runs on first access.
  #[must_use]
  pub const fn new(selector: fn() -> Selected<Crc32Fn>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<Crc32Fn> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| (self.selector)())
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Name of the selected kernel.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }
}

/// CPU capability probes used by kernel candidates.
pub mod caps {
  /// ARMv8 CRC32 extension (`crc32b/h/w/x`).
  #[cfg(target_arch = "aarch64")]
  #[inline]
  #[must_use]
  pub fn aarch64_crc() -> bool {
    #[cfg(feature = "std")]
    {
      std::arch::is_aarch64_feature_detected!("crc")
    }

    #[cfg(not(feature = "std"))]
    {
      cfg!(target_feature = "crc")
    }
  }

  /// Whether any hardware CRC-32 (IEEE) kernel exists for this target.
  #[inline]
  #[must_use]
  pub fn has_hwcrc() -> bool {
    #[cfg(target_arch = "aarch64")]
    {
      aarch64_crc()
    }

    #[cfg(not(target_arch = "aarch64"))]
    {
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn never() -> bool {
    false
  }

  fn kernel_a(crc: u32, _data: &[u8]) -> u32 {
    crc ^ 0xA
  }

  fn kernel_b(crc: u32, _data: &[u8]) -> u32 {
    crc ^ 0xB
  }

  fn select_b() -> Selected<Crc32Fn> {
    Selected::new("b", kernel_b)
  }

  #[test]
  fn test_select_first_available() {
    let candidates: [Candidate<Crc32Fn>; 2] = [
      Candidate::new("a", never, kernel_a as Crc32Fn),
      Candidate::new("b", always, kernel_b as Crc32Fn),
    ];
    let selected = select(&candidates, Selected::new("fallback", kernel_a as Crc32Fn));
    assert_eq!(selected.name, "b");
    assert_eq!((selected.func)(0, &[]), 0xB);
  }

  #[test]
  fn test_select_falls_back() {
    let candidates: [Candidate<Crc32Fn>; 1] = [Candidate::new("a", never, kernel_a as Crc32Fn)];
    let selected = select(&candidates, Selected::new("fallback", kernel_b as Crc32Fn));
    assert_eq!(selected.name, "fallback");
  }

  #[test]
  fn test_dispatcher_reports_backend() {
    static DISPATCH: Crc32Dispatcher = Crc32Dispatcher::new(select_b);
    assert_eq!(DISPATCH.backend_name(), "b");
    assert_eq!((DISPATCH.get().func)(1, b"x"), 1 ^ 0xB);
  }
}
