//! Test cases: a title, a one-time setup hook, a reference and an
//! implementation under test.

use checksum::{Crc32Params, ReferenceCrc32};

use crate::{engine::Crc32Engine, error::ConfigError};

/// One differential comparison.
///
/// `setup` runs once before any length is tested. `reference` and
/// `under_test` each return a finished CRC for the given bytes.
pub trait PolynomialCase {
  fn title(&self) -> &str;

  fn setup(&mut self);

  fn reference(&self, data: &[u8]) -> u32;

  fn under_test(&self, data: &[u8]) -> u32;
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine-backed case
// ─────────────────────────────────────────────────────────────────────────────

/// Compares a [`Crc32Engine`] against the table-driven reference for the
/// polynomial policy the engine claims.
pub struct CrcCase<E> {
  title: String,
  params: Crc32Params,
  reference: Option<ReferenceCrc32>,
  engine: E,
}

impl<E: Crc32Engine> CrcCase<E> {
  /// Case titled after the engine's polynomial and name.
  pub fn new(engine: E) -> Self {
    let params = engine.params();
    let title = if params == Crc32Params::ETHERNET_FCS {
      format!("CRC32 ETHERNET FCS 0x{:08x} [{}]", params.poly, engine.name())
    } else {
      format!("CRC32 0x{:08x} [{}]", params.poly, engine.name())
    };
    Self::with_title(title, engine)
  }

  pub fn with_title(title: impl Into<String>, engine: E) -> Self {
    Self { title: title.into(), params: engine.params(), reference: None, engine }
  }
}

impl<E: Crc32Engine> PolynomialCase for CrcCase<E> {
  fn title(&self) -> &str {
    &self.title
  }

  fn setup(&mut self) {
    match &mut self.reference {
      Some(reference) => reference.rebuild(),
      None => self.reference = Some(ReferenceCrc32::new(self.params)),
    }
  }

  fn reference(&self, data: &[u8]) -> u32 {
    match &self.reference {
      Some(reference) => reference.checksum(data),
      None => ReferenceCrc32::new(self.params).checksum(data),
    }
  }

  fn under_test(&self, data: &[u8]) -> u32 {
    self.engine.crc32(data, None)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Closure-backed case
// ─────────────────────────────────────────────────────────────────────────────

type SetupFn<'a> = Box<dyn FnMut() + 'a>;
type CrcFn<'a> = Box<dyn Fn(&[u8]) -> u32 + 'a>;

/// Case assembled from closures. Built with [`FnCase::builder`].
pub struct FnCase<'a> {
  title: String,
  setup: SetupFn<'a>,
  reference: CrcFn<'a>,
  tested: CrcFn<'a>,
}

impl<'a> FnCase<'a> {
  #[must_use]
  pub fn builder() -> FnCaseBuilder<'a> {
    FnCaseBuilder::default()
  }
}

impl PolynomialCase for FnCase<'_> {
  fn title(&self) -> &str {
    &self.title
  }

  fn setup(&mut self) {
    (self.setup)();
  }

  fn reference(&self, data: &[u8]) -> u32 {
    (self.reference)(data)
  }

  fn under_test(&self, data: &[u8]) -> u32 {
    (self.tested)(data)
  }
}

/// Every component is required; [`build`](Self::build) reports the first missing one.
#[derive(Default)]
pub struct FnCaseBuilder<'a> {
  title: Option<String>,
  setup: Option<SetupFn<'a>>,
  reference: Option<CrcFn<'a>>,
  tested: Option<CrcFn<'a>>,
}

impl<'a> FnCaseBuilder<'a> {
  #[must_use]
  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  #[must_use]
  pub fn setup(mut self, f: impl FnMut() + 'a) -> Self {
    self.setup = Some(Box::new(f));
    self
  }

  #[must_use]
  pub fn reference(mut self, f: impl Fn(&[u8]) -> u32 + 'a) -> Self {
    self.reference = Some(Box::new(f));
    self
  }

  #[must_use]
  pub fn tested(mut self, f: impl Fn(&[u8]) -> u32 + 'a) -> Self {
    self.tested = Some(Box::new(f));
    self
  }

  pub fn build(self) -> Result<FnCase<'a>, ConfigError> {
    let title = self.title.ok_or(ConfigError::MissingTitle)?;
    let Some(setup) = self.setup else {
      return Err(ConfigError::MissingSetup { title });
    };
    let Some(reference) = self.reference else {
      return Err(ConfigError::MissingReference { title });
    };
    let Some(tested) = self.tested else {
      return Err(ConfigError::MissingTested { title });
    };
    Ok(FnCase { title, setup, reference, tested })
  }
}
