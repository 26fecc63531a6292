//! Harness errors.

/// A case or suite was configured incompletely or with invalid values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  #[error("case has no title")]
  MissingTitle,

  #[error("case {title:?} has no setup hook")]
  MissingSetup { title: String },

  #[error("case {title:?} has no reference implementation")]
  MissingReference { title: String },

  #[error("case {title:?} has no implementation under test")]
  MissingTested { title: String },

  #[error("length bound must be in 2..={max}, got {0}", max = crate::driver::MAX_LENGTH_BOUND)]
  LengthBound(usize),

  #[error("invalid value {value:?} for {key}")]
  InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
  /// Title of the case this error belongs to, when known.
  #[must_use]
  pub fn title(&self) -> Option<&str> {
    match self {
      Self::MissingSetup { title } | Self::MissingReference { title } | Self::MissingTested { title } => Some(title),
      _ => None,
    }
  }
}

/// Why a single case failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
  #[error("NULL parameter passed: {0}")]
  Config(#[from] ConfigError),

  #[error("CRC mismatch for buffer size {len}, received = {received:#010x}, expected = {expected:#010x}")]
  Mismatch { len: usize, received: u32, expected: u32 },
}
