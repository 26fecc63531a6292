//! Per-case differential driver.
//!
//! For every length `n` in `1..buffer.len()` the driver fills the first `n`
//! bytes of the shared buffer from the generator, asks both sides for a CRC
//! and compares. The first mismatch ends the case.

use std::io::Write;

use tracing::{error, info, trace, warn};

use crate::{case::PolynomialCase, error::CaseError, hexdump::hexdump, rng::TestRng};

/// Buffer capacity; the longest tested length is one less.
pub const DEFAULT_LENGTH_BOUND: usize = 2048;

/// Largest accepted buffer capacity (16 MiB).
pub const MAX_LENGTH_BOUND: usize = 1 << 24;

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
  pub title: String,
  /// Lengths compared, including a failing one.
  pub lengths_tested: usize,
  pub result: Result<(), CaseError>,
}

impl CaseOutcome {
  #[must_use]
  pub fn passed(&self) -> bool {
    self.result.is_ok()
  }

  /// Error contribution of this case: 0 or 1.
  #[must_use]
  pub fn errors(&self) -> usize {
    usize::from(self.result.is_err())
  }
}

/// Run one case over every length below `buffer.len()`.
///
/// Diagnostics go to `out`; a failed write is logged and otherwise ignored.
pub fn test_crc_polynomial<C, W>(case: &mut C, rng: &mut TestRng, buffer: &mut [u8], out: &mut W) -> CaseOutcome
where
  C: PolynomialCase + ?Sized,
  W: Write + ?Sized,
{
  let title = case.title().to_owned();
  info!(case = %title, max_len = buffer.len().saturating_sub(1), "starting case");
  emit(out, format_args!("Starting CRC Test: {title}\n"));

  case.setup();

  let mut lengths_tested = 0;
  for len in 1..buffer.len() {
    let data = &mut buffer[..len];
    rng.fill(data);

    let expected = case.reference(data);
    let received = case.under_test(data);
    lengths_tested += 1;

    if received != expected {
      let err = CaseError::Mismatch { len, received, expected };
      error!(case = %title, len, received = format_args!("{received:#010x}"), expected = format_args!("{expected:#010x}"), "crc mismatch");
      emit(out, format_args!("! {err}\n"));
      if let Err(err) = hexdump(out, "! ", data) {
        warn!(%err, "failed to write hexdump");
      }
      return CaseOutcome { title, lengths_tested, result: Err(err) };
    }
    trace!(len, crc = format_args!("{received:#010x}"), "length ok");
  }

  info!(case = %title, lengths_tested, "case passed");
  CaseOutcome { title, lengths_tested, result: Ok(()) }
}

pub(crate) fn emit<W: Write + ?Sized>(out: &mut W, args: std::fmt::Arguments<'_>) {
  if let Err(err) = out.write_fmt(args) {
    warn!(%err, "failed to write report");
  }
}
