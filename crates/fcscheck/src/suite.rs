//! Suite runner.
//!
//! A suite owns an ordered list of cases. One generator and one buffer are
//! shared across the whole run, so the byte stream a case sees depends on
//! the cases before it.

use std::io::Write;

use tracing::{error, info};

use crate::{
  case::{FnCaseBuilder, PolynomialCase},
  config::SuiteConfig,
  driver::{CaseOutcome, emit, test_crc_polynomial},
  error::{CaseError, ConfigError},
  rng::TestRng,
};

enum Entry<'a> {
  Case(Box<dyn PolynomialCase + 'a>),
  Invalid(ConfigError),
}

pub struct Suite<'a> {
  config: SuiteConfig,
  entries: Vec<Entry<'a>>,
}

impl<'a> Suite<'a> {
  #[must_use]
  pub fn new(config: SuiteConfig) -> Self {
    Self { config, entries: Vec::new() }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn register(&mut self, case: impl PolynomialCase + 'a) -> &mut Self {
    self.entries.push(Entry::Case(Box::new(case)));
    self
  }

  /// Register a closure-backed case. An incomplete builder is kept and
  /// reported as one error when the suite runs.
  pub fn register_fn(&mut self, builder: FnCaseBuilder<'a>) -> &mut Self {
    self.entries.push(match builder.build() {
      Ok(case) => Entry::Case(Box::new(case)),
      Err(err) => Entry::Invalid(err),
    });
    self
  }

  /// Run every case in registration order and print the verdict line.
  ///
  /// An out-of-range configuration runs no case and counts as one error.
  pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> SuiteReport {
    if let Err(err) = self.config.validated() {
      error!(%err, "invalid suite configuration");
      emit(out, format_args!("crc_test: invalid suite configuration! ({err})\n"));
      let outcome = CaseOutcome { title: String::new(), lengths_tested: 0, result: Err(CaseError::Config(err)) };
      return finish(vec![outcome], out);
    }

    let mut rng = TestRng::new(self.config.seed);
    let mut buffer = vec![0u8; self.config.length_bound];
    info!(seed = format_args!("{:#x}", self.config.seed), max_len = self.config.max_len(), cases = self.entries.len(), "running suite");

    let mut outcomes = Vec::with_capacity(self.entries.len());
    for entry in &mut self.entries {
      let outcome = match entry {
        Entry::Case(case) => test_crc_polynomial(case.as_mut(), &mut rng, &mut buffer, out),
        Entry::Invalid(err) => {
          error!(%err, "invalid case configuration");
          emit(out, format_args!("crc_test: NULL parameter passed! ({err})\n"));
          let title = err.title().unwrap_or_default().to_owned();
          CaseOutcome { title, lengths_tested: 0, result: Err(CaseError::Config(err.clone())) }
        }
      };
      outcomes.push(outcome);
    }

    finish(outcomes, out)
  }
}

fn finish<W: Write + ?Sized>(outcomes: Vec<CaseOutcome>, out: &mut W) -> SuiteReport {
  let report = SuiteReport { outcomes };
  let verdict = if report.passed() { "...Pass" } else { "...Fail" };
  info!(errors = report.errors(), "{verdict}");
  emit(out, format_args!("{verdict}\n"));
  report
}

/// Outcomes of a suite run, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
  pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
  #[must_use]
  pub fn errors(&self) -> usize {
    self.outcomes.iter().map(CaseOutcome::errors).sum()
  }

  #[must_use]
  pub fn passed(&self) -> bool {
    self.errors() == 0
  }
}
