//! Differential verification of CRC-32 implementations.
//!
//! Every byte length from 1 up to a bound is fed pseudo-random data, and the
//! CRC produced by an implementation under test is compared against a plain
//! table-driven reference. The first disagreement stops the case and prints
//! the offending buffer.
//!
//! ```no_run
//! use fcscheck::{crc_test, engine::DispatchedEngine};
//!
//! assert_eq!(crc_test(&DispatchedEngine), 0);
//! ```

pub mod case;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod hexdump;
pub mod rng;
pub mod suite;

use std::io::{self, Write};

pub use case::{CrcCase, FnCase, FnCaseBuilder, PolynomialCase};
pub use config::SuiteConfig;
pub use driver::{CaseOutcome, DEFAULT_LENGTH_BOUND, test_crc_polynomial};
pub use engine::{Crc32Engine, DispatchedEngine, FnEngine, KernelEngine};
pub use error::{CaseError, ConfigError};
pub use rng::{DEFAULT_SEED, TestRng};
pub use suite::{Suite, SuiteReport};

/// Run the canonical Ethernet FCS suite against `engine`, reporting to
/// stdout. Returns the number of failed cases.
pub fn crc_test(engine: &dyn Crc32Engine) -> usize {
  crc_test_with(engine, SuiteConfig::default(), &mut io::stdout().lock())
}

/// [`crc_test`] with explicit configuration and output sink.
pub fn crc_test_with<W: Write + ?Sized>(engine: &dyn Crc32Engine, config: SuiteConfig, out: &mut W) -> usize {
  let mut suite = Suite::new(config);
  suite.register(CrcCase::new(engine));
  suite.run(out).errors()
}
