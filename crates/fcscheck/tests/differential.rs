//! End-to-end runs of the differential suite.

use std::{
  cell::{Cell, RefCell},
  collections::hash_map::DefaultHasher,
  hash::{Hash, Hasher},
  rc::Rc,
};

use checksum::{Checksum, Crc32, Crc32Params, build_reflected_table, crc32_lut_update};
use fcscheck::{
  CaseError, ConfigError, CrcCase, Crc32Engine, DispatchedEngine, FnCase, FnEngine, Suite, SuiteConfig, crc_test, crc_test_with,
  engine::kernel_engines,
};
use proptest::prelude::*;

fn run_to_string(engine: &dyn Crc32Engine, config: SuiteConfig) -> (usize, String) {
  let mut out = Vec::new();
  let errors = crc_test_with(engine, config, &mut out);
  (errors, String::from_utf8(out).unwrap())
}

#[test]
fn dispatched_engine_passes_full_sweep() {
  let (errors, text) = run_to_string(&DispatchedEngine, SuiteConfig::default());
  assert_eq!(errors, 0, "{text}");
  assert!(text.starts_with("Starting CRC Test: CRC32 ETHERNET FCS 0x04c11db7 [dispatch ("));
  assert!(text.ends_with("...Pass\n"));
}

#[test]
fn every_kernel_passes_full_sweep() {
  let kernels = kernel_engines();
  assert!(!kernels.is_empty());

  let mut suite = Suite::new(SuiteConfig::default());
  for engine in &kernels {
    suite.register(CrcCase::new(engine));
  }
  let mut out = Vec::new();
  let report = suite.run(&mut out);
  assert!(report.passed(), "{}", String::from_utf8_lossy(&out));
  assert!(report.outcomes.iter().all(|o| o.lengths_tested == 2047));
}

#[test]
fn public_entry_point_reports_zero() {
  assert_eq!(crc_test(&DispatchedEngine), 0);
}

#[test]
fn faulty_engine_fails_fast_at_first_bad_length() {
  let longest = Cell::new(0usize);
  let engine = FnEngine::new("off-by-one at 37", |data: &[u8]| {
    longest.set(longest.get().max(data.len()));
    let crc = Crc32::checksum(data);
    if data.len() == 37 { crc ^ 1 } else { crc }
  });

  let (errors, text) = run_to_string(&engine, SuiteConfig::default());
  assert_eq!(errors, 1);
  assert_eq!(longest.get(), 37, "lengths past the first mismatch must not be tested");
  assert!(text.contains("! CRC mismatch for buffer size 37, received = 0x"));
  assert_eq!(text.lines().filter(|l| l.starts_with("! 000000")).count(), 3);
  assert!(text.ends_with("...Fail\n"));
}

#[test]
fn missing_final_complement_is_caught_at_length_one() {
  let engine = FnEngine::new("no xorout", |data: &[u8]| !Crc32::checksum(data));
  let (errors, text) = run_to_string(&engine, SuiteConfig::default());
  assert_eq!(errors, 1);
  assert!(text.contains("buffer size 1,"));
}

#[test]
fn too_small_length_bound_is_a_failure_not_a_pass() {
  for length_bound in [0, 1] {
    let calls = Cell::new(0);
    let engine = FnEngine::new("count", |d: &[u8]| {
      calls.set(calls.get() + 1);
      Crc32::checksum(d)
    });
    let (errors, text) = run_to_string(&engine, SuiteConfig { length_bound, ..SuiteConfig::default() });
    assert_eq!(errors, 1, "bound {length_bound}");
    assert_eq!(calls.get(), 0);
    assert!(text.starts_with("crc_test: invalid suite configuration!"), "{text}");
    assert!(!text.contains("Starting CRC Test"));
    assert!(text.ends_with("...Fail\n"));
  }
}

#[test]
fn huge_length_bound_is_rejected_without_allocating() {
  let mut suite = Suite::new(SuiteConfig { length_bound: usize::MAX, ..SuiteConfig::default() });
  suite.register(CrcCase::new(DispatchedEngine));
  let mut out = Vec::new();
  let report = suite.run(&mut out);
  assert_eq!(report.errors(), 1);
  assert_eq!(report.outcomes[0].result, Err(CaseError::Config(ConfigError::LengthBound(usize::MAX))));

  let (errors, text) = run_to_string(&DispatchedEngine, SuiteConfig { length_bound: usize::MAX, ..SuiteConfig::default() });
  assert_eq!(errors, 1);
  assert!(text.ends_with("...Fail\n"));
}

#[test]
fn misconfigured_case_keeps_its_title() {
  let mut suite = Suite::new(SuiteConfig { length_bound: 8, ..SuiteConfig::default() });
  suite.register_fn(FnCase::builder().title("half built").setup(|| {}));
  let report = suite.run(&mut std::io::sink());
  assert_eq!(report.outcomes[0].title, "half built");
  assert_eq!(report.errors(), 1);
}

#[test]
fn configuration_error_counts_once_and_does_no_work() {
  let setups = Rc::new(Cell::new(0));
  let s = Rc::clone(&setups);

  let mut suite = Suite::new(SuiteConfig::default());
  suite.register_fn(
    FnCase::builder()
      .title("incomplete")
      .setup(move || s.set(s.get() + 1))
      .reference(|_: &[u8]| 0),
  );

  let mut out = Vec::new();
  let report = suite.run(&mut out);
  assert_eq!(report.errors(), 1);
  assert_eq!(report.outcomes[0].lengths_tested, 0);
  assert_eq!(setups.get(), 0);

  let text = String::from_utf8(out).unwrap();
  assert!(text.contains("NULL parameter passed"));
  assert!(!text.contains("Starting CRC Test"));
}

#[test]
fn configuration_error_does_not_consume_random_stream() {
  let fingerprint = |with_invalid: bool| {
    let seen = Rc::new(RefCell::new(DefaultHasher::new()));
    let sink = Rc::clone(&seen);
    let mut suite = Suite::new(SuiteConfig { length_bound: 64, ..SuiteConfig::default() });
    if with_invalid {
      suite.register_fn(FnCase::builder().title("bad"));
    }
    suite.register_fn(
      FnCase::builder()
        .title("record")
        .setup(|| {})
        .reference(move |d: &[u8]| {
          d.hash(&mut *sink.borrow_mut());
          0
        })
        .tested(|_: &[u8]| 0),
    );
    suite.run(&mut std::io::sink());
    seen.borrow().finish()
  };
  assert_eq!(fingerprint(false), fingerprint(true));
}

fn buffers_for_seed(seed: u64) -> Vec<Vec<u8>> {
  let seen = RefCell::new(Vec::new());
  let mut suite = Suite::new(SuiteConfig { seed, length_bound: 40, ..SuiteConfig::default() });
  suite.register_fn(
    FnCase::builder()
      .title("record")
      .setup(|| {})
      .reference(|d: &[u8]| {
        seen.borrow_mut().push(d.to_vec());
        0
      })
      .tested(|_: &[u8]| 0),
  );
  suite.run(&mut std::io::sink());
  drop(suite);
  seen.into_inner()
}

#[test]
fn same_seed_same_buffers() {
  let a = buffers_for_seed(fcscheck::DEFAULT_SEED);
  let b = buffers_for_seed(fcscheck::DEFAULT_SEED);
  assert_eq!(a.len(), 39);
  assert_eq!(a, b);
  assert_ne!(a, buffers_for_seed(7));
}

#[test]
fn each_length_gets_fresh_bytes() {
  let buffers = buffers_for_seed(fcscheck::DEFAULT_SEED);
  for (i, buf) in buffers.iter().enumerate() {
    assert_eq!(buf.len(), i + 1);
  }
  assert_ne!(buffers[10][..10], buffers[9][..]);
}

#[test]
fn closure_case_with_shared_table() {
  let table = Rc::new(RefCell::new([0u32; 256]));
  let init_table = Rc::clone(&table);
  let ref_table = Rc::clone(&table);

  let mut suite = Suite::new(SuiteConfig::default());
  suite.register_fn(
    FnCase::builder()
      .title("lazy table")
      .setup(move || *init_table.borrow_mut() = build_reflected_table(0x04C1_1DB7))
      .reference(move |d: &[u8]| crc32_lut_update(d, !0, &ref_table.borrow()) ^ !0)
      .tested(|d: &[u8]| Crc32::checksum(d)),
  );
  assert!(suite.run(&mut std::io::sink()).passed());
  assert_eq!(table.borrow()[1], 0x7707_3096);
}

#[test]
fn other_polynomial_policy_is_honoured() {
  let castagnoli = Crc32Params::new(0x1EDC_6F41, !0, !0);
  let reference = checksum::ReferenceCrc32::new(castagnoli);
  let tested = reference.clone();
  let engine = FnEngine::new("crc32c", move |d: &[u8]| tested.checksum(d)).with_params(castagnoli);

  let (errors, text) = run_to_string(&engine, SuiteConfig { length_bound: 256, ..SuiteConfig::default() });
  assert_eq!(errors, 0, "{text}");
  assert!(text.contains("CRC32 0x1edc6f41 [crc32c]"));

  // The same engine claimed as Ethernet FCS must fail.
  let wrong = FnEngine::new("crc32c", move |d: &[u8]| reference.checksum(d));
  assert_eq!(run_to_string(&wrong, SuiteConfig::default()).0, 1);
}

#[test]
fn smallest_bound_tests_one_length() {
  let calls = Cell::new(0);
  let engine = FnEngine::new("count", |d: &[u8]| {
    calls.set(calls.get() + 1);
    Crc32::checksum(d)
  });
  let config = SuiteConfig::default().with_max_len(1).unwrap();
  assert_eq!(run_to_string(&engine, config).0, 0);
  assert_eq!(calls.get(), 1);
}

#[test]
fn aux_continues_a_previous_crc() {
  let data = b"The quick brown fox jumps over the lazy dog";
  let (head, tail) = data.split_at(17);
  let first = DispatchedEngine.crc32(head, None);
  assert_eq!(DispatchedEngine.crc32(tail, Some(first)), 0x414F_A339);
  for engine in kernel_engines() {
    let first = engine.crc32(head, None);
    assert_eq!(engine.crc32(tail, Some(first)), 0x414F_A339, "{}", engine.name());
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(32))]

  #[test]
  fn any_seed_passes_for_dispatch(seed in any::<u64>()) {
    let config = SuiteConfig { seed, length_bound: 300, ..SuiteConfig::default() };
    let mut out = Vec::new();
    prop_assert_eq!(crc_test_with(&DispatchedEngine, config, &mut out), 0);
  }

  #[test]
  fn single_bit_fault_is_always_detected(seed in any::<u64>(), at in 1usize..200, bit in 0u32..32) {
    let engine = FnEngine::new("flip", move |d: &[u8]| {
      let crc = Crc32::checksum(d);
      if d.len() == at { crc ^ (1 << bit) } else { crc }
    });
    let config = SuiteConfig { seed, length_bound: 200, ..SuiteConfig::default() };
    let mut out = Vec::new();
    prop_assert_eq!(crc_test_with(&engine, config, &mut out), 1);
    let text = String::from_utf8(out).unwrap();
    let expected = format!("buffer size {at},");
    prop_assert!(text.contains(&expected));
  }

  #[test]
  fn streaming_matches_engine(data in proptest::collection::vec(any::<u8>(), 0..512), split in 0usize..512) {
    let split = split.min(data.len());
    let mut h = Crc32::new();
    h.update(&data[..split]);
    h.update(&data[split..]);
    prop_assert_eq!(h.finalize(), DispatchedEngine.crc32(&data, None));
  }
}
