//! Differential CRC-32 verification binary.
//!
//! Usage:
//!   cargo run --release -p fcscheck
//!   cargo run --release -p fcscheck -- --all-kernels
//!   cargo run --release -p fcscheck -- --seed 0x1234 --max-len 4096

use std::{env, io, process::ExitCode};

use checksum::{Crc32, crc32::config as crc32_config};
use fcscheck::{
  CrcCase, Suite, SuiteConfig,
  config::{parse_max_len, parse_seed},
  engine::{DispatchedEngine, kernel_engines},
};
use tracing::debug;

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  seed: Option<u64>,

  max_len: Option<usize>,

  /// Also test every kernel directly, bypassing dispatch.
  all_kernels: bool,

  verbose: bool,

  help: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = env::args().skip(1);

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--all-kernels" | "-a" => args.all_kernels = true,
      "--verbose" | "-v" => args.verbose = true,
      "--help" | "-h" => args.help = true,
      "--seed" | "-s" => {
        let Some(value) = iter.next() else {
          return Err("--seed requires a value".to_string());
        };
        args.seed = Some(parse_seed("--seed", &value).map_err(|e| e.to_string())?);
      }
      "--max-len" | "-n" => {
        let Some(value) = iter.next() else {
          return Err("--max-len requires a value".to_string());
        };
        args.max_len = Some(parse_max_len("--max-len", &value).map_err(|e| e.to_string())?);
      }
      other => {
        return Err(format!("Unknown argument: {other}"));
      }
    }
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
fcscheck: differential verification of CRC-32 Ethernet FCS implementations

USAGE:
    cargo run --release -p fcscheck -- [OPTIONS]

OPTIONS:
    -s, --seed SEED       Generator seed, decimal or 0x hex (default: 0x20200701)
    -n, --max-len LEN     Longest buffer length to test (default: 2047)
    -a, --all-kernels     Also test every available kernel directly
    -v, --verbose         Log kernel selection and per-case progress
    -h, --help            Show this help message

ENVIRONMENT:
    FCSCHECK_SEED, FCSCHECK_MAX_LEN, FCSCHECK_ALL_KERNELS
                          Defaults for the options above
    FCSCHECK_CRC32_FORCE  Pin dispatch: auto, bytewise, portable, hwcrc
    FCSCHECK_CRC32_BYTEWISE_MAX
                          Lengths below this use the bytewise kernel (default: 16)
    RUST_LOG              tracing filter (overrides --verbose)
"
  );
}

fn init_tracing(verbose: bool) {
  use tracing_subscriber::{EnvFilter, fmt, prelude::*};

  let default_filter = if verbose { "fcscheck=debug,checksum=debug" } else { "warn" };
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .init();
}

fn build_config(args: &Args) -> Result<SuiteConfig, String> {
  let mut config = SuiteConfig::from_env().map_err(|e| e.to_string())?;
  if let Some(seed) = args.seed {
    config.seed = seed;
  }
  if let Some(max_len) = args.max_len {
    config = config.with_max_len(max_len).map_err(|e| e.to_string())?;
  }
  config.all_kernels |= args.all_kernels;
  Ok(config)
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("Error: {msg}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  init_tracing(args.verbose);

  let config = match build_config(&args) {
    Ok(config) => config,
    Err(msg) => {
      eprintln!("Error: {msg}");
      return ExitCode::FAILURE;
    }
  };

  let dispatch = crc32_config::get();
  debug!(
    requested = %dispatch.requested_force,
    effective = %dispatch.effective_force,
    bytewise_max = dispatch.tunables.bytewise_max,
    backend = Crc32::backend_name(),
    "crc32 dispatch"
  );

  let kernels = if config.all_kernels { kernel_engines() } else { Vec::new() };

  let mut suite = Suite::new(config);
  suite.register(CrcCase::new(DispatchedEngine));
  for engine in &kernels {
    suite.register(CrcCase::new(engine));
  }

  let report = suite.run(&mut io::stdout().lock());
  if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
