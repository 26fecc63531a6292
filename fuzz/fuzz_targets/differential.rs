//! Differential fuzzing of every CRC-32 path against crc32fast and the
//! table-driven reference.

#![no_main]

use checksum::{Checksum, Crc32, Crc32Params, ReferenceCrc32, crc32_bitwise};
use fcscheck::{Crc32Engine, DispatchedEngine, engine::kernel_engines};
use libfuzzer_sys::fuzz_target;

static REFERENCE: ReferenceCrc32 = ReferenceCrc32::new(Crc32Params::ETHERNET_FCS);

fuzz_target!(|data: &[u8]| {
  let expected = crc32fast::hash(data);

  let reference = REFERENCE.checksum(data);
  assert_eq!(reference, expected, "reference: {reference:#010x} != crc32fast {expected:#010x}, len={}", data.len());

  let bitwise = crc32_bitwise(Crc32Params::ETHERNET_FCS.poly_reflected(), !0, data) ^ !0;
  assert_eq!(bitwise, expected, "bitwise mismatch, len={}", data.len());

  let ours = Crc32::checksum(data);
  assert_eq!(ours, expected, "{}: {ours:#010x} != {expected:#010x}, len={}", Crc32::backend_name(), data.len());
  assert_eq!(DispatchedEngine.crc32(data, None), expected);

  for engine in kernel_engines() {
    let got = engine.crc32(data, None);
    assert_eq!(got, expected, "{}: {got:#010x} != {expected:#010x}, len={}", engine.name(), data.len());
  }
});
