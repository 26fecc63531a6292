extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

use super::*;
use crate::common::reference::{Crc32Params, ReferenceCrc32, crc32_bitwise};

fn reference() -> ReferenceCrc32 {
  ReferenceCrc32::new(Crc32Params::ETHERNET_FCS)
}

proptest! {
  #[test]
  fn crc32_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc32::checksum(&data), reference().checksum(&data));
  }

  #[test]
  fn every_kernel_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    let expected = reference().checksum(&data);
    for kernel in kernel_test::available_kernels() {
      prop_assert_eq!(kernel.checksum(&data), expected, "kernel {}", kernel.name);
    }
  }

  #[test]
  fn reference_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let params = Crc32Params::ETHERNET_FCS;
    let bitwise = crc32_bitwise(params.poly_reflected(), params.init, &data) ^ params.xorout;
    prop_assert_eq!(reference().checksum(&data), bitwise);
  }

  #[test]
  fn arbitrary_polynomial_lut_matches_bitwise(
    poly in any::<u32>(),
    init in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let params = Crc32Params::new(poly, init, 0);
    let engine = ReferenceCrc32::new(params);
    prop_assert_eq!(engine.checksum(&data), crc32_bitwise(params.poly_reflected(), init, &data));
  }

  #[test]
  fn chunking_equivalence(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut hasher = Crc32::new();
    for part in data.chunks(chunk) {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.finalize(), Crc32::checksum(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc32fast
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_crc32fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let mut other = crc32fast::Hasher::new();
    other.update(&data);
    prop_assert_eq!(Crc32::checksum(&data), other.finalize());
  }

  #[test]
  fn vectored_matches_contiguous(parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..8)) {
    let bufs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
    let joined: Vec<u8> = parts.concat();
    prop_assert_eq!(Crc32::checksum_vectored(&bufs), Crc32::checksum(&joined));
  }
}

#[test]
fn test_vectors_crc32() {
  assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
}
