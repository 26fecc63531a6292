//! Arbitrary update sequences and resumed CRCs must match the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32};
use fcscheck::{Crc32Engine, engine::kernel_engines};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Crc32::checksum(data);

  let mut hasher = Crc32::new();
  let mut resumed = Crc32::checksum(&[]);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = match input.chunk_sizes.get(chunk_idx % input.chunk_sizes.len().max(1)) {
      Some(size) => (size % 256).max(1),
      None => 1,
    };

    let end = (offset + chunk_size).min(data.len());
    let chunk = &data[offset..end];
    hasher.update(chunk);

    let mut step = Crc32::resume(resumed);
    step.update(chunk);
    resumed = step.finalize();

    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch, len={}", data.len());
  assert_eq!(resumed, expected, "resume mismatch, len={}", data.len());

  let split = input.chunk_sizes.first().map_or(0, |s| s % (data.len() + 1));
  for engine in kernel_engines() {
    let head = engine.crc32(&data[..split], None);
    assert_eq!(engine.crc32(&data[split..], Some(head)), expected, "{} aux mismatch", engine.name());
  }
});
