//! Bit reflection.

/// Reverse the order of the low `n` bits of `value`.
///
/// Bits at positions `n` and above are ignored on input and are zero in the
/// output. `n` is clamped to 64; `reflect(v, 0)` is 0.
///
/// Used both to seed the LUT builder (reflecting a byte index into the top of
/// a 32-bit register) and to bring the resulting remainder back into reflected
/// bit order.
///
/// # Example
///
/// ```
/// use checksum::reflect;
///
/// assert_eq!(reflect(0b0000_0001, 8), 0b1000_0000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, n: u32) -> u64 {
  let n = if n > 64 { 64 } else { n };
  if n == 0 {
    return 0;
  }
  value.reverse_bits() >> (64 - n)
}
