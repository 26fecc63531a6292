//! Hex dump rendering for mismatch reports.
//!
//! ```text
//! 00000000  de ad be ef 00 01 02 03  04 05 06 07 08 09 0a 0b  |................|
//! ```

use std::io::{self, Write};

const BYTES_PER_LINE: usize = 16;

/// Write `data` as offset / hex / ASCII lines, each prefixed with `prefix`.
pub fn hexdump<W: Write + ?Sized>(out: &mut W, prefix: &str, data: &[u8]) -> io::Result<()> {
  for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
    write!(out, "{prefix}{:08x} ", line * BYTES_PER_LINE)?;

    for i in 0..BYTES_PER_LINE {
      if i == BYTES_PER_LINE / 2 {
        out.write_all(b" ")?;
      }
      match chunk.get(i) {
        Some(b) => write!(out, " {b:02x}")?,
        None => out.write_all(b"   ")?,
      }
    }

    out.write_all(b"  |")?;
    for &b in chunk {
      let c = if b.is_ascii_graphic() || b == b' ' { b } else { b'.' };
      out.write_all(&[c])?;
    }
    out.write_all(b"|\n")?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(prefix: &str, data: &[u8]) -> String {
    let mut out = Vec::new();
    hexdump(&mut out, prefix, data).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn full_line() {
    let data: Vec<u8> = (0x41..0x51).collect();
    assert_eq!(
      render("", &data),
      "00000000  41 42 43 44 45 46 47 48  49 4a 4b 4c 4d 4e 4f 50  |ABCDEFGHIJKLMNOP|\n"
    );
  }

  #[test]
  fn partial_line_is_padded() {
    let text = render("> ", &[0x00, 0xff, b'a']);
    assert_eq!(text, format!("> 00000000  00 ff 61{}|..a|\n", " ".repeat(42)));
  }

  #[test]
  fn offsets_advance() {
    let text = render("", &[0u8; 40]);
    let offsets: Vec<&str> = text.lines().map(|l| &l[..8]).collect();
    assert_eq!(offsets, ["00000000", "00000010", "00000020"]);
  }

  #[test]
  fn empty_input_writes_nothing() {
    assert_eq!(render("x", &[]), "");
  }
}
