//! Remove clutter from a source stream and collapse its whitespace.

use std::io::{self, Read, Write};

use crate::scanner::{Clutter, Scanner, is_space};

/// Byte written in place of every whitespace run.
pub const SEPARATOR: u8 = b' ';

/// Copy `input` to `output` without comments and string literals,
/// replacing each run of whitespace by a single [`SEPARATOR`].
///
/// Two separators never follow each other, even when a skipped region
/// stood between the whitespace runs. A line comment ending on a newline
/// counts as whitespace. `output` is flushed before returning.
///
/// # Errors
///
/// Returns the first read or write error. Input that ends inside a
/// comment or literal is not an error.
pub fn strip<R: Read, W: Write>(input: R, output: W) -> io::Result<()> {
    let mut scanner = Scanner::new(input);
    let mut out = Emitter::new(output);

    while let Some(byte) = scanner.next_byte() {
        match scanner.skip_clutter(byte) {
            Some(Clutter::LineComment { terminated: true }) => out.separator()?,
            Some(_) => {}
            None if is_space(byte) => {
                out.separator()?;
                scanner.skip_whitespace();
            }
            None => out.byte(byte)?,
        }
    }

    out.flush()?;
    scanner.finish()
}

/// Strip an in-memory string.
///
/// Clutter boundaries are ASCII bytes, so stripping valid UTF-8 yields
/// valid UTF-8.
#[must_use]
pub fn strip_str(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    // Reading a slice and writing a Vec cannot fail.
    let _ = strip(input.as_bytes(), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

struct Emitter<W> {
    out: W,
    after_separator: bool,
}

impl<W: Write> Emitter<W> {
    const fn new(out: W) -> Self {
        Self {
            out,
            after_separator: false,
        }
    }

    fn byte(&mut self, byte: u8) -> io::Result<()> {
        self.after_separator = false;
        self.out.write_all(&[byte])
    }

    fn separator(&mut self) -> io::Result<()> {
        if self.after_separator {
            return Ok(());
        }
        self.after_separator = true;
        self.out.write_all(&[SEPARATOR])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
