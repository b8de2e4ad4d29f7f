//! Byte-at-a-time reader that recognizes and skips clutter regions.
//!
//! Clutter is anything that carries no vocabulary: `//` line comments,
//! `/* */` block comments and `"`/`'` quoted literals. The stripper and
//! the word counter both drive a [`Scanner`] and ask it to skip clutter,
//! so the two agree on where every region starts and ends.

use std::io::{self, BufReader, Bytes, Read};

/// A clutter region that was skipped by [`Scanner::skip_clutter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clutter {
    /// `// ...`. `terminated` is true when the comment ended on an
    /// unescaped newline rather than at end-of-input.
    LineComment { terminated: bool },
    /// `/* ... */`, closed or running to end-of-input.
    BlockComment,
    /// A literal opened and closed by the given delimiter.
    Quoted(u8),
}

/// Whitespace as C's `isspace` sees it in the "C" locale.
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Forward-only reader over one input with a single byte of push-back.
///
/// The first read error is remembered and ends the scan as if the input
/// were exhausted. It surfaces from [`Scanner::finish`].
pub struct Scanner<R> {
    bytes: Bytes<BufReader<R>>,
    pushed_back: Option<u8>,
    error: Option<io::Error>,
}

impl<R: Read> Scanner<R> {
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            bytes: BufReader::new(input).bytes(),
            pushed_back: None,
            error: None,
        }
    }

    /// Consume the next byte, or `None` at end-of-input or after an error.
    pub fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushed_back.take() {
            return Some(byte);
        }
        if self.error.is_some() {
            return None;
        }
        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Return `byte` to the input; the next [`Scanner::next_byte`] yields it.
    pub const fn push_back(&mut self, byte: u8) {
        self.pushed_back = Some(byte);
    }

    /// End the scan, reporting the read error that stopped it, if any.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    /// Skip the clutter region opened by `byte`, which was just consumed.
    ///
    /// Returns `None` when `byte` opens nothing. A lone `/` falls in that
    /// case; the byte after it has been pushed back.
    pub fn skip_clutter(&mut self, byte: u8) -> Option<Clutter> {
        match byte {
            b'/' => self.resolve_slash(),
            b'"' | b'\'' => {
                self.skip_until_unescaped(byte);
                Some(Clutter::Quoted(byte))
            }
            _ => None,
        }
    }

    fn resolve_slash(&mut self) -> Option<Clutter> {
        match self.next_byte() {
            Some(b'/') => Some(Clutter::LineComment {
                terminated: self.skip_until_unescaped(b'\n'),
            }),
            Some(b'*') => {
                self.skip_block_comment();
                Some(Clutter::BlockComment)
            }
            Some(other) => {
                self.push_back(other);
                None
            }
            None => None,
        }
    }

    /// Advance past the next `*/`, or to end-of-input.
    pub fn skip_block_comment(&mut self) {
        let Some(mut prev) = self.next_byte() else {
            return;
        };
        while let Some(cur) = self.next_byte() {
            if prev == b'*' && cur == b'/' {
                return;
            }
            prev = cur;
        }
    }

    /// Advance past the next `delimiter` not escaped by a backslash.
    ///
    /// Returns false if end-of-input came first.
    pub fn skip_until_unescaped(&mut self, delimiter: u8) -> bool {
        let mut escaped = false;
        while let Some(cur) = self.next_byte() {
            if escaped {
                escaped = false;
            } else if cur == b'\\' {
                escaped = true;
            } else if cur == delimiter {
                return true;
            }
        }
        false
    }

    /// Consume whitespace, pushing back the first byte that isn't.
    pub fn skip_whitespace(&mut self) {
        while let Some(cur) = self.next_byte() {
            if !is_space(cur) {
                self.push_back(cur);
                return;
            }
        }
    }
}
