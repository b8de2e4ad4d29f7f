//! Split source text into identifier-like words and count them.

use std::io::Read;

use crate::Error;
use crate::scanner::Scanner;
use crate::table::FrequencyTable;

/// True for bytes that may start a word: ASCII letters, `.` and `_`.
#[must_use]
pub const fn is_word_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'.' || byte == b'_'
}

/// Scan `input` and add every word outside of comments and string
/// literals to `table`.
///
/// A word starts with [`is_word_start`] and continues with such bytes
/// or ASCII digits. Calling this repeatedly with the same table sums the
/// counts over all inputs.
///
/// # Errors
///
/// [`Error::Io`] if reading fails; words completed before the failure
/// stay in `table`, a half-read word is dropped. [`Error::OutOfMemory`]
/// if the word buffer cannot grow.
pub fn count<R: Read>(input: R, table: &mut FrequencyTable) -> Result<(), Error> {
    let mut scanner = Scanner::new(input);
    let mut word = String::new();

    while let Some(byte) = scanner.next_byte() {
        if scanner.skip_clutter(byte).is_none()
            && (is_word_start(byte) || (byte.is_ascii_digit() && !word.is_empty()))
        {
            word.try_reserve(1)?;
            word.push(char::from(byte));
        } else if !word.is_empty() {
            table.record(&word);
            word.clear();
        }
    }

    scanner.finish()?;
    table.record(&word);
    Ok(())
}

/// Count the words of an in-memory string into a fresh table.
#[must_use]
pub fn count_str(input: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    // Reading a slice cannot fail; on allocation failure the words counted
    // so far are returned.
    let _ = count(input.as_bytes(), &mut table);
    table
}
