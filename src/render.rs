//! Word table printers.
//!
//! All formats put one word per line in ascending order. The `raw`
//! format repeats each word by its count, which is what word-cloud
//! generators expect as weighted input.

use std::fmt;
use std::io::{self, Write};

use crate::table::FrequencyTable;

/// How a [`FrequencyTable`] is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RenderMode {
    /// Each word once, without counts.
    #[default]
    Alpha,
    /// Each word once, followed by ` [count]`.
    Freq,
    /// Each word repeated on `count` consecutive lines.
    Raw,
}

/// Write `table` to `out` in the given `mode`.
///
/// # Errors
///
/// Returns the first write error of `out`.
pub fn render<W: Write>(mut out: W, table: &FrequencyTable, mode: RenderMode) -> io::Result<()> {
    write!(out, "{}", Listing { table, mode })?;
    out.flush()
}

/// Render `table` into a string.
#[must_use]
pub fn format(table: &FrequencyTable, mode: RenderMode) -> String {
    Listing { table, mode }.to_string()
}

struct Listing<'a> {
    table: &'a FrequencyTable,
    mode: RenderMode,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.table.iter() {
            match self.mode {
                RenderMode::Alpha => writeln!(f, "{}", word.text)?,
                RenderMode::Freq => writeln!(f, "{} [{}]", word.text, word.count)?,
                RenderMode::Raw => {
                    for _ in 0..word.count {
                        writeln!(f, "{}", word.text)?;
                    }
                }
            }
        }
        Ok(())
    }
}
