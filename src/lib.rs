//! Strip comments and string literals from source code and count the
//! identifier-like words that remain.
//!
//! The word table shows the vocabulary of a codebase. Rendered in `raw`
//! form it becomes weighted input for a word-cloud generator.
//!
//! # Quick start
//!
//! ## Strip clutter
//!
//! ```
//! use domaincloud::strip_str;
//!
//! let input = "char *res = \"AB\\\"C\\nD\" - 'x'; // done\n";
//! assert_eq!(strip_str(input), "char *res = - ; ");
//! ```
//!
//! ## Count words
//!
//! ```
//! use domaincloud::{FrequencyTable, RenderMode, count, format};
//!
//! let mut table = FrequencyTable::new();
//! count("a a b /* c */ a.a a_a".as_bytes(), &mut table).unwrap();
//! assert_eq!(format(&table, RenderMode::Freq), "a [2]\na.a [1]\na_a [1]\nb [1]\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod cloud;
pub mod render;
pub mod scanner;
pub mod strip;
pub mod table;
pub mod words;

use std::collections::TryReserveError;
use std::io;

pub use render::{RenderMode, format, render};
pub use scanner::{Clutter, Scanner};
pub use strip::{strip, strip_str};
pub use table::{FrequencyTable, Word};
pub use words::{count, count_str};

/// Errors of the word counter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input failed.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// The word buffer could not grow.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
