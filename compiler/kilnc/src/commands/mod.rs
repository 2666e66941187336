//! Command handlers for the `kiln` CLI.
//!
//! Shared helpers like [`read_file`] live in the module root.

mod check;
mod lex;

pub use check::{check_file, check_source, CheckOutcome};
pub use lex::{lex_file, lex_source};

use std::io;
use std::path::Path;

/// Read a source file, attaching the path to any I/O error.
pub fn read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("cannot read '{}': {e}", path.display())))
}
