//! The `check` command: compile a source file and report its diagnostics.

use std::io::{self, Write};
use std::path::Path;

use kiln_diagnostic::emitter::{ColorMode, TerminalEmitter};
use kiln_diagnostic::DiagnosticSink;
use kiln_parse::CompileError;
use tracing::debug;

use super::read_file;

/// What a `check` run found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Records left in the sink, including those from before an error.
    pub diagnostics: usize,
    /// Set when compilation stopped early.
    pub error: Option<CompileError>,
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        self.diagnostics == 0 && self.error.is_none()
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

/// Compile `source` and render every diagnostic, then the stopping error
/// (if any), then a summary line.
///
/// # Errors
///
/// Only write failures on the emitter's writer are errors; compile problems
/// are reported through the returned [`CheckOutcome`].
pub fn check_source<W: Write>(
    source: &str,
    emitter: &mut TerminalEmitter<W>,
) -> io::Result<CheckOutcome> {
    let mut sink = DiagnosticSink::new();
    let error = kiln_parse::compile(source, &mut sink).err();
    debug!(diagnostics = sink.len(), stopped = error.is_some(), "check finished");

    emitter.emit_all(&sink, source)?;
    if let Some(error) = error {
        emitter.emit_error(&error)?;
    }
    emitter.emit_summary(sink.len() + usize::from(error.is_some()))?;
    emitter.flush()?;

    Ok(CheckOutcome {
        diagnostics: sink.len(),
        error,
    })
}

/// Check a file, printing to stderr. Returns the process exit status.
pub fn check_file(path: &Path) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(io::stderr(), ColorMode::Auto, is_tty);
    match check_source(&source, &mut emitter) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: cannot write diagnostics: {e}");
            1
        }
    }
}
