//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Output for one record:
///
/// ```text
/// error[E2001]: static assertion failed
///   --> line 2
///    = source: `0`
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    /// Render one record. `source` is the text the diagnostic's span points
    /// into; spans outside it are skipped.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        self.write_colored("error", colors::ERROR)?;
        let code = format!("[{}]", diagnostic.kind.code());
        self.write_colored(&code, colors::BOLD)?;
        write!(self.writer, ": {}", diagnostic.kind)?;
        if let Some(detail) = diagnostic.detail() {
            write!(self.writer, ": {detail}")?;
        }
        writeln!(self.writer)?;

        write!(self.writer, "  ")?;
        self.write_colored("-->", colors::SECONDARY)?;
        writeln!(self.writer, " line {}", diagnostic.line)?;

        if let Some(text) = source_excerpt(diagnostic, source) {
            writeln!(self.writer, "   = source: `{text}`")?;
        }
        Ok(())
    }

    /// Render every record in order.
    ///
    /// # Errors
    ///
    /// Stops at the first write failure.
    pub fn emit_all<'d>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
        source: &str,
    ) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic, source)?;
        }
        Ok(())
    }

    /// Render an error that stopped compilation and has no record of its own.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn emit_error(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        self.write_colored("error", colors::ERROR)?;
        writeln!(self.writer, ": {error}")
    }

    /// Closing line; prints nothing when there were no diagnostics.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn emit_summary(&mut self, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.write_colored("error", colors::ERROR)?;
        if count == 1 {
            writeln!(self.writer, ": aborting due to previous error")
        } else {
            writeln!(self.writer, ": aborting due to {count} previous errors")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Source text under the diagnostic's span with whitespace runs collapsed.
fn source_excerpt(diagnostic: &Diagnostic, source: &str) -> Option<String> {
    if diagnostic.span.is_empty() {
        return None;
    }
    let text = source.get(diagnostic.span.to_range())?;
    Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests;
