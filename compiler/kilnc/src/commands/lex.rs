//! The `lex` command: dump the token stream of a source file.

use std::io::{self, Write};
use std::path::Path;

use kiln_lexer_core::tokenize;

use super::read_file;

/// Write one line per token: line, kind, span and source text, followed by
/// the decoded value of a number or the message of a lex error. Returns the
/// number of tokens written, `Eof` excluded.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn lex_source<W: Write>(source: &str, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for tok in tokenize(source) {
        let text = source.get(tok.span.to_range()).unwrap_or_default();
        let kind = format!("{:?}", tok.kind);
        let span = tok.span.to_string();
        write!(out, "{:>4}  {kind:<24} {span:<10} {text:?}", tok.line)?;
        if let Some(lit) = tok.number() {
            let suffix = if lit.unsigned { "u" } else { "" };
            write!(out, " = {}{suffix} ({})", lit.raw, lit.builtin)?;
        } else if let Some(error) = tok.lex_error() {
            write!(out, " ({error})")?;
        }
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}

/// Lex a file and print its tokens to stdout. Returns the process exit
/// status.
pub fn lex_file(path: &Path) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let mut out = io::stdout().lock();
    let written = writeln!(out, "Tokens for '{}':", path.display())
        .and_then(|()| lex_source(&source, &mut out));
    match written {
        Ok(count) => {
            println!("({count} tokens)");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
