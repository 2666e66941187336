use kiln_ir::{LexError, Span};
use pretty_assertions::assert_eq;

use super::*;

const SOURCE: &str = "void main(){\n  static_assert(3 +\n 4 == 8);\n}";

fn render(diagnostics: &[Diagnostic], mode: ColorMode) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    assert!(emitter.emit_all(diagnostics, SOURCE).is_ok());
    assert!(emitter.emit_summary(diagnostics.len()).is_ok());
    assert!(emitter.flush().is_ok());
    String::from_utf8(output).unwrap_or_default()
}

#[test]
fn failed_assertion_without_color() {
    // `3 +\n 4 == 8` sits at 29..40.
    let diag = Diagnostic::static_assert_failed(2, Span::new(29, 40));
    assert_eq!(
        render(&[diag], ColorMode::Never),
        "error[E2001]: static assertion failed\n  --> line 2\n   = source: `3 + 4 == 8`\nerror: aborting due to previous error\n"
    );
}

#[test]
fn lex_error_includes_detail() {
    let diag = Diagnostic::lex_error(LexError::BlockCommentNoEnd, 3, Span::DUMMY);
    let text = render(&[diag], ColorMode::Never);
    assert!(text.starts_with("error[E0001]: invalid token: unterminated block comment\n"));
    assert!(!text.contains("source:"));
}

#[test]
fn colors_only_when_requested() {
    let diag = Diagnostic::static_assert_failed(2, Span::DUMMY);
    assert!(render(&[diag], ColorMode::Always).contains("\x1b["));
    assert!(!render(&[diag], ColorMode::Auto).contains("\x1b["));
}

#[test]
fn summary_counts_errors() {
    let diag = Diagnostic::static_assert_failed(1, Span::DUMMY);
    let text = render(&[diag, diag, diag], ColorMode::Never);
    assert!(text.ends_with("error: aborting due to 3 previous errors\n"));
}

#[test]
fn nothing_for_no_diagnostics() {
    assert_eq!(render(&[], ColorMode::Never), "");
}

#[test]
fn span_outside_source_is_skipped() {
    let diag = Diagnostic::static_assert_failed(1, Span::new(400, 410));
    assert!(!render(&[diag], ColorMode::Never).contains("source:"));
}

#[test]
fn stopping_error_is_one_line() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    assert!(emitter.emit_error(&"line 4: not supported yet: function call").is_ok());
    assert_eq!(
        String::from_utf8(output).unwrap_or_default(),
        "error: line 4: not supported yet: function call\n"
    );
}

#[test]
fn invalid_byte_is_named() {
    // `@` at offset 15 of the first source line.
    let source = "void main(){ 1 @ 2 }";
    let diag = Diagnostic::lex_error(LexError::InvalidByte(b'@'), 1, Span::new(15, 16));
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    assert!(emitter.emit(&diag, source).is_ok());
    assert_eq!(
        String::from_utf8(output).unwrap_or_default(),
        "error[E0003]: invalid byte: `@` (0x40)\n  --> line 1\n   = source: `@`\n"
    );
}
