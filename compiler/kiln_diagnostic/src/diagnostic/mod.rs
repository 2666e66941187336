//! The diagnostic record.

use std::fmt;

use kiln_ir::{LexError, Span};

/// What a diagnostic reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum DiagnosticKind {
    /// A lex-error token was met. `misc` holds [`LexError::code`].
    LexError,
    /// A byte that cannot start a token. `misc` holds the byte.
    InvalidByte,
    /// A `static_assert` expression folded to zero.
    StaticAssertFailed,
    /// A decimal literal does not fit in 64 bits.
    IntLiteralOver64Bits,
    /// Signed folding wrapped around. `misc` holds the operator code.
    NoSignWrapViolated,
}

impl DiagnosticKind {
    /// Searchable error code.
    ///
    /// Format: E#### where the first digit is the phase:
    /// - E0xxx: lexer
    /// - E2xxx: constant evaluation
    pub const fn code(self) -> &'static str {
        match self {
            DiagnosticKind::LexError => "E0001",
            DiagnosticKind::IntLiteralOver64Bits => "E0002",
            DiagnosticKind::InvalidByte => "E0003",
            DiagnosticKind::StaticAssertFailed => "E2001",
            DiagnosticKind::NoSignWrapViolated => "E2002",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            DiagnosticKind::LexError => "invalid token",
            DiagnosticKind::IntLiteralOver64Bits => "integer literal exceeds 64 bits",
            DiagnosticKind::InvalidByte => "invalid byte",
            DiagnosticKind::StaticAssertFailed => "static assertion failed",
            DiagnosticKind::NoSignWrapViolated => "signed overflow in constant expression",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Extra detail decoded from a diagnostic's misc byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Detail {
    Text(&'static str),
    Byte(u8),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Detail::Text(text) => f.write_str(text),
            Detail::Byte(b) if b.is_ascii_graphic() => {
                write!(f, "`{}` (0x{b:02X})", char::from(b))
            }
            Detail::Byte(b) => write!(f, "0x{b:02X}"),
        }
    }
}

/// One located report.
///
/// `column` is carried for layout compatibility with downstream tooling but
/// is not computed yet; it is always 0.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub misc: u8,
    pub column: u16,
    /// 1-based line.
    pub line: u32,
    /// Source the diagnostic refers to (for a failed assertion, the
    /// parenthesised expression).
    pub span: Span,
}

kiln_ir::static_assert_size!(Diagnostic, 16);

impl Diagnostic {
    pub const fn new(kind: DiagnosticKind, line: u32, span: Span) -> Self {
        Diagnostic {
            kind,
            misc: 0,
            column: 0,
            line,
            span,
        }
    }

    #[must_use]
    pub const fn with_misc(mut self, misc: u8) -> Self {
        self.misc = misc;
        self
    }

    pub const fn static_assert_failed(line: u32, span: Span) -> Self {
        Diagnostic::new(DiagnosticKind::StaticAssertFailed, line, span)
    }

    /// Diagnostic for a lex-error token.
    ///
    /// Literal overflow and invalid bytes get their own kinds; every other
    /// error is [`DiagnosticKind::LexError`] with the error code in `misc`.
    pub const fn lex_error(error: LexError, line: u32, span: Span) -> Self {
        match error {
            LexError::IntLiteralOver64Bits => {
                Diagnostic::new(DiagnosticKind::IntLiteralOver64Bits, line, span)
            }
            LexError::InvalidByte(byte) => {
                Diagnostic::new(DiagnosticKind::InvalidByte, line, span).with_misc(byte)
            }
            _ => Diagnostic::new(DiagnosticKind::LexError, line, span).with_misc(error.code()),
        }
    }

    pub const fn no_sign_wrap(op_code: u8, line: u32, span: Span) -> Self {
        Diagnostic::new(DiagnosticKind::NoSignWrapViolated, line, span).with_misc(op_code)
    }

    /// Extra detail decoded from `misc`, if the kind defines any.
    pub fn detail(&self) -> Option<Detail> {
        match self.kind {
            DiagnosticKind::LexError => Some(Detail::Text(
                LexError::description_for_code(self.misc).unwrap_or("unknown lexical error"),
            )),
            DiagnosticKind::InvalidByte => Some(Detail::Byte(self.misc)),
            DiagnosticKind::StaticAssertFailed
            | DiagnosticKind::IntLiteralOver64Bits
            | DiagnosticKind::NoSignWrapViolated => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)?;
        if let Some(detail) = self.detail() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}
