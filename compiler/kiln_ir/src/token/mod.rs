//! Token types produced by the Kiln scanner.
//!
//! A [`Token`] is a `Copy` value: kind (with its payload), the 1-based line
//! it starts on, and its byte span in the source buffer. Names carry no
//! payload of their own; their text is `source[token.span]`, so a token never
//! outlives or owns the buffer it was scanned from.

mod kind;
mod lex_error;

pub use kind::TokenKind;
pub use lex_error::{LexError, UnsupportedLiteral};

use std::fmt;

use crate::{BuiltinType, Span};

/// Longest identifier the scanner accepts, in bytes.
pub const MAX_NAME_LEN: u32 = 0x7f;

/// Payload of a decimal integer literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumberLiteral {
    /// Accumulated value. Literals that do not fit in 64 bits never reach
    /// this type; they become [`LexError::IntLiteralOver64Bits`].
    pub raw: u64,
    /// A `u`/`U` suffix was present.
    pub unsigned: bool,
    /// `G32` when `raw` fits in 32 bits, `G64` otherwise.
    pub builtin: BuiltinType,
}

impl NumberLiteral {
    pub const fn new(raw: u64, unsigned: bool) -> Self {
        NumberLiteral {
            raw,
            unsigned,
            builtin: BuiltinType::for_int_literal(raw),
        }
    }
}

/// A token with its line and span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token starts on.
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, line: u32, span: Span) -> Self {
        Token { kind, line, span }
    }

    /// Create a dummy token for tests and ring-buffer initialisation.
    pub const fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            line: 0,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// The number payload, when this is a valid number literal.
    pub fn number(&self) -> Option<NumberLiteral> {
        match self.kind {
            TokenKind::Number(lit) => Some(lit),
            _ => None,
        }
    }

    /// The lex error payload, when this is an error token.
    pub fn lex_error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::LexError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.kind, self.line, self.span)
    }
}

// Tokens are copied in and out of the lookahead ring; keep them small.
const _: () = assert!(std::mem::size_of::<Token>() <= 40);
