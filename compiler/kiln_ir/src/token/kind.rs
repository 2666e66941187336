//! Token kinds for Kiln.

use std::fmt;

use super::{LexError, NumberLiteral};

/// Token kinds for Kiln.
///
/// The payload lives on the variant, so exactly one interpretation of a
/// token's data is ever available.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    Eof,
    LexError(LexError),
    /// Identifier; its text is the token's span.
    Name,
    Number(NumberLiteral),

    Semicolon,  // ;
    Comma,      // ,
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }
    Star,       // *
    Plus,       // +
    Minus,      // -
    PlusPlus,   // ++
    MinusMinus, // --
    Amp,        // &
    Caret,      // ^
    Pipe,       // |
    AmpAmp,     // &&
    PipePipe,   // ||
    Lt,         // <
    Gt,         // >
    Shl,        // <<
    Shr,        // >>
    Eq,         // =
    EqEq,       // ==
    NotEq,      // !=
    Bang,       // !
    Tilde,      // ~

    KwStaticAssert,
    KwVoid,
    KwChar,
    KwBool,
    KwShort,
    KwInt,
    KwLong,
    KwHalf,
    KwFloat,
    KwDouble,
}

impl TokenKind {
    /// Punctuation or keyword spelling, `None` for payload-carrying kinds.
    pub const fn spelling(&self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Eof | TokenKind::LexError(_) | TokenKind::Name | TokenKind::Number(_) => {
                return None
            }
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Amp => "&",
            TokenKind::Caret => "^",
            TokenKind::Pipe => "|",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::KwStaticAssert => "static_assert",
            TokenKind::KwVoid => "void",
            TokenKind::KwChar => "char",
            TokenKind::KwBool => "bool",
            TokenKind::KwShort => "short",
            TokenKind::KwInt => "int",
            TokenKind::KwLong => "long",
            TokenKind::KwHalf => "half",
            TokenKind::KwFloat => "float",
            TokenKind::KwDouble => "double",
        };
        Some(s)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::LexError(_) => "invalid token",
            TokenKind::Name => "identifier",
            TokenKind::Number(_) => "number literal",
            other => other.spelling().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.spelling() {
            write!(f, "`{s}`")
        } else {
            f.write_str(self.display_name())
        }
    }
}
