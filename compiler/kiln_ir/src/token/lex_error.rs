//! Lexical errors carried inside tokens.

use std::fmt;

/// What went wrong while scanning a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexError {
    /// A byte that cannot start any token.
    InvalidByte(u8),
    /// Decimal literal does not fit in `u64`.
    IntLiteralOver64Bits,
    /// Identifier longer than [`MAX_NAME_LEN`](crate::MAX_NAME_LEN).
    NameTooLong,
    /// Got `/*` but hit end of input before `*/`.
    BlockCommentNoEnd,
    /// Got `*/` without a preceding `/*`.
    BlockCommentNoBegin,
    /// A literal form the language does not support yet.
    Unsupported(UnsupportedLiteral),
}

/// Literal forms that are recognised but rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnsupportedLiteral {
    /// `0` followed by more digits.
    Octal,
    /// `0x...`
    Hex,
    /// `0b...`
    Binary,
    /// `1.5`, `0.5`
    Float,
    /// `1'000`
    DigitSeparator,
    /// `l`/`L` suffix.
    LongSuffix,
}

/// Payload-free descriptions, indexed by [`LexError::code`].
const DESCRIPTIONS: [&str; 6] = [
    "invalid byte",
    "integer literal exceeds 64 bits",
    "identifier too long",
    "unterminated block comment",
    "`*/` without a matching `/*`",
    "unsupported literal",
];

impl LexError {
    /// Stable numeric code, stored in a diagnostic's misc byte.
    pub const fn code(self) -> u8 {
        match self {
            LexError::InvalidByte(_) => 0,
            LexError::IntLiteralOver64Bits => 1,
            LexError::NameTooLong => 2,
            LexError::BlockCommentNoEnd => 3,
            LexError::BlockCommentNoBegin => 4,
            LexError::Unsupported(_) => 5,
        }
    }

    /// Short description of the error class, without its payload.
    pub const fn description(self) -> &'static str {
        DESCRIPTIONS[self.code() as usize]
    }

    /// Description for a code read back from a diagnostic.
    pub fn description_for_code(code: u8) -> Option<&'static str> {
        DESCRIPTIONS.get(usize::from(code)).copied()
    }
}

impl UnsupportedLiteral {
    pub const fn description(self) -> &'static str {
        match self {
            UnsupportedLiteral::Octal => "octal literals",
            UnsupportedLiteral::Hex => "hex literals",
            UnsupportedLiteral::Binary => "binary literals",
            UnsupportedLiteral::Float => "floating point literals",
            UnsupportedLiteral::DigitSeparator => "digit separators",
            UnsupportedLiteral::LongSuffix => "the `l` literal suffix",
        }
    }
}

impl fmt::Display for UnsupportedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidByte(b) if b.is_ascii_graphic() => {
                write!(f, "invalid byte `{}` (0x{b:02X})", char::from(*b))
            }
            LexError::InvalidByte(b) => write!(f, "invalid byte 0x{b:02X}"),
            LexError::IntLiteralOver64Bits => f.write_str("integer literal exceeds 64 bits"),
            LexError::NameTooLong => write!(
                f,
                "identifier longer than {} bytes",
                crate::MAX_NAME_LEN
            ),
            LexError::BlockCommentNoEnd => f.write_str("unterminated block comment"),
            LexError::BlockCommentNoBegin => f.write_str("`*/` without a matching `/*`"),
            LexError::Unsupported(what) => write!(f, "{what} are not supported"),
        }
    }
}
