//! Keyword resolution.
//!
//! Identifiers are scanned in full first, then compared against the keyword
//! table. Only an exact, full-length match resolves to a keyword: `intX` and
//! `in` both stay plain names.

use kiln_ir::TokenKind;

/// Look up a keyword by its complete spelling.
///
/// Uses the identifier's length as a first-pass filter (keywords are 3-13
/// bytes), then matches against the keywords of that length.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    match text.len() {
        3 => match text {
            b"int" => Some(TokenKind::KwInt),
            _ => None,
        },
        4 => match text {
            b"void" => Some(TokenKind::KwVoid),
            b"char" => Some(TokenKind::KwChar),
            b"bool" => Some(TokenKind::KwBool),
            b"long" => Some(TokenKind::KwLong),
            b"half" => Some(TokenKind::KwHalf),
            _ => None,
        },
        5 => match text {
            b"short" => Some(TokenKind::KwShort),
            b"float" => Some(TokenKind::KwFloat),
            _ => None,
        },
        6 => match text {
            b"double" => Some(TokenKind::KwDouble),
            _ => None,
        },
        13 => match text {
            b"static_assert" => Some(TokenKind::KwStaticAssert),
            _ => None,
        },
        _ => None,
    }
}
