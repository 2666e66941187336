//! Hand-written scanner producing [`Token`] values.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and allocates
//! nothing. Whitespace and comments are skipped inside [`Scanner::next_token`],
//! so every call yields a significant token. Error conditions are encoded as
//! [`TokenKind::LexError`] tokens, not as `Result::Err`; scanning always
//! resumes after the offending bytes.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and builds the token. The sentinel byte (`0x00`)
//! naturally dispatches to `eof_or_null()`.

use kiln_ir::{LexError, NumberLiteral, Span, Token, TokenKind, UnsupportedLiteral, MAX_NAME_LEN};

use crate::cursor::Cursor;
use crate::keywords;

/// Smallest 20-digit decimal number, `10^19`.
const TWENTY_DIGIT_FLOOR: u64 = 10_000_000_000_000_000_000;

/// Saved scanner position, restorable with [`Scanner::restore`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScannerSnapshot {
    pos: u32,
    line: u32,
}

impl ScannerSnapshot {
    /// Byte offset the scanner will resume from.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Pure, allocation-free scanner.
///
/// Produces one token at a time; after end of input every further call
/// returns an `Eof` token at the same position.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// 1-based line of the cursor.
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner starting on line 1.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor, line: 1 }
    }

    pub fn snapshot(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.cursor.pos(),
            line: self.line,
        }
    }

    /// Rewind (or fast-forward) to a snapshot taken from a scanner over the
    /// same buffer.
    pub fn restore(&mut self, snapshot: ScannerSnapshot) {
        self.cursor
            .reset_to(snapshot.pos.min(self.cursor.source_len()));
        self.line = snapshot.line;
    }

    /// Produce the next significant token.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.cursor.pos();
            match self.cursor.current() {
                0 => return self.eof_or_null(start),
                b' ' | b'\t' | b'\r' => {
                    self.cursor
                        .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
                }
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b'/' => {
                    if let Some(tok) = self.slash_or_comment(start) {
                        return tok;
                    }
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.identifier(start),
                b'0' => return self.zero(start),
                b'1'..=b'9' => return self.decimal(start),
                b'*' => return self.star(start),
                b'!' => return self.one_or_two(start, b'=', TokenKind::NotEq, TokenKind::Bang),
                b'=' => return self.one_or_two(start, b'=', TokenKind::EqEq, TokenKind::Eq),
                b'+' => return self.one_or_two(start, b'+', TokenKind::PlusPlus, TokenKind::Plus),
                b'-' => {
                    return self.one_or_two(start, b'-', TokenKind::MinusMinus, TokenKind::Minus)
                }
                b'&' => return self.one_or_two(start, b'&', TokenKind::AmpAmp, TokenKind::Amp),
                b'|' => return self.one_or_two(start, b'|', TokenKind::PipePipe, TokenKind::Pipe),
                b'<' => return self.one_or_two(start, b'<', TokenKind::Shl, TokenKind::Lt),
                b'>' => return self.one_or_two(start, b'>', TokenKind::Shr, TokenKind::Gt),
                b'^' => return self.single(start, TokenKind::Caret),
                b'~' => return self.single(start, TokenKind::Tilde),
                b',' => return self.single(start, TokenKind::Comma),
                b';' => return self.single(start, TokenKind::Semicolon),
                b'(' => return self.single(start, TokenKind::LParen),
                b')' => return self.single(start, TokenKind::RParen),
                b'{' => return self.single(start, TokenKind::LBrace),
                b'}' => return self.single(start, TokenKind::RBrace),
                other => {
                    self.cursor.advance();
                    return self.error(start, self.line, LexError::InvalidByte(other));
                }
            }
        }
    }

    // ─── Token Construction ─────────────────────────────────────────────

    #[inline]
    fn token(&self, start: u32, kind: TokenKind) -> Token {
        Token::new(kind, self.line, Span::new(start, self.cursor.pos()))
    }

    fn error(&self, start: u32, line: u32, error: LexError) -> Token {
        tracing::trace!(%error, line, start, "lex error");
        Token::new(
            TokenKind::LexError(error),
            line,
            Span::new(start, self.cursor.pos()),
        )
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn eof_or_null(&mut self, start: u32) -> Token {
        if self.cursor.is_eof() {
            self.token(start, TokenKind::Eof)
        } else {
            self.cursor.advance();
            self.error(start, self.line, LexError::InvalidByte(0))
        }
    }

    // ─── Comments ───────────────────────────────────────────────────────

    /// Skip a comment, or produce the token a lone `/` stands for.
    ///
    /// Returns `None` after skipping a complete comment.
    fn slash_or_comment(&mut self, start: u32) -> Option<Token> {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                None
            }
            b'*' => {
                let line = self.line;
                self.cursor.advance_n(2);
                let comment = self.cursor.eat_block_comment();
                self.line += comment.newlines;
                if comment.terminated {
                    None
                } else {
                    Some(self.error(start, line, LexError::BlockCommentNoEnd))
                }
            }
            _ => {
                self.cursor.advance();
                Some(self.error(start, self.line, LexError::InvalidByte(b'/')))
            }
        }
    }

    fn star(&mut self, start: u32) -> Token {
        if self.cursor.peek() == b'/' {
            self.cursor.advance_n(2);
            self.error(start, self.line, LexError::BlockCommentNoBegin)
        } else {
            self.single(start, TokenKind::Star)
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        if self.cursor.pos() - start > MAX_NAME_LEN {
            return self.error(start, self.line, LexError::NameTooLong);
        }
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Name);
        self.token(start, kind)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// A literal starting with `0`. Only the single digit `0` (optionally
    /// suffixed) is a valid literal.
    fn zero(&mut self, start: u32) -> Token {
        let rejected = match self.cursor.peek() {
            b'0'..=b'9' => Some(UnsupportedLiteral::Octal),
            b'x' | b'X' => Some(UnsupportedLiteral::Hex),
            b'b' | b'B' => Some(UnsupportedLiteral::Binary),
            b'.' => Some(UnsupportedLiteral::Float),
            b'\'' => Some(UnsupportedLiteral::DigitSeparator),
            _ => None,
        };
        self.cursor.advance();
        match rejected {
            Some(what) => self.unsupported_literal(start, what),
            None => self.finish_integer(start, 0, false),
        }
    }

    /// A decimal literal with a nonzero leading digit.
    fn decimal(&mut self, start: u32) -> Token {
        let mut value: u64 = 0;
        while let digit @ b'0'..=b'9' = self.cursor.current() {
            value = value
                .wrapping_mul(10)
                .wrapping_add(u64::from(digit - b'0'));
            self.cursor.advance();
        }

        match self.cursor.current() {
            b'\'' => return self.unsupported_literal(start, UnsupportedLiteral::DigitSeparator),
            b'.' => return self.unsupported_literal(start, UnsupportedLiteral::Float),
            _ => {}
        }

        // Counted before any suffix is consumed.
        let digits = self.cursor.pos() - start;
        let msd = self.cursor.slice_from(start)[0];
        let overflow = digits >= 20
            && (digits != 20 || msd >= b'2' || value < TWENTY_DIGIT_FLOOR);
        self.finish_integer(start, value, overflow)
    }

    /// Consume an optional `u`/`U` suffix and build the literal token.
    fn finish_integer(&mut self, start: u32, value: u64, overflow: bool) -> Token {
        let unsigned = matches!(self.cursor.current(), b'u' | b'U');
        if unsigned {
            self.cursor.advance();
        }
        if matches!(self.cursor.current(), b'l' | b'L') {
            return self.unsupported_literal(start, UnsupportedLiteral::LongSuffix);
        }
        if overflow {
            return self.error(start, self.line, LexError::IntLiteralOver64Bits);
        }
        self.token(start, TokenKind::Number(NumberLiteral::new(value, unsigned)))
    }

    /// Swallow the rest of a rejected literal so scanning resumes after it.
    fn unsupported_literal(&mut self, start: u32, what: UnsupportedLiteral) -> Token {
        self.cursor
            .eat_while(|b| is_ident_continue(b) || b == b'.' || b == b'\'');
        self.error(start, self.line, LexError::Unsupported(what))
    }

    // ─── Operators ──────────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// Maximal munch over a one-byte lookahead.
    #[inline]
    fn one_or_two(&mut self, start: u32, second: u8, two: TokenKind, one: TokenKind) -> Token {
        if self.cursor.peek() == second {
            self.cursor.advance_n(2);
            self.token(start, two)
        } else {
            self.single(start, one)
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Lookup table for identifier continuation bytes: `[a-zA-Z0-9_]`.
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation, reason = "i < 256")]
        let b = i as u8;
        table[i as usize] = matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` and `Scanner` directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = crate::SourceBuffer::new(source);
    Scanner::new(buf.cursor()).collect()
}
