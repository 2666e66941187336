//! Fixed-size lookahead over the scanner.
//!
//! Tokens are scanned on demand into a small ring. `peek` and `advance` hand
//! tokens out by value, so nothing ever holds a reference into a slot that a
//! later refill could overwrite.

use kiln_ir::{Token, TokenKind};
use kiln_lexer_core::Scanner;
use tracing::trace;

/// Number of ring slots. Must be a power of two.
pub const RING_CAPACITY: usize = 8;
const RING_MASK: usize = RING_CAPACITY - 1;

const _: () = assert!(RING_CAPACITY.is_power_of_two() && RING_CAPACITY >= 2);

/// Lookahead ring over a [`Scanner`].
pub struct TokenRing<'a> {
    scanner: Scanner<'a>,
    slots: [Token; RING_CAPACITY],
    /// Slot of the next token to hand out.
    head: usize,
    /// Scanned tokens not yet handed out.
    buffered: usize,
}

impl<'a> TokenRing<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        TokenRing {
            scanner,
            slots: [Token::dummy(TokenKind::Eof); RING_CAPACITY],
            head: 0,
            buffered: 0,
        }
    }

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Token {
        self.fill(1);
        self.slots[self.head]
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Token {
        let tok = self.peek();
        self.head = (self.head + 1) & RING_MASK;
        self.buffered -= 1;
        trace!(kind = ?tok.kind, line = tok.line, "advance");
        tok
    }

    /// Consume the next token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek().kind == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    fn fill(&mut self, wanted: usize) {
        while self.buffered < wanted {
            let slot = (self.head + self.buffered) & RING_MASK;
            self.slots[slot] = self.scanner.next_token();
            self.buffered += 1;
        }
    }
}
