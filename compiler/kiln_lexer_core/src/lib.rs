//! Low-level scanner for Kiln.
//!
//! Source text is copied into a [`SourceBuffer`] whose content is followed by
//! a `0x00` sentinel and zero padding, so the [`Cursor`] can peek one or two
//! bytes past any position without bounds bookkeeping. The [`Scanner`] turns
//! that byte stream into [`Token`](kiln_ir::Token) values one call at a time,
//! skipping whitespace and comments and tracking line numbers.
//!
//! Lexical errors are ordinary tokens ([`TokenKind::LexError`]); the scanner
//! itself never fails.
//!
//! [`TokenKind::LexError`]: kiln_ir::TokenKind::LexError

mod cursor;
mod keywords;
mod scanner;
mod source_buffer;

pub use cursor::{BlockComment, Cursor};
pub use scanner::{tokenize, Scanner, ScannerSnapshot};
pub use source_buffer::SourceBuffer;
