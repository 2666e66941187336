//! Kiln IR - shared front-end types
//!
//! This crate contains the plain data types that flow between the Kiln
//! compiler phases:
//! - Spans for source locations
//! - Tokens produced by the scanner (`kiln_lexer_core`)
//! - Builtin type kinds and the leaf type descriptor consumed by the
//!   constant evaluator (`kiln_parse`)
//!
//! Every type here is `Copy`. Tokens never own source text; names refer back
//! into the source buffer through their [`Span`].

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builtin_type;
mod span;
mod token;
mod type_desc;

pub use builtin_type::BuiltinType;
pub use span::Span;
pub use token::{LexError, NumberLiteral, Token, TokenKind, UnsupportedLiteral, MAX_NAME_LEN};
pub use type_desc::{LeafFlags, TypeDescriptor};
