//! Constant-expression evaluator and compile driver for Kiln.
//!
//! A compilation unit is `void main(){` followed by `static_assert(expr);`
//! statements. Each expression is folded to an immediate value while it is
//! parsed; an assertion that folds to zero becomes a diagnostic.
//!
//! ```text
//! source ─► Scanner ─► TokenRing ─► evaluate_expression ─► DiagnosticSink
//! ```

mod error;
mod expr;
mod op_info;
mod operand;
mod ring;
mod stmt;

pub use error::{CompileError, Unsupported};
pub use expr::{ExprFlags, STACK_CAPACITY};
pub use op_info::{BinaryOp, Op, OpInfo, UnaryOp};
pub use operand::{Operand, OperandFlags};
pub use ring::{TokenRing, RING_CAPACITY};

use kiln_diagnostic::{Diagnostic, DiagnosticSink};
use kiln_ir::{LexError, Token, TokenKind};
use kiln_lexer_core::{Scanner, SourceBuffer};
use tracing::debug;

/// Boilerplate every compilation unit starts with.
pub const PRELUDE: &str = "void main(){";

/// Shortest source `compile` accepts.
pub const MIN_SOURCE_LEN: usize = 20;

/// Parser state: token lookahead plus the diagnostic sink.
pub struct Parser<'src, 'sink> {
    ring: TokenRing<'src>,
    sink: &'sink mut DiagnosticSink,
}

impl<'src, 'sink> Parser<'src, 'sink> {
    pub fn new(scanner: Scanner<'src>, sink: &'sink mut DiagnosticSink) -> Self {
        Parser {
            ring: TokenRing::new(scanner),
            sink,
        }
    }

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Token {
        self.ring.peek()
    }

    /// Consume `kind` or fail.
    ///
    /// A lex-error token in its place is reported to the sink first.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if let Some(tok) = self.ring.eat(kind) {
            return Ok(tok);
        }
        let found = self.ring.peek();
        match found.kind {
            TokenKind::LexError(error) => Err(self.lex_error(error, found)),
            other => Err(CompileError::UnexpectedToken {
                expected: kind,
                found: other,
                line: found.line,
            }),
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) -> Result<(), CompileError> {
        self.sink.push(diagnostic)?;
        Ok(())
    }

    /// Record a lex-error token and build the error that stops compilation.
    #[cold]
    pub(crate) fn lex_error(&mut self, error: LexError, tok: Token) -> CompileError {
        if let Err(full) = self.report(Diagnostic::lex_error(error, tok.line, tok.span)) {
            return full;
        }
        match error {
            LexError::Unsupported(what) => {
                CompileError::unsupported(Unsupported::Literal(what), tok.line)
            }
            _ => CompileError::Lex {
                error,
                line: tok.line,
            },
        }
    }
}

/// Compile one unit, appending failed assertions (and the lexical problems
/// met on the way) to `sink`.
///
/// Diagnostics pushed before an error is returned stay in the sink.
///
/// # Errors
///
/// [`CompileError::MissingPrelude`] when `source` is shorter than
/// [`MIN_SOURCE_LEN`] or does not start with [`PRELUDE`]; otherwise the first
/// construct that cannot be compiled.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str, sink: &mut DiagnosticSink) -> Result<(), CompileError> {
    if source.len() < MIN_SOURCE_LEN || !source.starts_with(PRELUDE) {
        return Err(CompileError::MissingPrelude);
    }

    let buf = SourceBuffer::new(source);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "PRELUDE is 12 bytes"
    )]
    let body = buf.cursor_at(PRELUDE.len() as u32);
    let mut parser = Parser::new(Scanner::new(body), sink);
    let result = parser.parse_body();
    debug!(diagnostics = parser.sink.len(), ok = result.is_ok(), "compiled");
    result
}
