//! Statement parsing.

use kiln_diagnostic::Diagnostic;
use kiln_ir::{Span, TokenKind};
use tracing::debug;

use crate::{CompileError, ExprFlags, Parser, Unsupported};

impl Parser<'_, '_> {
    /// Parse statements until `}` or end of input.
    pub(crate) fn parse_body(&mut self) -> Result<(), CompileError> {
        loop {
            let tok = self.ring.peek();
            match tok.kind {
                TokenKind::Eof | TokenKind::RBrace => return Ok(()),
                TokenKind::KwStaticAssert => self.parse_static_assert()?,
                TokenKind::LexError(error) => return Err(self.lex_error(error, tok)),
                _ => return Err(CompileError::unsupported(Unsupported::Statement, tok.line)),
            }
        }
    }

    /// `static_assert ( expr ) ;`
    fn parse_static_assert(&mut self) -> Result<(), CompileError> {
        let keyword = self.ring.advance();
        let open = self.expect(TokenKind::LParen)?;
        let value = self.evaluate_expression(ExprFlags::MUST_BE_CONSTEXPR)?;
        let close = self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;

        if !value.is_immediate() {
            return Err(CompileError::unsupported(
                Unsupported::NonConstantExpression,
                keyword.line,
            ));
        }
        if !value.is_true() {
            debug!(line = keyword.line, "static assertion failed");
            let expr = Span::new(open.span.end, close.span.start);
            self.report(Diagnostic::static_assert_failed(keyword.line, expr))?;
        }
        Ok(())
    }
}
