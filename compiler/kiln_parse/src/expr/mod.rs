//! Operator-precedence constant-expression evaluator.
//!
//! Classic two-stack precedence climbing with the arithmetic folded in: no
//! tree is built. Operands are pushed as they are scanned; before an operator
//! is pushed, every stacked operator that binds at least as tightly is
//! applied to the operand stack. At the end a synthetic
//! [`OpInfo::COLLAPSE`] operator drains the stack, which must then hold
//! exactly one operand above the sentinel.

mod fold;

use bitflags::bitflags;
use kiln_diagnostic::Diagnostic;
use kiln_ir::{Span, TokenKind};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::op_info::{Op, OpInfo};
use crate::{CompileError, Operand, Parser, Unsupported};

use fold::{fold_binary, fold_unary, Folded};

/// Capacity of the operand stack and of the operator stack (sentinel included).
pub const STACK_CAPACITY: usize = 32;

bitflags! {
    /// How an expression is parsed.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ExprFlags: u8 {
        /// The result must be an immediate value.
        const MUST_BE_CONSTEXPR = 1 << 0;
        /// A `,` continues the expression instead of ending it.
        const COMMA_CONTINUES = 1 << 1;
    }
}

/// Operator-stack entry.
#[derive(Copy, Clone, Debug)]
struct StackedOp {
    info: OpInfo,
    /// Operator token.
    span: Span,
    line: u32,
}

impl StackedOp {
    const fn marker(info: OpInfo, line: u32) -> Self {
        StackedOp {
            info,
            span: Span::DUMMY,
            line,
        }
    }
}

struct Stacks {
    operands: SmallVec<[Operand; STACK_CAPACITY]>,
    operators: SmallVec<[StackedOp; STACK_CAPACITY]>,
}

impl Stacks {
    fn new(line: u32) -> Self {
        Stacks {
            operands: SmallVec::new(),
            operators: smallvec![StackedOp::marker(OpInfo::SENTINEL, line)],
        }
    }

    #[cold]
    fn shape_error(&self, line: u32) -> CompileError {
        CompileError::ExpressionShape {
            operands: self.operands.len(),
            operators: self.operators.len(),
            line,
        }
    }
}

impl Parser<'_, '_> {
    /// Parse and fold one expression, stopping at the first token that cannot
    /// continue it (`)`, `;`, a `,` without [`ExprFlags::COMMA_CONTINUES`],
    /// ...). That token is left unconsumed.
    ///
    /// Only integer literals, prefix `+ - ! ~` and infix `* + - & ^ | == !=`
    /// are evaluated; every other construct is an
    /// [`Unsupported`](CompileError::Unsupported) error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate_expression(&mut self, flags: ExprFlags) -> Result<Operand, CompileError> {
        let start_line = self.ring.peek().line;
        let mut stacks = Stacks::new(start_line);
        let mut after_operand = false;

        loop {
            let tok = self.ring.peek();
            match tok.kind {
                TokenKind::Number(lit) => {
                    if after_operand {
                        return Err(CompileError::unsupported(
                            Unsupported::AdjacentOperands,
                            tok.line,
                        ));
                    }
                    if stacks.operands.len() >= STACK_CAPACITY {
                        return Err(CompileError::unsupported(
                            Unsupported::OperandStackOverflow,
                            tok.line,
                        ));
                    }
                    self.ring.advance();
                    stacks.operands.push(Operand::literal(lit, tok.span));
                    after_operand = true;
                }
                TokenKind::LexError(error) => return Err(self.lex_error(error, tok)),
                TokenKind::Name => {
                    return Err(CompileError::unsupported(Unsupported::NamedValue, tok.line))
                }
                TokenKind::Comma => {
                    if flags.contains(ExprFlags::COMMA_CONTINUES) {
                        return Err(CompileError::unsupported(
                            Unsupported::CommaExpression,
                            tok.line,
                        ));
                    }
                    break;
                }
                kind => {
                    let info = operator_for(kind, after_operand)
                        .map_err(|feature| CompileError::unsupported(feature, tok.line))?;
                    let Some(info) = info else {
                        break;
                    };
                    self.ring.advance();
                    self.reduce(&mut stacks, info)?;
                    if stacks.operators.len() >= STACK_CAPACITY {
                        return Err(CompileError::unsupported(
                            Unsupported::OperatorStackOverflow,
                            tok.line,
                        ));
                    }
                    stacks.operators.push(StackedOp {
                        info,
                        span: tok.span,
                        line: tok.line,
                    });
                    after_operand = false;
                }
            }
        }

        let end_line = self.ring.peek().line;
        self.reduce(&mut stacks, OpInfo::COLLAPSE)?;
        stacks
            .operators
            .push(StackedOp::marker(OpInfo::COLLAPSE, end_line));

        let drained = matches!(
            stacks.operators.as_slice(),
            [bottom, top] if bottom.info.op == Op::Sentinel && top.info.op == Op::FinalCollapse
        );
        let (true, &[result]) = (drained, stacks.operands.as_slice()) else {
            return Err(stacks.shape_error(end_line));
        };

        if flags.contains(ExprFlags::MUST_BE_CONSTEXPR) && !result.is_immediate() {
            return Err(CompileError::unsupported(
                Unsupported::NonConstantExpression,
                start_line,
            ));
        }
        debug!(value = result.value, "expression folded");
        Ok(result)
    }

    /// Apply stacked operators while they bind at least as tightly as
    /// `incoming`.
    fn reduce(&mut self, stacks: &mut Stacks, incoming: OpInfo) -> Result<(), CompileError> {
        while let Some(&top) = stacks.operators.last() {
            if !OpInfo::should_reduce(top.info, incoming) {
                break;
            }
            stacks.operators.pop();
            self.apply(stacks, top)?;
        }
        Ok(())
    }

    fn apply(&mut self, stacks: &mut Stacks, top: StackedOp) -> Result<(), CompileError> {
        let op = top.info.op;
        if !op.is_foldable() || stacks.operands.len() < op.arity() {
            return Err(stacks.shape_error(top.line));
        }
        let at = stacks.operands.len() - op.arity();
        let Folded { operand, wrapped } = match (op, &stacks.operands[at..]) {
            (Op::Unary(unary), &[x]) => fold_unary(unary, x, top.span),
            (Op::Binary(binary), &[lhs, rhs]) => fold_binary(binary, lhs, rhs),
            _ => return Err(stacks.shape_error(top.line)),
        };
        stacks.operands.truncate(at);

        trace!(op = ?top.info.op, ty = %operand.ty, value = operand.value, wrapped, "fold");
        if wrapped {
            self.report(Diagnostic::no_sign_wrap(
                top.info.op.code(),
                top.line,
                operand.span,
            ))?;
        }
        stacks.operands.push(operand);
        Ok(())
    }
}

/// Operator-table entry for `kind` in the current position.
///
/// `Ok(None)` means `kind` cannot continue an expression and ends it.
fn operator_for(kind: TokenKind, after_operand: bool) -> Result<Option<OpInfo>, Unsupported> {
    let info = if after_operand {
        OpInfo::infix(kind)
    } else {
        OpInfo::prefix(kind)
    };

    if let Some(info) = info {
        return match info.op {
            op if op.is_foldable() => Ok(Some(info)),
            Op::CallOrFunctionalCast => Err(Unsupported::FunctionCall),
            Op::OpenParen => Err(Unsupported::ParenthesizedExpr),
            _ => Err(Unsupported::Operator(kind)),
        };
    }

    if after_operand && OpInfo::prefix(kind).is_some() {
        return Err(Unsupported::PrefixAfterOperand);
    }
    if !after_operand && OpInfo::infix(kind).is_some() {
        return Err(Unsupported::MissingLeftOperand);
    }
    match kind {
        TokenKind::PlusPlus
        | TokenKind::MinusMinus
        | TokenKind::AmpAmp
        | TokenKind::PipePipe
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Shl
        | TokenKind::Shr => Err(Unsupported::Operator(kind)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests;
