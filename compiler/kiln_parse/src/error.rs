//! Compile error types.
//!
//! Every condition the front end cannot handle yet becomes a
//! [`CompileError`] returned to the caller. Diagnostics already pushed to the
//! sink stay there.

use kiln_ir::{LexError, TokenKind, UnsupportedLiteral};

use crate::STACK_CAPACITY;

/// A construct the front end recognises but cannot compile yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Unsupported {
    /// Octal, hex, binary or float literal, digit separator, `l` suffix.
    #[error("{0}")]
    Literal(UnsupportedLiteral),
    /// `( expr )` inside an expression.
    #[error("parenthesized sub-expressions")]
    ParenthesizedExpr,
    /// `f(...)` or a functional cast.
    #[error("function calls")]
    FunctionCall,
    /// `,` inside an expression that allows comma continuation.
    #[error("comma expressions")]
    CommaExpression,
    /// An identifier used as a value.
    #[error("named values")]
    NamedValue,
    /// An operator outside the constant-folding subset (`=`, `<<`, `&&`, ...).
    #[error("the {0} operator in constant expressions")]
    Operator(TokenKind),
    /// A statement other than `static_assert`.
    #[error("statements other than `static_assert`")]
    Statement,
    #[error("expressions with more than {} pending operands", STACK_CAPACITY)]
    OperandStackOverflow,
    #[error("expressions with more than {} pending operators", STACK_CAPACITY - 1)]
    OperatorStackOverflow,
    /// Two operands with no operator between them.
    #[error("two operands without an operator between them")]
    AdjacentOperands,
    /// A binary-only operator where an operand was expected.
    #[error("a binary operator without a left operand")]
    MissingLeftOperand,
    /// A prefix-only operator directly after an operand.
    #[error("a prefix operator directly after an operand")]
    PrefixAfterOperand,
    /// The expression did not fold to an immediate value.
    #[error("non-constant expressions")]
    NonConstantExpression,
}

/// Why compilation stopped.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum CompileError {
    #[error("source must start with `void main(){{` and be at least 20 bytes long")]
    MissingPrelude,

    #[error("line {line}: {error}")]
    Lex { error: LexError, line: u32 },

    #[error("line {line}: not supported yet: {feature}")]
    Unsupported { feature: Unsupported, line: u32 },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        line: u32,
    },

    #[error("line {line}: malformed expression ({operands} operands, {operators} operators left)")]
    ExpressionShape {
        operands: usize,
        operators: usize,
        line: u32,
    },

    #[error("too many diagnostics (capacity {capacity})")]
    DiagnosticCapacity { capacity: usize },
}

impl CompileError {
    pub(crate) fn unsupported(feature: Unsupported, line: u32) -> Self {
        CompileError::Unsupported { feature, line }
    }

    /// Source line the error points at, if any.
    pub fn line(&self) -> Option<u32> {
        match self {
            CompileError::Lex { line, .. }
            | CompileError::Unsupported { line, .. }
            | CompileError::UnexpectedToken { line, .. }
            | CompileError::ExpressionShape { line, .. } => Some(*line),
            CompileError::MissingPrelude | CompileError::DiagnosticCapacity { .. } => None,
        }
    }
}

impl From<kiln_diagnostic::SinkFull> for CompileError {
    fn from(full: kiln_diagnostic::SinkFull) -> Self {
        CompileError::DiagnosticCapacity {
            capacity: full.capacity,
        }
    }
}
