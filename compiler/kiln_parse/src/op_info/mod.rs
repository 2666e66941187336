//! Operator table for precedence climbing.
//!
//! Each recognised operator token maps to an [`OpInfo`]: precedence (higher
//! binds tighter), associativity and the operation it performs. Two synthetic
//! entries bound the operator stack: [`OpInfo::SENTINEL`] sits at the bottom
//! and is never reduced; [`OpInfo::COLLAPSE`] forces every real operator off
//! the stack at the end of an expression.

use kiln_ir::TokenKind;

/// Prefix operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum UnaryOp {
    Plus = 0,
    Neg = 1,
    /// Logical not: `!x` is 1 when `x == 0`.
    Not = 2,
    BitNot = 3,
}

/// Infix operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum BinaryOp {
    BitAnd = 4,
    BitOr = 5,
    BitXor = 6,
    Add = 7,
    Sub = 8,
    Mul = 9,
    Eq = 10,
    NotEq = 11,
}

/// Operation attached to an operator-stack entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Assign,
    CallOrFunctionalCast,
    OpenParen,
    /// Bottom-of-stack marker.
    Sentinel,
    /// End-of-expression marker.
    FinalCollapse,
}

impl Op {
    /// Stable numeric code, stored in a diagnostic's misc byte.
    pub const fn code(self) -> u8 {
        match self {
            Op::Unary(op) => op as u8,
            Op::Binary(op) => op as u8,
            Op::Assign => 12,
            Op::CallOrFunctionalCast => 13,
            Op::OpenParen => 14,
            Op::Sentinel | Op::FinalCollapse => u8::MAX,
        }
    }

    /// Operands consumed when the operator is applied.
    pub const fn arity(self) -> usize {
        match self {
            Op::Unary(_) | Op::CallOrFunctionalCast => 1,
            Op::Binary(_) | Op::Assign => 2,
            Op::OpenParen | Op::Sentinel | Op::FinalCollapse => 0,
        }
    }

    /// The constant folder can apply this operation.
    pub const fn is_foldable(self) -> bool {
        matches!(self, Op::Unary(_) | Op::Binary(_))
    }
}

impl BinaryOp {
    pub const fn is_comparison(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::NotEq)
    }
}

/// Decoded operator-table entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OpInfo {
    pub prec: u8,
    pub right_assoc: bool,
    pub op: Op,
}

impl OpInfo {
    pub const SENTINEL: OpInfo = OpInfo::left(0, Op::Sentinel);
    pub const COLLAPSE: OpInfo = OpInfo::left(1, Op::FinalCollapse);

    const CALL: OpInfo = OpInfo::left(29, Op::CallOrFunctionalCast);
    const MUL: OpInfo = OpInfo::left(26, Op::Binary(BinaryOp::Mul));
    const ADD: OpInfo = OpInfo::left(25, Op::Binary(BinaryOp::Add));
    const SUB: OpInfo = OpInfo::left(25, Op::Binary(BinaryOp::Sub));
    const EQ: OpInfo = OpInfo::left(21, Op::Binary(BinaryOp::Eq));
    const NOT_EQ: OpInfo = OpInfo::left(21, Op::Binary(BinaryOp::NotEq));
    const BIT_AND: OpInfo = OpInfo::left(20, Op::Binary(BinaryOp::BitAnd));
    const BIT_XOR: OpInfo = OpInfo::left(19, Op::Binary(BinaryOp::BitXor));
    const BIT_OR: OpInfo = OpInfo::left(18, Op::Binary(BinaryOp::BitOr));
    const ASSIGN: OpInfo = OpInfo::right(15, Op::Assign);
    const OPEN_PAREN: OpInfo = OpInfo::left(13, Op::OpenParen);

    const UNARY_PREC: u8 = 28;

    const fn left(prec: u8, op: Op) -> Self {
        OpInfo {
            prec,
            right_assoc: false,
            op,
        }
    }

    const fn right(prec: u8, op: Op) -> Self {
        OpInfo {
            prec,
            right_assoc: true,
            op,
        }
    }

    const fn unary(op: UnaryOp) -> Self {
        OpInfo::right(Self::UNARY_PREC, Op::Unary(op))
    }

    /// Entry for `kind` in infix position (after an operand).
    pub const fn infix(kind: TokenKind) -> Option<OpInfo> {
        let info = match kind {
            TokenKind::LParen => Self::CALL,
            TokenKind::Star => Self::MUL,
            TokenKind::Plus => Self::ADD,
            TokenKind::Minus => Self::SUB,
            TokenKind::EqEq => Self::EQ,
            TokenKind::NotEq => Self::NOT_EQ,
            TokenKind::Amp => Self::BIT_AND,
            TokenKind::Caret => Self::BIT_XOR,
            TokenKind::Pipe => Self::BIT_OR,
            TokenKind::Eq => Self::ASSIGN,
            _ => return None,
        };
        Some(info)
    }

    /// Entry for `kind` in prefix position (where an operand is expected).
    pub const fn prefix(kind: TokenKind) -> Option<OpInfo> {
        let info = match kind {
            TokenKind::Plus => Self::unary(UnaryOp::Plus),
            TokenKind::Minus => Self::unary(UnaryOp::Neg),
            TokenKind::Bang => Self::unary(UnaryOp::Not),
            TokenKind::Tilde => Self::unary(UnaryOp::BitNot),
            TokenKind::LParen => Self::OPEN_PAREN,
            _ => return None,
        };
        Some(info)
    }

    /// Whether `stacked` must be applied before `incoming` is pushed.
    ///
    /// Higher precedence always reduces first. At equal precedence a
    /// left-associative incoming operator reduces the stacked one; a
    /// right-associative one stacks on top of it. The operation itself never
    /// takes part in the comparison.
    #[inline]
    pub const fn should_reduce(stacked: OpInfo, incoming: OpInfo) -> bool {
        stacked.prec > incoming.prec || (stacked.prec == incoming.prec && !incoming.right_assoc)
    }
}
