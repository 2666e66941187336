//! Constant folding of single operations.

use kiln_ir::{BuiltinType, LeafFlags, Span, TypeDescriptor};

use crate::op_info::{BinaryOp, UnaryOp};
use crate::{Operand, OperandFlags};

/// Result of folding one operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Folded {
    pub operand: Operand,
    /// Signed arithmetic wrapped around on signed operands.
    pub wrapped: bool,
}

/// Apply a prefix operator. `span` covers the operator token.
pub(crate) fn fold_unary(op: UnaryOp, x: Operand, span: Span) -> Folded {
    let span = span.merge(x.span);
    let (ty, value, overflow) = match op {
        UnaryOp::Plus => (x.ty, x.value, false),
        UnaryOp::Neg => {
            let (value, overflow) = x.value.overflowing_neg();
            (x.ty, value, overflow)
        }
        UnaryOp::Not => (
            TypeDescriptor::leaf(BuiltinType::Bool, LeafFlags::empty()),
            i64::from(x.value == 0),
            false,
        ),
        UnaryOp::BitNot => (x.ty, !x.value, false),
    };
    Folded {
        operand: Operand::folded(ty, OperandFlags::empty(), value, span),
        wrapped: overflow && !x.is_unsigned(),
    }
}

/// Apply an infix operator.
pub(crate) fn fold_binary(op: BinaryOp, lhs: Operand, rhs: Operand) -> Folded {
    let span = lhs.span.merge(rhs.span);
    let (a, b) = (lhs.value, rhs.value);
    let (value, overflow) = match op {
        BinaryOp::Add => a.overflowing_add(b),
        BinaryOp::Sub => a.overflowing_sub(b),
        BinaryOp::Mul => a.overflowing_mul(b),
        BinaryOp::BitAnd => (a & b, false),
        BinaryOp::BitXor => (a ^ b, false),
        BinaryOp::BitOr => (a | b, false),
        BinaryOp::Eq => (i64::from(a == b), false),
        BinaryOp::NotEq => (i64::from(a != b), false),
    };

    let unsigned = lhs.is_unsigned() || rhs.is_unsigned();
    let (ty, flags) = if op.is_comparison() {
        (
            TypeDescriptor::leaf(BuiltinType::Bool, LeafFlags::empty()),
            OperandFlags::RESULT_OF_COMPARISON,
        )
    } else {
        (
            TypeDescriptor::int_literal(Operand::common_builtin(&lhs, &rhs), unsigned),
            OperandFlags::empty(),
        )
    };

    Folded {
        operand: Operand::folded(ty, flags, value, span),
        wrapped: overflow && !unsigned,
    }
}
