//! Operands on the evaluator's stack.

use bitflags::bitflags;
use kiln_ir::{BuiltinType, NumberLiteral, Span, TypeDescriptor};

bitflags! {
    /// Facts about how an operand was produced.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct OperandFlags: u8 {
        /// Value is known at compile time and stored inline.
        const IMMEDIATE = 1 << 0;
        /// Produced by `==`/`!=`; `a & b == c` is the usual suspect.
        const RESULT_OF_COMPARISON = 1 << 2;
        /// A bare literal or name with no operator applied.
        const ALLOW_IMPLICIT_CVT_TO_BOOL = 1 << 3;
        const RESULT_OF_ASSIGNMENT = 1 << 4;
        const RESULT_OF_DISCARDABLE_CALL = 1 << 5;
    }
}

/// A typed value on the operand stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operand {
    pub ty: TypeDescriptor,
    pub flags: OperandFlags,
    /// Immediate value. All current arithmetic is signed 64-bit.
    pub value: i64,
    /// Source covered by the operand's sub-expression.
    pub span: Span,
}

impl Operand {
    /// Immediate operand for a number literal.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "literals are reinterpreted as two's complement i64"
    )]
    pub fn literal(lit: NumberLiteral, span: Span) -> Self {
        Operand {
            ty: TypeDescriptor::int_literal(lit.builtin, lit.unsigned),
            flags: OperandFlags::IMMEDIATE | OperandFlags::ALLOW_IMPLICIT_CVT_TO_BOOL,
            value: lit.raw as i64,
            span,
        }
    }

    /// Immediate result of a fold.
    pub fn folded(ty: TypeDescriptor, flags: OperandFlags, value: i64, span: Span) -> Self {
        Operand {
            ty,
            flags: flags | OperandFlags::IMMEDIATE,
            value,
            span,
        }
    }

    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.flags.contains(OperandFlags::IMMEDIATE)
    }

    pub fn is_unsigned(&self) -> bool {
        self.ty.is_unsigned()
    }

    /// Truth value of an immediate.
    pub fn is_true(&self) -> bool {
        self.value != 0
    }

    /// Builtin kind wide enough for both operands of a binary operation.
    pub(crate) fn common_builtin(lhs: &Operand, rhs: &Operand) -> BuiltinType {
        if lhs.ty.builtin().bits() >= rhs.ty.builtin().bits() {
            lhs.ty.builtin()
        } else {
            rhs.ty.builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_ir::LeafFlags;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn literal_operand() {
        let op = Operand::literal(NumberLiteral::new(5, true), Span::new(1, 3));
        assert!(op.is_immediate());
        assert!(op.flags.contains(OperandFlags::ALLOW_IMPLICIT_CVT_TO_BOOL));
        assert_eq!(op.ty.builtin(), BuiltinType::G32);
        assert_eq!(op.ty.leaf_flags(), LeafFlags::UNSIGNED);
        assert_eq!(op.value, 5);
    }

    #[test]
    fn max_u64_literal_wraps_to_minus_one() {
        let op = Operand::literal(NumberLiteral::new(u64::MAX, false), Span::DUMMY);
        assert_eq!(op.value, -1);
        assert_eq!(op.ty.builtin(), BuiltinType::G64);
    }

    #[test]
    fn common_builtin_picks_wider() {
        let small = Operand::literal(NumberLiteral::new(1, false), Span::DUMMY);
        let big = Operand::literal(NumberLiteral::new(1 << 40, false), Span::DUMMY);
        assert_eq!(Operand::common_builtin(&small, &big), BuiltinType::G64);
        assert_eq!(Operand::common_builtin(&big, &small), BuiltinType::G64);
        assert_eq!(Operand::common_builtin(&small, &small), BuiltinType::G32);
    }
}
