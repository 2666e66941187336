//! Type descriptors for evaluator operands.
//!
//! Only scalar leaves exist so far. Callers query the decoded fields
//! (builtin kind, signedness, reference/readonly) and never see a bit layout.

use bitflags::bitflags;
use std::fmt;

use crate::BuiltinType;

bitflags! {
    /// Qualifiers attached to a leaf type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LeafFlags: u8 {
        const UNSIGNED = 1 << 0;
        /// Names a storage location rather than a value.
        const REFERENCE = 1 << 1;
        const READONLY = 1 << 2;
    }
}

/// Describes the type of an operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDescriptor {
    /// A builtin scalar with qualifiers.
    Leaf {
        builtin: BuiltinType,
        flags: LeafFlags,
    },
}

impl TypeDescriptor {
    #[inline]
    pub const fn leaf(builtin: BuiltinType, flags: LeafFlags) -> Self {
        TypeDescriptor::Leaf { builtin, flags }
    }

    /// Leaf type of an integer literal, honouring its `u` suffix.
    pub const fn int_literal(builtin: BuiltinType, unsigned: bool) -> Self {
        let flags = if unsigned {
            LeafFlags::UNSIGNED
        } else {
            LeafFlags::empty()
        };
        TypeDescriptor::Leaf { builtin, flags }
    }

    #[inline]
    pub const fn builtin(self) -> BuiltinType {
        match self {
            TypeDescriptor::Leaf { builtin, .. } => builtin,
        }
    }

    #[inline]
    pub const fn leaf_flags(self) -> LeafFlags {
        match self {
            TypeDescriptor::Leaf { flags, .. } => flags,
        }
    }

    pub const fn is_unsigned(self) -> bool {
        self.leaf_flags().contains(LeafFlags::UNSIGNED)
    }

    pub const fn is_reference(self) -> bool {
        self.leaf_flags().contains(LeafFlags::REFERENCE)
    }

    pub const fn is_readonly(self) -> bool {
        self.leaf_flags().contains(LeafFlags::READONLY)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_readonly() {
            f.write_str("readonly ")?;
        }
        if self.is_unsigned() {
            f.write_str("unsigned ")?;
        }
        write!(f, "{}", self.builtin())?;
        if self.is_reference() {
            f.write_str("&")?;
        }
        Ok(())
    }
}
