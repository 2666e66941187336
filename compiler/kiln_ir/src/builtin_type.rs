//! Builtin scalar type kinds.

use std::fmt;

/// Builtin scalar kinds.
///
/// Integer kinds are named by width only (`g` for "general"); signedness is
/// carried separately as a leaf flag on [`TypeDescriptor`](crate::TypeDescriptor).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(u8)]
pub enum BuiltinType {
    #[default]
    None = 0,
    Void = 1,
    Bool = 2,
    G8 = 3,
    G16 = 4,
    G32 = 5,
    G64 = 6,
    Fp16 = 7,
    Fp32 = 8,
    Fp64 = 9,
}

impl BuiltinType {
    /// Width of an integer literal holding `raw`: 32-bit when it fits, else 64-bit.
    #[inline]
    pub const fn for_int_literal(raw: u64) -> Self {
        if raw >> 32 == 0 {
            BuiltinType::G32
        } else {
            BuiltinType::G64
        }
    }

    /// Size in bits, `0` for `none`/`void`.
    pub const fn bits(self) -> u32 {
        match self {
            BuiltinType::None | BuiltinType::Void => 0,
            BuiltinType::Bool | BuiltinType::G8 => 8,
            BuiltinType::G16 | BuiltinType::Fp16 => 16,
            BuiltinType::G32 | BuiltinType::Fp32 => 32,
            BuiltinType::G64 | BuiltinType::Fp64 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::None => "none",
            BuiltinType::Void => "void",
            BuiltinType::Bool => "bool",
            BuiltinType::G8 => "g8",
            BuiltinType::G16 => "g16",
            BuiltinType::G32 => "g32",
            BuiltinType::G64 => "g64",
            BuiltinType::Fp16 => "fp16",
            BuiltinType::Fp32 => "fp32",
            BuiltinType::Fp64 => "fp64",
        }
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_width_boundary() {
        assert_eq!(BuiltinType::for_int_literal(0), BuiltinType::G32);
        assert_eq!(
            BuiltinType::for_int_literal(u64::from(u32::MAX)),
            BuiltinType::G32
        );
        assert_eq!(
            BuiltinType::for_int_literal(u64::from(u32::MAX) + 1),
            BuiltinType::G64
        );
        assert_eq!(BuiltinType::for_int_literal(u64::MAX), BuiltinType::G64);
    }

    #[test]
    fn widths() {
        assert_eq!(BuiltinType::Fp16.bits(), 16);
        assert_eq!(BuiltinType::G64.bits(), 64);
        assert_eq!(BuiltinType::Void.bits(), 0);
    }
}
