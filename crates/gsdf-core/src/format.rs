//! Integer code depths.
//!
//! Quantized code values live in `[0, 2^bits - 1]`. The GSDF uses the
//! 10-bit convention (JND indices up to 1023); other depths are provided
//! for display driving levels.
//!
//! # Usage
//!
//! ```rust
//! use gsdf_core::BitDepth;
//!
//! assert_eq!(BitDepth::U10.max_code(), 1023);
//! assert_eq!(BitDepth::from_bits(12), Some(BitDepth::U12));
//! ```

/// Bit depth of an unsigned integer code.
///
/// # Variants
///
/// - `U8` - 8-bit [0, 255]
/// - `U10` - 10-bit [0, 1023] (GSDF JND index)
/// - `U12` - 12-bit [0, 4095]
/// - `U16` - 16-bit [0, 65535]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 10-bit unsigned integer.
    #[default]
    U10,
    /// 12-bit unsigned integer.
    U12,
    /// 16-bit unsigned integer.
    U16,
}

impl BitDepth {
    /// Number of bits per code.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U10 => 10,
            Self::U12 => 12,
            Self::U16 => 16,
        }
    }

    /// Largest code value, `2^bits - 1`.
    #[inline]
    pub const fn max_code(&self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Looks up a depth by bit count.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::U8),
            10 => Some(Self::U10),
            12 => Some(Self::U12),
            16 => Some(Self::U16),
            _ => None,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_code() {
        assert_eq!(BitDepth::U8.max_code(), 255);
        assert_eq!(BitDepth::U10.max_code(), 1023);
        assert_eq!(BitDepth::U12.max_code(), 4095);
        assert_eq!(BitDepth::U16.max_code(), 65535);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(BitDepth::from_bits(10), Some(BitDepth::U10));
        assert_eq!(BitDepth::from_bits(9), None);
        for depth in [BitDepth::U8, BitDepth::U10, BitDepth::U12, BitDepth::U16] {
            assert_eq!(BitDepth::from_bits(depth.bits()), Some(depth));
        }
    }

    #[test]
    fn test_default_is_jnd_depth() {
        assert_eq!(BitDepth::default(), BitDepth::U10);
        assert_eq!(BitDepth::default().to_string(), "10-bit");
    }
}
