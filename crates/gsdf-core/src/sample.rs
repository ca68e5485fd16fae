//! Scalar sample types.
//!
//! Transfer functions evaluate in `f64` and convert back to the caller's
//! type, so a single implementation serves every float width.
//!
//! # Types
//!
//! - `f64` - Double precision, the evaluation type
//! - `f32` - Single precision
//! - `f16` - Half precision (via the `half` crate)
//!
//! Conversions are plain IEEE-754 casts: NaN stays NaN, infinities stay
//! infinite, and values beyond the target range become infinite.
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support
//!
//! # Used By
//!
//! - [`crate::array::Array`] - element type
//! - [`crate::elementwise::Elementwise`] - scalar and container impls

use half::f16;
use std::fmt;

/// Trait for scalar float sample types.
///
/// # Example
///
/// ```
/// use gsdf_core::Sample;
///
/// let v: f32 = Sample::from_f64(0.25);
/// assert_eq!(v.to_f64(), 0.25);
///
/// let h: half::f16 = Sample::from_f64(f64::NAN);
/// assert!(h.to_f64().is_nan());
/// ```
pub trait Sample: Copy + Clone + Default + Send + Sync + PartialOrd + fmt::Debug + 'static {
    /// Number of bits in the representation.
    const BITS: u32;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    fn from_f64(v: f64) -> Self;

    /// Zero value.
    fn zero() -> Self;

    /// Returns `true` if the value is neither NaN nor infinite.
    #[inline]
    fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }
}

impl Sample for f64 {
    const BITS: u32 = 64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Sample for f32 {
    const BITS: u32 = 32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Sample for f16 {
    const BITS: u32 = 16;

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn zero() -> Self {
        f16::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(<f64 as Sample>::BITS, 64);
        assert_eq!(<f32 as Sample>::BITS, 32);
        assert_eq!(<f16 as Sample>::BITS, 16);
    }

    #[test]
    fn test_special_values_survive() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s: f32 = Sample::from_f64(v);
            let h: f16 = Sample::from_f64(v);
            assert_eq!(s.to_f64().is_nan(), v.is_nan());
            assert_eq!(h.to_f64().is_nan(), v.is_nan());
            assert!(!Sample::is_finite(s));
            assert!(!Sample::is_finite(h));
        }
    }

    #[test]
    fn test_f16_overflow_is_infinite() {
        let h: f16 = Sample::from_f64(1.0e6);
        assert_eq!(h.to_f64(), f64::INFINITY);
    }

    #[test]
    fn test_f32_precision() {
        let v: f32 = Sample::from_f64(130.0662);
        assert!((v.to_f64() - 130.0662).abs() < 1e-5);
    }
}
