//! Integer code quantization.
//!
//! Affine mapping between normalized code values and unsigned integer
//! codes of a fixed bit depth:
//!
//! ```text
//! to_integer(v)   = round(v * max_code)
//! from_integer(c) = c / max_code
//! ```
//!
//! Nothing is clamped. A normalized value outside [0, 1] rounds to a code
//! outside `[0, max_code]`, and NaN or infinities stay non-finite. Rounding
//! is to nearest with ties to even.
//!
//! # Usage
//!
//! ```rust
//! use gsdf_transfer::quantize::JND_10BIT;
//!
//! assert_eq!(JND_10BIT.to_integer(0.5004862634), 512.0);
//! assert_eq!(JND_10BIT.from_integer(1023.0), 1.0);
//! ```

use gsdf_core::{BitDepth, Elementwise};

/// The 10-bit quantizer used by the GSDF integer modes.
pub const JND_10BIT: Quantizer = Quantizer::new(BitDepth::U10);

/// Maps between normalized code values and integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quantizer {
    depth: BitDepth,
}

impl Quantizer {
    /// Creates a quantizer for the given bit depth.
    pub const fn new(depth: BitDepth) -> Self {
        Self { depth }
    }

    /// Bit depth of the integer codes.
    #[inline]
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Largest code, `2^bits - 1`, as a float.
    #[inline]
    pub fn max_code(&self) -> f64 {
        self.depth.max_code() as f64
    }

    /// Normalized value to (rounded) integer code.
    #[inline]
    pub fn to_integer(&self, normalized: f64) -> f64 {
        (normalized * self.max_code()).round_ties_even()
    }

    /// Integer code to normalized value.
    #[inline]
    pub fn from_integer(&self, code: f64) -> f64 {
        code / self.max_code()
    }

    /// Applies [`to_integer`](Self::to_integer) element-wise.
    pub fn quantize<E: Elementwise>(&self, normalized: E) -> E::Output {
        let q = *self;
        normalized.map_elements(move |v| q.to_integer(v))
    }

    /// Applies [`from_integer`](Self::from_integer) element-wise.
    pub fn dequantize<E: Elementwise>(&self, codes: E) -> E::Output {
        let q = *self;
        codes.map_elements(move |v| q.from_integer(v))
    }
}
