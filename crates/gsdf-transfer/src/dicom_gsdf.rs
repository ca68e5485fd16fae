//! DICOM Grayscale Standard Display Function (GSDF).
//!
//! The GSDF maps luminance onto a scale of just-noticeable differences
//! (JNDs) in contrast for a standard observer, so that equal steps in code
//! value look like equal steps in brightness on a calibrated medical
//! display.
//!
//! # Range
//!
//! - Luminance: [0.05, 3993.4] cd/m2 (JND index 1 to 1023)
//! - Normalized code: JND index / 1023, about [0.001, 1.0002] over
//!   [0.05, 4000] cd/m2, not clamped
//! - Integer code: 10-bit, [0, 1023]
//!
//! # Reference
//!
//! DICOM PS3.14, Grayscale Standard Display Function, equations 2 and 3.
//!
//! # Domain
//!
//! Any input is accepted. Zero, negative and non-finite values follow
//! IEEE-754 rules through `log10`/`ln` and come out as NaN or infinity;
//! nothing panics. Under [`InvalidOp::Warn`](gsdf_core::InvalidOp) a
//! warning is logged when finite inputs produce non-finite results.
//!
//! # Usage
//!
//! ```rust
//! use gsdf_transfer::dicom_gsdf;
//! use gsdf_core::Array;
//!
//! // Scalars: the `_f64` functions take untyped literals
//! let code = dicom_gsdf::oetf_f64(130.0662);
//! assert!((code - 0.500486263438448).abs() < 1e-7);
//! assert_eq!(dicom_gsdf::oetf_int(130.0662_f64), 512.0);
//!
//! // Any shape
//! let l = Array::scalar(130.0662f64).tile(6).reshape([2, 3, 1]).unwrap();
//! let j = dicom_gsdf::oetf(&l);
//! assert_eq!(j.shape(), &[2, 3, 1]);
//!
//! // Integer codes
//! let nits = dicom_gsdf::eotf_int(512u16);
//! assert!((nits - 130.065284012159790).abs() < 1e-7);
//! ```

use crate::quantize::JND_10BIT;
use gsdf_core::fpenv::map_checked;
use gsdf_core::Elementwise;
use tracing::trace;

/// Largest JND index; normalized codes are JND index / `JND_MAX`.
pub const JND_MAX: f64 = 1023.0;

/// Smallest JND index of the standard.
pub const JND_MIN: f64 = 1.0;

/// Lower end of the reference luminance domain in cd/m2.
pub const L_MIN: f64 = 0.05;

/// Upper end of the reference luminance domain in cd/m2.
pub const L_MAX: f64 = 4000.0;

/// Luminance to JND index, PS3.14 eq. 3 (polynomial in log10 L).
mod enc {
    pub const A: f64 = 71.498068;
    pub const B: f64 = 94.593053;
    pub const C: f64 = 41.912053;
    pub const D: f64 = 9.8247004;
    pub const E: f64 = 0.28175407;
    pub const F: f64 = -1.1878455;
    pub const G: f64 = -0.18014349;
    pub const H: f64 = 0.14710899;
    pub const I: f64 = -0.017046845;
}

/// JND index to log10 luminance, PS3.14 eq. 2 (rational in ln j).
mod dec {
    pub const A: f64 = -1.3011877;
    pub const B: f64 = -2.5840191e-2;
    pub const C: f64 = 8.0242636e-2;
    pub const D: f64 = -1.0320229e-1;
    pub const E: f64 = 1.3646699e-1;
    pub const F: f64 = 2.8745620e-2;
    pub const G: f64 = -2.5468404e-2;
    pub const H: f64 = -3.1978977e-3;
    pub const K: f64 = 1.2992634e-4;
    pub const M: f64 = 1.3635334e-3;
}

/// JND index of a luminance in cd/m2.
///
/// Returns values in [1, 1023] over the standard's luminance range.
#[inline]
pub fn jnd_index(l: f64) -> f64 {
    use enc::*;

    let x = l.log10();
    ((((((((I * x + H) * x + G) * x + F) * x + E) * x + D) * x + C) * x + B) * x) + A
}

/// Luminance in cd/m2 of a JND index.
#[inline]
pub fn luminance(j: f64) -> f64 {
    use dec::*;

    let y = j.ln();
    let num = (((M * y + G) * y + E) * y + C) * y + A;
    let den = ((((K * y + H) * y + F) * y + D) * y + B) * y + 1.0;
    10f64.powf(num / den)
}

/// Scalar OETF: luminance in cd/m2 to normalized code value.
///
/// Takes a plain `f64`, so float literals need no suffix:
///
/// ```rust
/// use gsdf_transfer::dicom_gsdf::oetf_f64;
///
/// assert!((oetf_f64(0.05) - 0.001007281350787).abs() < 1e-9);
/// ```
#[inline]
pub fn oetf_f64(l: f64) -> f64 {
    jnd_index(l) / JND_MAX
}

/// Scalar EOTF: normalized code value to luminance in cd/m2.
///
/// ```rust
/// use gsdf_transfer::dicom_gsdf::eotf_f64;
///
/// assert!((eotf_f64(0.5) - 129.6).abs() < 0.1);
/// ```
#[inline]
pub fn eotf_f64(v: f64) -> f64 {
    luminance(v * JND_MAX)
}

/// GSDF encoder with optional 10-bit quantization.
///
/// With `out_int` the normalized code is rounded to the nearest 10-bit
/// code; the result keeps the input's float type.
///
/// # Arguments
///
/// * `l` - Luminance in cd/m2, scalar or container
/// * `out_int` - Return integer codes instead of normalized values
pub fn encode<E: Elementwise>(l: E, out_int: bool) -> E::Output {
    trace!(len = l.element_count(), out_int, "dicom_gsdf::encode");
    if out_int {
        map_checked(l, "dicom_gsdf::oetf", |v| JND_10BIT.to_integer(oetf_f64(v)))
    } else {
        map_checked(l, "dicom_gsdf::oetf", oetf_f64)
    }
}

/// GSDF decoder with optional 10-bit dequantization.
///
/// With `in_int` the input is read as 10-bit integer codes.
///
/// # Arguments
///
/// * `v` - Code values, scalar or container
/// * `in_int` - Input holds integer codes instead of normalized values
pub fn decode<E: Elementwise>(v: E, in_int: bool) -> E::Output {
    trace!(len = v.element_count(), in_int, "dicom_gsdf::decode");
    if in_int {
        map_checked(v, "dicom_gsdf::eotf", |c| eotf_f64(JND_10BIT.from_integer(c)))
    } else {
        map_checked(v, "dicom_gsdf::eotf", eotf_f64)
    }
}

/// GSDF OETF: luminance (cd/m2) to normalized code value.
///
/// # Example
///
/// ```rust
/// use gsdf_transfer::dicom_gsdf::oetf;
///
/// assert!((oetf(4000.0_f64) - 1.000160314715578).abs() < 1e-7);
/// let codes = oetf(vec![0.05f32, 4000.0]);
/// assert_eq!(codes.len(), 2);
/// ```
#[inline]
pub fn oetf<E: Elementwise>(l: E) -> E::Output {
    encode(l, false)
}

/// GSDF OETF returning 10-bit integer codes.
#[inline]
pub fn oetf_int<E: Elementwise>(l: E) -> E::Output {
    encode(l, true)
}

/// GSDF EOTF: normalized code value to luminance (cd/m2).
///
/// # Example
///
/// ```rust
/// use gsdf_transfer::dicom_gsdf::eotf;
///
/// let nits = eotf(0.500486263438448_f64);
/// assert!((nits - 130.062864706476550).abs() < 1e-7);
/// ```
#[inline]
pub fn eotf<E: Elementwise>(v: E) -> E::Output {
    decode(v, false)
}

/// GSDF EOTF reading 10-bit integer codes.
#[inline]
pub fn eotf_int<E: Elementwise>(v: E) -> E::Output {
    decode(v, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsdf_core::fpenv::ignore_invalid;

    #[test]
    fn test_reference_endpoints() {
        // JND 1 and 1023 per PS3.14 Annex B
        assert!((luminance(1.0) - 0.0500).abs() < 1e-3);
        assert!((luminance(1023.0) - 3993.4).abs() < 0.1);
        assert!((jnd_index(0.05) - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_roundtrip() {
        let test_values = [0.05f64, 0.1, 1.0, 10.0, 100.0, 130.0662, 1000.0, 4000.0];
        for &l in &test_values {
            let decoded = eotf(oetf(l));
            assert!(
                (l - decoded).abs() < l * 0.005,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = oetf(0.05f64);
        for i in 1..=200 {
            let l = 0.05 * (4000.0f64 / 0.05).powf(i as f64 / 200.0);
            let j = oetf(l);
            assert!(j > prev, "not monotonic at l={}: {} <= {}", l, j, prev);
            prev = j;
        }
    }

    #[test]
    fn test_integer_codes_in_range() {
        for l in [0.05f64, 1.0, 100.0, 4000.0] {
            let code = oetf_int(l);
            assert_eq!(code.fract(), 0.0);
            assert!((0.0..=1023.0).contains(&code), "l={}, code={}", l, code);
        }
    }

    #[test]
    fn test_out_of_domain() {
        let _guard = ignore_invalid();
        assert!(oetf(-1.0f64).is_nan());
        assert_eq!(oetf(0.0f64), f64::NEG_INFINITY);
        assert!(oetf(f64::NAN).is_nan());
        assert!(eotf(-1.0f64).is_nan());
        assert!(eotf_int(-1i32).is_nan());
        assert!(oetf_f64(-1.0).is_nan());
        assert!(eotf_f64(-1.0).is_nan());
    }
}
