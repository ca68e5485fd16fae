//! # gsdf-transfer
//!
//! DICOM Grayscale Standard Display Function (GSDF) transfer functions.
//!
//! The GSDF is the luminance response medical displays are calibrated to.
//! It maps luminance onto just-noticeable differences (JNDs) of contrast so
//! that equal code steps are perceived as equal brightness steps.
//!
//! # Terminology
//!
//! - **OETF**: Luminance (cd/m2) -> normalized JND code value
//! - **EOTF**: Normalized JND code value -> luminance (cd/m2)
//! - **JND index**: Position on the GSDF scale, 1 to 1023
//! - **Integer code**: JND index rounded to the 10-bit range [0, 1023]
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dicom_gsdf`] | `oetf`/`eotf` and their integer variants |
//! | [`quantize`] | Normalized <-> integer code mapping |
//! | [`table`] | Luminance of every JND index, 1D lookup |
//! | [`target`] | Per-DDL target luminance for a display |
//!
//! # Usage
//!
//! ```rust
//! use gsdf_transfer::{gsdf_eotf, gsdf_oetf};
//!
//! // Encode luminance to a normalized code value
//! let code = gsdf_oetf(130.0662_f64);
//!
//! // Decode back to cd/m2
//! let nits = gsdf_eotf(code);
//! assert!((nits - 130.0662).abs() < 0.01);
//!
//! // Works on whole buffers too
//! let codes = gsdf_oetf(vec![0.05f32, 1.0, 100.0, 4000.0]);
//! assert_eq!(codes.len(), 4);
//!
//! // Plain scalar helpers accept untyped literals
//! let code = gsdf_transfer::gsdf_oetf_f64(130.0662);
//! assert!((gsdf_transfer::gsdf_eotf_f64(code) - 130.0662).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! - [`gsdf-core`] - Samples, arrays, floating-point environment
//!
//! # Used By
//!
//! - `gsdf-cli` - Command line front end

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dicom_gsdf;
pub mod error;
pub mod quantize;
pub mod table;
pub mod target;

pub use error::{TransferError, TransferResult};

// Re-export common functions
pub use dicom_gsdf::{
    decode as gsdf_decode, encode as gsdf_encode, eotf as gsdf_eotf, eotf_f64 as gsdf_eotf_f64,
    eotf_int as gsdf_eotf_int, oetf as gsdf_oetf, oetf_f64 as gsdf_oetf_f64,
    oetf_int as gsdf_oetf_int,
};
pub use quantize::{Quantizer, JND_10BIT};
pub use table::GsdfTable;
pub use target::{DisplayRange, TargetLevel, TargetResponse};
