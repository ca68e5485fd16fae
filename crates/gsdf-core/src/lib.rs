//! # gsdf-core
//!
//! Core numeric types for GSDF luminance processing.
//!
//! This crate provides the foundation the transfer functions are built on:
//!
//! - [`Sample`] - Trait for scalar float types (`f32`, `f64`, `f16`)
//! - [`Array`] - Owned N-dimensional buffer with row-major layout
//! - [`Elementwise`] - Shape-preserving element-wise mapping over scalars and containers
//! - [`BitDepth`] - Integer code depths used by quantization
//! - [`fpenv`] - Scoped floating-point environment (invalid-operation policy)
//!
//! ## Design Philosophy
//!
//! Every transfer function is written once against [`Elementwise`] and works
//! uniformly on a single value or on an array of any rank:
//!
//! ```rust
//! use gsdf_core::{Array, Elementwise};
//!
//! let double = |v: f64| v * 2.0;
//! assert_eq!(0.5f64.map_elements(double), 1.0);
//!
//! let a = Array::from_shape_vec([2, 3], vec![1.0f32; 6]).unwrap();
//! let b = (&a).map_elements(double);
//! assert_eq!(b.shape(), &[2, 3]);
//! ```
//!
//! Out-of-domain values are never an error: NaN and infinities flow through
//! every operation. Only structural problems (ragged rows, reshape to a
//! different element count) surface as [`Error`].
//!
//! ## Crate Structure
//!
//! ```text
//! gsdf-core (this crate)
//!    ^
//!    |
//!    +-- gsdf-transfer (DICOM GSDF oetf/eotf, tables, display targets)
//!    +-- gsdf-cli (command line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Map large buffers with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod elementwise;
pub mod error;
pub mod format;
pub mod fpenv;
pub mod sample;

// Re-exports for convenience
pub use array::Array;
pub use elementwise::Elementwise;
pub use error::*;
pub use format::BitDepth;
pub use fpenv::InvalidOp;
pub use sample::Sample;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gsdf_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::elementwise::Elementwise;
    pub use crate::error::{Error, Result};
    pub use crate::format::BitDepth;
    pub use crate::fpenv::{ignore_invalid, InvalidOp};
    pub use crate::sample::Sample;
}
