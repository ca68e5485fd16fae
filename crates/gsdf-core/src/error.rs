//! Error types for gsdf-core operations.
//!
//! Numeric domain problems are not errors in this workspace: a negative
//! luminance simply produces NaN. The [`Error`] enum only covers structural
//! failures of the array engine:
//! - Data length not matching a declared shape
//! - Ragged (non-rectangular) nested input
//! - Reshape to a different element count
//! - Shapes whose element count overflows `usize`
//!
//! # Usage
//!
//! ```rust
//! use gsdf_core::{Array, Error};
//!
//! let err = Array::from_shape_vec([2, 3], vec![0.0f64; 5]).unwrap_err();
//! assert!(matches!(err, Error::ShapeMismatch { expected: 6, got: 5 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::array::Array`] - Construction and reshaping
//! - `gsdf-cli` - Reported through `anyhow`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised by the array engine.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Data length does not match the element count of the shape.
    ///
    /// Returned by [`Array::from_shape_vec`](crate::Array::from_shape_vec).
    #[error("shape mismatch: shape holds {expected} elements, got {got}")]
    ShapeMismatch {
        /// Element count implied by the shape
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },

    /// Nested input is not rectangular.
    ///
    /// Returned when one row of a nested input has a different length
    /// than the first row.
    #[error("irregular shape: row {row} has {got} elements, expected {expected}")]
    IrregularShape {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Reshape target has a different element count.
    #[error("cannot reshape array of shape {from:?} into shape {to:?}")]
    InvalidReshape {
        /// Current shape
        from: Vec<usize>,
        /// Requested shape
        to: Vec<usize>,
    },

    /// Shape cannot be represented (element count overflows).
    ///
    /// Returned by [`Array::from_shape_vec`](crate::Array::from_shape_vec),
    /// [`Array::full`](crate::Array::full) and
    /// [`Array::zeros`](crate::Array::zeros).
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// Offending shape
        shape: Vec<usize>,
        /// Why the shape is invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Creates an [`Error::IrregularShape`] error.
    #[inline]
    pub fn irregular_shape(row: usize, expected: usize, got: usize) -> Self {
        Self::IrregularShape { row, expected, got }
    }

    /// Creates an [`Error::InvalidReshape`] error.
    #[inline]
    pub fn invalid_reshape(from: &[usize], to: &[usize]) -> Self {
        Self::InvalidReshape {
            from: from.to_vec(),
            to: to.to_vec(),
        }
    }

    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error describes a shape that is not rectangular
    /// or does not match its data.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. } | Self::IrregularShape { .. } | Self::InvalidShape { .. }
        )
    }

    /// Returns `true` if this is a reshape error.
    #[inline]
    pub fn is_reshape_error(&self) -> bool {
        matches!(self, Self::InvalidReshape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch() {
        let err = Error::shape_mismatch(6, 5);
        let msg = err.to_string();
        assert!(msg.contains('6'));
        assert!(msg.contains('5'));
        assert!(err.is_shape_error());
        assert!(!err.is_reshape_error());
    }

    #[test]
    fn test_irregular_shape() {
        let err = Error::irregular_shape(2, 3, 1);
        assert!(err.to_string().contains("row 2"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_invalid_reshape() {
        let err = Error::invalid_reshape(&[6], &[4, 2]);
        let msg = err.to_string();
        assert!(msg.contains("[6]"));
        assert!(msg.contains("[4, 2]"));
        assert!(err.is_reshape_error());
    }
}
