//! Transfer error types.
//!
//! The transfer functions themselves never fail. Errors only come from
//! helpers that take a configuration, such as display targets.

use thiserror::Error;

/// Result type for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

/// Errors that can occur while building tables or display targets.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Display luminance range is empty, non-positive or non-finite.
    #[error("invalid luminance range: [{min}, {max}] cd/m2")]
    InvalidRange {
        /// Minimum luminance
        min: f64,
        /// Maximum luminance
        max: f64,
    },

    /// Driving level bit depth outside the supported range.
    #[error("invalid bit depth: {0} (expected 1..=16)")]
    InvalidBitDepth(u32),
}
