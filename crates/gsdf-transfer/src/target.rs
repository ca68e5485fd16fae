//! GSDF target response for a display.
//!
//! A display calibrated to the GSDF spreads its luminance range evenly in
//! JND space across its digital driving levels (DDLs). For a display with
//! range `[l_min, l_max]` and `n`-bit driving levels:
//!
//! ```text
//! j_min = jnd_index(l_min)
//! j_max = jnd_index(l_max)
//! j(p)  = j_min + p / (2^n - 1) * (j_max - j_min)
//! L(p)  = luminance(j(p))
//! ```
//!
//! The end levels reproduce `l_min` and `l_max` up to the GSDF round-trip
//! error. The per-step contrast response `2 (L1 - L0) / (L1 + L0)` is what
//! display conformance checks compare measurements against.
//!
//! # Usage
//!
//! ```rust
//! use gsdf_transfer::target::DisplayRange;
//!
//! let display = DisplayRange::new(0.5, 400.0).unwrap();
//! let target = display.target(8).unwrap();
//! assert_eq!(target.levels.len(), 256);
//! assert!(target.jnds_per_step() > 2.0);
//! ```

use crate::dicom_gsdf::{jnd_index, luminance};
use crate::{TransferError, TransferResult};
use gsdf_core::Elementwise;
use tracing::debug;

/// Largest supported driving-level bit depth.
pub const MAX_DDL_BITS: u32 = 16;

/// Luminance range of a display in cd/m2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    l_min: f64,
    l_max: f64,
}

/// One driving level of a target response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLevel {
    /// Digital driving level, `0..2^bits`
    pub ddl: u32,
    /// Fractional JND index
    pub jnd: f64,
    /// Target luminance in cd/m2
    pub luminance: f64,
}

/// GSDF target luminance for every driving level of a display.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetResponse {
    /// Driving level bit depth
    pub bits: u32,
    /// Levels in ascending DDL order
    pub levels: Vec<TargetLevel>,
}

impl DisplayRange {
    /// Creates a range, rejecting non-finite, non-positive or empty ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::InvalidRange`] unless
    /// `0 < l_min < l_max < inf`.
    pub fn new(l_min: f64, l_max: f64) -> TransferResult<Self> {
        let valid = l_min.is_finite() && l_max.is_finite() && l_min > 0.0 && l_min < l_max;
        if !valid {
            return Err(TransferError::InvalidRange {
                min: l_min,
                max: l_max,
            });
        }
        Ok(Self { l_min, l_max })
    }

    /// Minimum luminance.
    #[inline]
    pub fn l_min(&self) -> f64 {
        self.l_min
    }

    /// Maximum luminance.
    #[inline]
    pub fn l_max(&self) -> f64 {
        self.l_max
    }

    /// JND indices of the range ends.
    pub fn jnd_span(&self) -> (f64, f64) {
        (jnd_index(self.l_min), jnd_index(self.l_max))
    }

    /// Computes the target response for `bits`-bit driving levels.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::InvalidBitDepth`] unless `1 <= bits <= 16`.
    pub fn target(&self, bits: u32) -> TransferResult<TargetResponse> {
        if !(1..=MAX_DDL_BITS).contains(&bits) {
            return Err(TransferError::InvalidBitDepth(bits));
        }

        let max_ddl = (1u32 << bits) - 1;
        let (j_min, j_max) = self.jnd_span();
        let step = (j_max - j_min) / max_ddl as f64;
        debug!(bits, j_min, j_max, step, "computing GSDF target");

        let jnds: Vec<f64> = (0..=max_ddl).map(|p| j_min + p as f64 * step).collect();
        let lums = (&jnds).map_elements(luminance);

        let levels = jnds
            .into_iter()
            .zip(lums)
            .zip(0..=max_ddl)
            .map(|((jnd, luminance), ddl)| TargetLevel {
                ddl,
                jnd,
                luminance,
            })
            .collect();

        Ok(TargetResponse { bits, levels })
    }
}

impl TargetResponse {
    /// JNDs spanned by one driving level step.
    pub fn jnds_per_step(&self) -> f64 {
        match (self.levels.first(), self.levels.last()) {
            (Some(first), Some(last)) if self.levels.len() > 1 => {
                (last.jnd - first.jnd) / (self.levels.len() - 1) as f64
            }
            _ => 0.0,
        }
    }

    /// Target luminances in DDL order.
    pub fn luminances(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.luminance).collect()
    }

    /// Contrast response `2 (L1 - L0) / (L1 + L0)` of each step.
    ///
    /// Has one entry fewer than there are levels.
    pub fn contrast_response(&self) -> Vec<f64> {
        self.levels
            .windows(2)
            .map(|w| {
                let (l0, l1) = (w[0].luminance, w[1].luminance);
                2.0 * (l1 - l0) / (l1 + l0)
            })
            .collect()
    }
}
