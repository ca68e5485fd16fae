//! GSDF luminance table.
//!
//! Tabulates the luminance of every JND index from 1 to 1023, the form in
//! which PS3.14 Annex B publishes the GSDF. The table also works as a 1D
//! LUT: normalized codes are looked up with linear interpolation, and
//! luminances can be mapped back to (fractional) JND indices.
//!
//! # Usage
//!
//! ```rust
//! use gsdf_transfer::table::GsdfTable;
//!
//! let table = GsdfTable::new();
//! assert_eq!(table.len(), 1023);
//!
//! let (j, l) = table.iter().next().unwrap();
//! assert_eq!(j, 1);
//! assert!((l - 0.05).abs() < 1e-3);
//! ```

use crate::dicom_gsdf::{luminance, JND_MAX, JND_MIN};
use gsdf_core::Elementwise;
use tracing::debug;

/// Luminance (cd/m2) for each JND index 1..=1023.
#[derive(Debug, Clone, PartialEq)]
pub struct GsdfTable {
    /// Entry `i` holds the luminance of JND index `i + 1`
    luminance: Vec<f64>,
}

impl GsdfTable {
    /// Builds the full table.
    pub fn new() -> Self {
        let indices: Vec<f64> = (JND_MIN as u32..=JND_MAX as u32).map(f64::from).collect();
        let values = indices.map_elements(luminance);
        debug!(entries = values.len(), "built GSDF table");
        Self { luminance: values }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.luminance.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.luminance.is_empty()
    }

    /// Luminance of a JND index, or `None` outside 1..=1023.
    pub fn get(&self, j: u32) -> Option<f64> {
        let i = j.checked_sub(1)?;
        self.luminance.get(i as usize).copied()
    }

    /// Iterates over `(jnd_index, luminance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.luminance
            .iter()
            .enumerate()
            .map(|(i, &l)| (i as u32 + 1, l))
    }

    /// Luminances in JND index order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.luminance
    }

    /// Looks up a normalized code value with linear interpolation.
    ///
    /// Codes below JND 1 or above JND 1023 clamp to the table ends.
    /// NaN passes through.
    pub fn lookup(&self, v: f64) -> f64 {
        if v.is_nan() {
            return v;
        }
        let pos = (v * JND_MAX).clamp(JND_MIN, JND_MAX) - JND_MIN;
        let i0 = pos.floor() as usize;
        let i1 = (i0 + 1).min(self.luminance.len() - 1);
        let frac = pos - i0 as f64;
        self.luminance[i0] * (1.0 - frac) + self.luminance[i1] * frac
    }

    /// Maps a luminance back to a fractional JND index.
    ///
    /// Interpolates linearly between the bracketing entries; luminances
    /// outside the table clamp to 1 or 1023. NaN passes through.
    pub fn jnd_for(&self, l: f64) -> f64 {
        if l.is_nan() {
            return l;
        }
        let hi = self.luminance.partition_point(|&x| x < l);
        if hi == 0 {
            return JND_MIN;
        }
        if hi >= self.luminance.len() {
            return JND_MAX;
        }
        let lo = hi - 1;
        let (l0, l1) = (self.luminance[lo], self.luminance[hi]);
        let frac = (l - l0) / (l1 - l0);
        JND_MIN + lo as f64 + frac
    }
}

impl Default for GsdfTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_gsdf::{eotf, jnd_index};

    #[test]
    fn test_entries_match_eotf() {
        let table = GsdfTable::new();
        for (j, l) in table.iter() {
            let expected = eotf(j as f64 / JND_MAX);
            assert!((l - expected).abs() <= expected * 1e-12, "j={}", j);
        }
    }

    #[test]
    fn test_get_bounds() {
        let table = GsdfTable::new();
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(1024), None);
        assert_eq!(table.get(1), Some(table.as_slice()[0]));
        assert_eq!(table.get(1023), table.as_slice().last().copied());
    }

    #[test]
    fn test_increasing() {
        let table = GsdfTable::new();
        assert!(table.as_slice().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_lookup_on_grid() {
        let table = GsdfTable::new();
        let l = table.lookup(512.0 / JND_MAX);
        assert!((l - 130.065284012159790).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_clamps() {
        let table = GsdfTable::new();
        assert_eq!(table.lookup(-1.0), table.as_slice()[0]);
        assert_eq!(table.lookup(2.0), table.as_slice()[1022]);
        assert!(table.lookup(f64::NAN).is_nan());
    }

    #[test]
    fn test_jnd_for_agrees_with_polynomial() {
        let table = GsdfTable::new();
        for l in [0.1, 1.0, 10.0, 130.0662, 1000.0] {
            let from_table = table.jnd_for(l);
            let from_poly = jnd_index(l);
            assert!((from_table - from_poly).abs() < 0.05, "l={}: {} vs {}", l, from_table, from_poly);
        }
        assert_eq!(table.jnd_for(0.0), JND_MIN);
        assert_eq!(table.jnd_for(1.0e6), JND_MAX);
    }
}
