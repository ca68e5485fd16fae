//! N-dimensional sample buffer.
//!
//! [`Array`] is the container the transfer functions accept alongside plain
//! scalars: a contiguous buffer plus a shape of any rank (including rank 0
//! for a single value).
//!
//! # Memory Layout
//!
//! Elements are stored in **row-major** order, last axis fastest:
//!
//! ```text
//! shape [2, 3]
//! Memory: [a00 a01 a02 a10 a11 a12]
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gsdf_core::Array;
//!
//! // Six copies of one luminance, then viewed as 2x3 and 2x3x1
//! let l = Array::scalar(130.0662f64).tile(6);
//! assert_eq!(l.shape(), &[6]);
//!
//! let l = l.reshape([2, 3]).unwrap();
//! assert_eq!(l.get(&[1, 2]), Some(&130.0662));
//!
//! let l = l.reshape([2, 3, 1]).unwrap();
//! assert_eq!(l.ndim(), 3);
//! ```
//!
//! # Used By
//!
//! - [`crate::elementwise::Elementwise`] - shape-preserving mapping
//! - `gsdf-transfer` - oetf/eotf over arrays

use crate::{Error, Result, Sample};

/// Computes the element count of a shape, rejecting overflow.
fn element_count(shape: &[usize]) -> Result<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| Error::invalid_shape(shape, "element count overflows usize"))
}

/// Owned N-dimensional array of samples.
///
/// Invariant: `data.len()` equals the product of `shape` (1 for rank 0).
///
/// # Example
///
/// ```rust
/// use gsdf_core::Array;
///
/// let a = Array::from_rows(&[vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T: Sample> {
    /// Row-major element buffer
    data: Vec<T>,
    /// Axis lengths, outermost first
    shape: Vec<usize>,
}

impl<T: Sample> Array<T> {
    /// Creates a rank-0 array holding one value.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
        }
    }

    /// Creates a 1-D array from a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Creates an array from a shape and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` differs from the
    /// element count of `shape`, or [`Error::InvalidShape`] if that count
    /// overflows.
    pub fn from_shape_vec(shape: impl AsRef<[usize]>, data: Vec<T>) -> Result<Self> {
        let shape = shape.as_ref();
        let expected = element_count(shape)?;
        if data.len() != expected {
            return Err(Error::shape_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Creates an array of the given shape filled with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the element count of `shape`
    /// overflows. The data always matches the shape, so
    /// [`Error::ShapeMismatch`] cannot occur.
    pub fn full(shape: impl AsRef<[usize]>, value: T) -> Result<Self> {
        let shape = shape.as_ref();
        let count = element_count(shape)?;
        Ok(Self {
            data: vec![value; count],
            shape: shape.to_vec(),
        })
    }

    /// Creates a zero-filled array of the given shape.
    pub fn zeros(shape: impl AsRef<[usize]>) -> Result<Self> {
        Self::full(shape, T::zero())
    }

    /// Creates a 2-D array from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IrregularShape`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::irregular_shape(i, cols, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            shape: vec![rows.len(), cols],
        })
    }

    /// Repeats the array `reps` times along its last axis.
    ///
    /// A rank-0 array becomes a 1-D array of length `reps`; otherwise the
    /// last axis grows from `n` to `n * reps` and the other axes are kept.
    pub fn tile(&self, reps: usize) -> Self {
        let Some((&last, outer)) = self.shape.split_last() else {
            return Self {
                data: vec![self.data[0]; reps],
                shape: vec![reps],
            };
        };

        let mut shape = outer.to_vec();
        shape.push(last * reps);

        let mut data = Vec::with_capacity(self.data.len() * reps);
        if last > 0 {
            for row in self.data.chunks(last) {
                for _ in 0..reps {
                    data.extend_from_slice(row);
                }
            }
        }
        Self { data, shape }
    }

    /// Reinterprets the buffer with a new shape of equal element count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReshape`] if the element counts differ.
    pub fn reshape(self, shape: impl AsRef<[usize]>) -> Result<Self> {
        let shape = shape.as_ref();
        if element_count(shape)? != self.data.len() {
            return Err(Error::invalid_reshape(&self.shape, shape));
        }
        Ok(Self {
            data: self.data,
            shape: shape.to_vec(),
        })
    }

    /// Axis lengths, outermost first. Empty for rank 0.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` for a rank-0 array.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major element slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the array, returning the element buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at a multi-index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).and_then(|i| self.data.get(i))
    }

    /// Maps every element into a new array of the same shape.
    pub fn map<U: Sample, F: Fn(T) -> U>(&self, f: F) -> Array<U> {
        Array {
            data: self.data.iter().map(|&v| f(v)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Converts to another sample type, keeping the shape.
    pub fn cast<U: Sample>(&self) -> Array<U> {
        self.map(|v| U::from_f64(v.to_f64()))
    }

    /// Row-major offset of a multi-index.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        Some(offset)
    }
}

impl<T: Sample> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Sample> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar() {
        let a = Array::scalar(0.5f64);
        assert!(a.is_scalar());
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(&[]), Some(&0.5));
    }

    #[test]
    fn test_from_shape_vec_mismatch() {
        let err = Array::from_shape_vec([2, 3], vec![0.0f32; 7]).unwrap_err();
        assert_eq!(err, Error::shape_mismatch(6, 7));
    }

    #[test]
    fn test_from_shape_vec_overflow() {
        let err = Array::<f64>::from_shape_vec([usize::MAX, 2], Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { .. }));
    }

    #[test]
    fn test_full_overflow() {
        let err = Array::full([usize::MAX, 2], 1.0f32).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { .. }));
        let err = Array::<f64>::zeros([2, usize::MAX]).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { .. }));
    }

    #[test]
    fn test_from_rows_irregular() {
        let err = Array::from_rows(&[vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(err, Error::irregular_shape(1, 3, 2));
    }

    #[test]
    fn test_tile_scalar() {
        let a = Array::scalar(2.0f64).tile(6);
        assert_eq!(a.shape(), &[6]);
        assert!(a.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_tile_last_axis() {
        let a = Array::from_shape_vec([2, 2], vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
        let t = a.tile(2);
        assert_eq!(t.shape(), &[2, 4]);
        assert_eq!(t.as_slice(), &[1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 4.0]);
    }

    #[test]
    fn test_tile_empty_axis() {
        let a = Array::<f64>::zeros([3, 0]).unwrap();
        let t = a.tile(4);
        assert_eq!(t.shape(), &[3, 0]);
        assert!(t.is_empty());
    }

    #[test]
    fn test_reshape() {
        let a = Array::from_vec((0..6).map(|i| i as f64).collect());
        let b = a.clone().reshape([2, 3]).unwrap();
        assert_eq!(b.get(&[1, 0]), Some(&3.0));
        assert_eq!(b.get(&[2, 0]), None);
        assert_eq!(b.get(&[0]), None);

        let err = a.reshape([4, 2]).unwrap_err();
        assert!(err.is_reshape_error());
    }

    #[test]
    fn test_map_and_cast_keep_shape() {
        let a = Array::full([2, 3, 1], 1.5f64).unwrap();
        let b: Array<f32> = a.cast();
        assert_eq!(b.shape(), &[2, 3, 1]);
        let c = b.map(|v| v * 2.0);
        assert!(c.iter().all(|&v| v == 3.0));
    }
}
