//! Shape-preserving element-wise mapping.
//!
//! [`Elementwise`] is what lets one transfer function body serve scalars,
//! slices, vectors, fixed arrays and N-dimensional [`Array`]s. The mapping
//! closure always sees `f64`; results are narrowed back to the container's
//! sample type and the output keeps the input's shape.
//!
//! | Input | Output |
//! |-------|--------|
//! | `f64`, `f32`, `f16` | same type |
//! | `u8`, `u16`, `u32`, `i32`, `i64` (integer codes) | `f64` |
//! | `[T; N]`, `&[T; N]` | `[T; N]` |
//! | `Vec<T>`, `&Vec<T>`, `&[T]` | `Vec<T>` |
//! | `Array<T>`, `&Array<T>` | `Array<T>` |
//!
//! Owned containers are mapped in place; borrowed ones are copied first.
//! With the `parallel` feature, buffers of at least [`PARALLEL_THRESHOLD`]
//! elements are mapped with rayon. Each element is computed independently,
//! so results match the sequential path exactly.

use crate::{Array, Sample};
use half::f16;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum buffer length mapped in parallel.
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Types whose elements can be mapped through an `f64 -> f64` function.
///
/// # Example
///
/// ```rust
/// use gsdf_core::{Array, Elementwise};
///
/// let log = |v: f64| v.log10();
///
/// assert_eq!(100.0f64.map_elements(log), 2.0);
/// assert_eq!([10.0f32, 1000.0].map_elements(log), [1.0, 3.0]);
///
/// let a = Array::full([2, 3, 1], 10.0f64).unwrap();
/// let b = a.map_elements(log);
/// assert_eq!(b.shape(), &[2, 3, 1]);
/// ```
pub trait Elementwise {
    /// Container produced by the mapping.
    type Output;

    /// Number of elements that will be mapped.
    fn element_count(&self) -> usize;

    /// Applies `f` to every element, preserving shape.
    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync;
}

#[inline]
fn map_serial<T: Sample, F>(data: &mut [T], f: &F)
where
    F: Fn(f64) -> f64,
{
    for v in data.iter_mut() {
        *v = T::from_f64(f(v.to_f64()));
    }
}

#[cfg(feature = "parallel")]
fn map_in_place<T: Sample, F>(data: &mut [T], f: &F)
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter_mut()
            .for_each(|v| *v = T::from_f64(f(v.to_f64())));
    } else {
        map_serial(data, f);
    }
}

#[cfg(not(feature = "parallel"))]
fn map_in_place<T: Sample, F>(data: &mut [T], f: &F)
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    map_serial(data, f);
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Elementwise for $t {
                type Output = $t;

                #[inline]
                fn element_count(&self) -> usize {
                    1
                }

                #[inline]
                fn map_elements<F>(self, f: F) -> Self::Output
                where
                    F: Fn(f64) -> f64 + Send + Sync,
                {
                    <$t as Sample>::from_f64(f(Sample::to_f64(self)))
                }
            }
        )*
    };
}

impl_float_scalar!(f64, f32, f16);

// Integer code values decode to floats.
macro_rules! impl_code_scalar {
    ($($t:ty),*) => {
        $(
            impl Elementwise for $t {
                type Output = f64;

                #[inline]
                fn element_count(&self) -> usize {
                    1
                }

                #[inline]
                fn map_elements<F>(self, f: F) -> Self::Output
                where
                    F: Fn(f64) -> f64 + Send + Sync,
                {
                    f(self as f64)
                }
            }
        )*
    };
}

impl_code_scalar!(u8, u16, u32, i32, i64);

impl<T: Sample, const N: usize> Elementwise for [T; N] {
    type Output = [T; N];

    fn element_count(&self) -> usize {
        N
    }

    fn map_elements<F>(mut self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        map_serial(&mut self, &f);
        self
    }
}

impl<T: Sample, const N: usize> Elementwise for &[T; N] {
    type Output = [T; N];

    fn element_count(&self) -> usize {
        N
    }

    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        (*self).map_elements(f)
    }
}

impl<T: Sample> Elementwise for Vec<T> {
    type Output = Vec<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(mut self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        map_in_place(&mut self, &f);
        self
    }
}

impl<T: Sample> Elementwise for &[T] {
    type Output = Vec<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        self.to_vec().map_elements(f)
    }
}

impl<T: Sample> Elementwise for &Vec<T> {
    type Output = Vec<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        self.as_slice().map_elements(f)
    }
}

impl<T: Sample> Elementwise for Array<T> {
    type Output = Array<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(mut self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        map_in_place(self.as_mut_slice(), &f);
        self
    }
}

impl<T: Sample> Elementwise for &Array<T> {
    type Output = Array<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        self.clone().map_elements(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve(v: f64) -> f64 {
        v / 2.0
    }

    #[test]
    fn test_scalars() {
        assert_eq!(3.0f64.map_elements(halve), 1.5);
        assert_eq!(3.0f32.map_elements(halve), 1.5);
        assert_eq!(f16::from_f32(3.0).map_elements(halve), f16::from_f32(1.5));
        assert_eq!(512i32.map_elements(halve), 256.0);
        assert_eq!(512u16.map_elements(halve), 256.0);
    }

    #[test]
    fn test_containers_keep_shape() {
        let v = vec![2.0f64; 6];
        assert_eq!((&v).map_elements(halve), vec![1.0; 6]);
        assert_eq!(v[..].map_elements(halve).len(), 6);
        assert_eq!([2.0f32; 4].map_elements(halve), [1.0; 4]);

        let a = Array::full([2, 3, 1], 2.0f64).unwrap();
        let b = (&a).map_elements(halve);
        assert_eq!(b.shape(), a.shape());
        assert!(b.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_element_count() {
        assert_eq!(3.0f64.element_count(), 1);
        assert_eq!(512u16.element_count(), 1);
        assert_eq!([1.0f32; 4].element_count(), 4);
        assert_eq!((&[1.0f32; 4]).element_count(), 4);

        let v = vec![0.5f64; 7];
        assert_eq!((&v).element_count(), 7);
        assert_eq!((&v[2..]).element_count(), 5);
        assert_eq!(v.element_count(), 7);

        let a = Array::<f64>::zeros([2, 3, 1]).unwrap();
        assert_eq!((&a).element_count(), 6);
        assert_eq!(Array::<f32>::zeros([4, 0]).unwrap().element_count(), 0);
        assert_eq!(a.element_count(), 6);
    }

    #[test]
    fn test_nan_and_inf_pass_through() {
        let input = [-1.0f64, 0.0, 1.0, f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
        let out = input.map_elements(f64::log10);
        assert!(out[0].is_nan());
        assert_eq!(out[1], f64::NEG_INFINITY);
        assert_eq!(out[2], 0.0);
        assert!(out[3].is_nan());
        assert_eq!(out[4], f64::INFINITY);
        assert!(out[5].is_nan());
    }

    #[test]
    fn test_large_buffer_matches_serial() {
        let n = PARALLEL_THRESHOLD * 2 + 7;
        let data: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();
        let mapped = data.clone().map_elements(|v| v.sqrt());
        for (x, y) in data.iter().zip(&mapped) {
            assert_eq!(x.sqrt(), *y);
        }
    }
}
