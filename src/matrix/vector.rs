use std::ops::Index;

use crate::traits::Scalar;

use super::{or_panic, MatrixError};

/// Immutable real vector of dimension at least 1.
///
/// Combining vectors of different dimensions is an error: the `try_*`
/// methods return [`MatrixError::DimensionMismatch`], the operators panic.
///
/// # Examples
///
/// ```
/// use eigenpoly::Vector;
///
/// let u = Vector::from([1.0, 2.0, 3.0]);
/// let v = Vector::from([10.0, 20.0, 30.0]);
/// assert_eq!(&u + &v, Vector::from([11.0, 22.0, 33.0]));
/// assert_eq!(u.inner_product(&v), 140.0);
/// assert_eq!(u.dim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Wrap a non-empty `Vec`.
    ///
    /// Panics if `data` is empty.
    #[track_caller]
    pub fn new(data: Vec<T>) -> Self {
        or_panic(Self::try_new(data))
    }

    /// Wrap a `Vec`, rejecting an empty one.
    pub fn try_new(data: Vec<T>) -> Result<Self, MatrixError> {
        if data.is_empty() {
            return Err(MatrixError::Empty);
        }
        Ok(Self { data })
    }

    /// Build a vector by calling `f(k)` for `k` in `0..dim`.
    ///
    /// ```
    /// use eigenpoly::Vector;
    /// let v = Vector::tabulate(4, |k| (k * k) as f64);
    /// assert_eq!(v.as_slice(), &[0.0, 1.0, 4.0, 9.0]);
    /// ```
    pub fn tabulate(dim: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::new((0..dim).map(f).collect())
    }

    /// Dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub(crate) fn check_dim(&self, op: &'static str, other: &Self) -> Result<(), MatrixError> {
        if self.dim() != other.dim() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: (self.dim(), 1),
                right: (other.dim(), 1),
            });
        }
        Ok(())
    }
}

impl<T: Clone> Vector<T> {
    /// Copy a non-empty slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T: Scalar> Vector<T> {
    /// The zero vector.
    pub fn zero(dim: usize) -> Self {
        Self::tabulate(dim, |_| T::zero())
    }

    /// Multiply every entry by `s`.
    pub fn scale(&self, s: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }

    /// `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_dim("+", other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_dim("-", other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// `Σ self[k] * other[k]`.
    pub fn try_inner_product(&self, other: &Self) -> Result<T, MatrixError> {
        self.check_dim("·", other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Inner product. Panics if the dimensions differ.
    #[track_caller]
    pub fn inner_product(&self, other: &Self) -> T {
        or_panic(self.try_inner_product(other))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

// ── Index / conversions ─────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.data[k]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Panics if `N` is zero.
    fn from(data: [T; N]) -> Self {
        Self::new(Vec::from(data))
    }
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = MatrixError;

    fn try_from(data: Vec<T>) -> Result<Self, MatrixError> {
        Self::try_new(data)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
