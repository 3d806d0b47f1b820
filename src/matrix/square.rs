use std::ops::{Add, Deref, Mul, Sub};

use crate::poly::Polynomial;
use crate::traits::{FloatScalar, Ring, Scalar};

use super::{Matrix, MatrixError, Vector};

/// Square `n x n` matrix.
///
/// Dereferences to [`Matrix`], so every rectangular operation is available;
/// operations that keep the shape square are repeated here to return a
/// `SquareMatrix`.
///
/// ```
/// use eigenpoly::SquareMatrix;
///
/// let a = SquareMatrix::from([[1.0, 2.0], [2.0, 3.0]]);
/// let id = SquareMatrix::identity(2);
/// assert_eq!(&a * &id, a);
/// assert_eq!(a.determinant(), -1.0);
/// assert_eq!(a.power(0), id);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T>(Matrix<T>);

impl<T> SquareMatrix<T> {
    pub(crate) fn from_square(m: Matrix<T>) -> Self {
        debug_assert!(m.is_square());
        Self(m)
    }

    /// Check the shape of `m`.
    pub fn new(m: Matrix<T>) -> Result<Self, MatrixError> {
        m.into_square()
    }

    /// Dimension `n`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.0
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.0
    }
}

impl<T> Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(m: Matrix<T>) -> Result<Self, MatrixError> {
        m.into_square()
    }
}

impl<T> From<SquareMatrix<T>> for Matrix<T> {
    fn from(m: SquareMatrix<T>) -> Self {
        m.0
    }
}

impl<T: Clone, const N: usize> From<[[T; N]; N]> for SquareMatrix<T> {
    fn from(rows: [[T; N]; N]) -> Self {
        Self(Matrix::from(rows))
    }
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Clone> SquareMatrix<T> {
    /// Build a `dim x dim` matrix from `f(row, col)`.
    pub fn tabulate(dim: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        Self(Matrix::tabulate(dim, dim, f))
    }

    /// Build from rows, rejecting ragged, empty, or non-square input.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Matrix::try_from_rows(rows)?.into_square()
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// The `(dim - 1) x (dim - 1)` minor without row `r` and column `c`.
    pub fn suppress_row_col(&self, r: usize, c: usize) -> Self {
        Self(self.0.suppress_row_col(r, c))
    }

    /// Replace column `c` with `v`.
    pub fn replace_col(&self, c: usize, v: &Vector<T>) -> Self {
        Self(self.0.replace_col(c, v))
    }
}

impl<T: Scalar> SquareMatrix<T> {
    /// The identity matrix.
    pub fn identity(dim: usize) -> Self {
        Self::tabulate(dim, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// The zero matrix.
    pub fn zero(dim: usize) -> Self {
        Self(Matrix::zero(dim, dim))
    }

    /// Diagonal matrix with the given diagonal entries.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    /// let d = SquareMatrix::diagonal(&[2, 3]);
    /// assert_eq!(d, SquareMatrix::from([[2, 0], [0, 3]]));
    /// ```
    pub fn diagonal(entries: &[T]) -> Self {
        Self::tabulate(entries.len(), |r, c| if r == c { entries[r] } else { T::zero() })
    }

    /// Sum of diagonal entries.
    pub fn trace(&self) -> T {
        (0..self.dim()).fold(T::zero(), |acc, k| acc + self[(k, k)])
    }

    pub fn scale(&self, s: T) -> Self {
        Self(self.0.scale(s))
    }

    /// `self^p` by repeated squaring, in `O(log p)` products.
    ///
    /// `power(0)` is the identity for every matrix, the zero matrix included.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    /// let m = SquareMatrix::from([[1, 1], [1, 0]]);
    /// assert_eq!(m.power(10)[(0, 1)], 55);
    /// ```
    pub fn power(&self, mut p: u32) -> Self {
        let mut result = Self::identity(self.dim());
        let mut base = self.clone();
        while p > 0 {
            if p & 1 == 1 {
                result = &result * &base;
            }
            p >>= 1;
            if p > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Determinant by Laplace expansion.
    pub fn determinant(&self) -> T {
        self.laplacian_expansion()
    }

    /// `det(A - xI)` as a polynomial in `x`.
    ///
    /// Built by Laplace expansion over a matrix of polynomials: diagonal
    /// entries are `a_kk - x`, the others constants.
    ///
    /// ```
    /// use eigenpoly::{Polynomial, SquareMatrix};
    ///
    /// // [[2, 1], [1, 2]]: (2 - x)^2 - 1 = x^2 - 4x + 3
    /// let a = SquareMatrix::from([[2.0, 1.0], [1.0, 2.0]]);
    /// assert_eq!(a.characteristic_polynomial(), Polynomial::new(vec![3.0, -4.0, 1.0]));
    /// ```
    pub fn characteristic_polynomial(&self) -> Polynomial<T> {
        SquareMatrix::tabulate(self.dim(), |r, c| {
            let v = self[(r, c)];
            if r == c {
                Polynomial::linear(v, -T::one())
            } else {
                Polynomial::constant(v)
            }
        })
        .laplacian_expansion()
    }
}

// ── Laplace expansion ───────────────────────────────────────────────

impl<R: Ring> SquareMatrix<R> {
    /// Determinant by cofactor expansion along row 0.
    ///
    /// Works over any [`Ring`], including [`Polynomial`]. Terms whose row-0
    /// entry is zero are skipped. Cost grows as `dim!`.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    /// let m = SquareMatrix::from([[2, 0, 1], [1, 3, 2], [1, 1, 2]]);
    /// assert_eq!(m.laplacian_expansion(), 6);
    /// ```
    pub fn laplacian_expansion(&self) -> R {
        let n = self.dim();
        if n == 1 {
            return self[(0, 0)].clone();
        }
        if n == 2 {
            return self[(0, 0)].clone() * self[(1, 1)].clone()
                - self[(1, 0)].clone() * self[(0, 1)].clone();
        }
        let mut det = R::zero();
        for k in 0..n {
            let a = &self[(0, k)];
            if a.is_zero() {
                continue;
            }
            let term = a.clone() * self.suppress_row_col(0, k).laplacian_expansion();
            det = if k % 2 == 0 { det + term } else { det - term };
        }
        det
    }
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// Solve `Ax = b` by Cramer's rule. `None` when `det(A)` is zero.
    ///
    /// Panics if `b.dim() != dim`.
    ///
    /// ```
    /// use eigenpoly::{SquareMatrix, Vector};
    ///
    /// let a = SquareMatrix::from([[2.0, 1.0], [1.0, 3.0]]);
    /// let x = a.cramers_rule(&Vector::from([3.0, 5.0])).unwrap();
    /// assert_eq!(x, Vector::from([0.8, 1.4]));
    /// ```
    pub fn cramers_rule(&self, b: &Vector<T>) -> Option<Vector<T>> {
        assert_eq!(b.dim(), self.dim(), "right-hand side has dimension {}, expected {}", b.dim(), self.dim());
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        Some(Vector::tabulate(self.dim(), |k| {
            self.replace_col(k, b).determinant() / det
        }))
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: Scalar> Mul<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        SquareMatrix(self.0.mul_matrix(&rhs.0))
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &SquareMatrix<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        self.0.mul_vector(rhs)
    }
}

impl<T: Scalar> Mul<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: T) -> SquareMatrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Add<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    #[track_caller]
    fn add(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        SquareMatrix(&self.0 + &rhs.0)
    }
}

impl<T: Scalar> Sub<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    #[track_caller]
    fn sub(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        SquareMatrix(&self.0 - &rhs.0)
    }
}
