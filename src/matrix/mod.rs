//! Dense row-stored matrices and vectors.
//!
//! [`Matrix`] keeps each row behind an `Arc<[T]>`. Values are immutable:
//! every operation returns a new matrix, and row operations that leave a
//! row untouched share that row with their input instead of copying it.
//!
//! [`SquareMatrix`] is the `n x n` specialization carrying elimination,
//! determinants, powers, and eigen-decomposition. A [`Matrix`] becomes a
//! [`SquareMatrix`] through [`Matrix::classify`], [`Matrix::into_square`], or
//! `TryFrom`.
//!
//! # Example
//!
//! ```
//! use eigenpoly::{Matrix, Shape, Vector};
//!
//! let m = Matrix::from([[2.0, 1.0], [1.0, 3.0]]);
//! let v = Vector::from([1.0, -1.0]);
//! assert_eq!(&m * &v, Vector::from([1.0, -2.0]));
//!
//! match m.classify() {
//!     Shape::Square(sq) => assert_eq!(sq.determinant(), 5.0),
//!     Shape::Rect(_) => unreachable!(),
//! }
//! ```

mod eigen;
mod elimination;
mod norm;
mod ops;
mod random;
mod rows;
mod space;
mod square;
mod util;
mod vector;

pub use ops::{Operand, Product};
pub use space::{change_coordinates, find_coordinates, gram_schmidt, is_orthogonal};
pub use square::SquareMatrix;
pub use vector::Vector;

use std::ops::Index;
use std::sync::Arc;

use crate::traits::Scalar;

/// Errors from matrix and vector construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Element-wise operation on operands of different shapes.
    /// Vectors are reported as `dim x 1`.
    #[error("dimension mismatch: {}x{} {op} {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Product of a matrix with an operand of incompatible shape.
    #[error("cannot multiply {}x{} by {}x{}", .left.0, .left.1, .right.0, .right.1)]
    IncompatibleOperand {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A row whose length differs from the first row.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// No rows, or no columns.
    #[error("a matrix or vector needs at least one row and one column")]
    Empty,
    /// A square matrix was required.
    #[error("{rows}x{cols} matrix is not square")]
    NotSquare { rows: usize, cols: usize },
}

/// Unwrap a shape check, panicking with the error's message.
#[track_caller]
pub(crate) fn or_panic<V>(r: Result<V, MatrixError>) -> V {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

/// Dense `nrows x ncols` matrix stored as shared rows.
///
/// Both dimensions are at least 1, and every row has `ncols` entries.
///
/// ```
/// use eigenpoly::Matrix;
///
/// let m = Matrix::tabulate(2, 3, |r, c| (r * 3 + c) as f64);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 5.0);
/// assert_eq!(m.row(1), &[3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: Vec<Arc<[T]>>,
    nrows: usize,
    ncols: usize,
}

/// Result of [`Matrix::classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    Square(SquareMatrix<T>),
    Rect(Matrix<T>),
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Build a matrix by calling `f(row, col)` for every cell, row by row.
    ///
    /// Panics if either dimension is zero.
    pub fn tabulate(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(nrows > 0 && ncols > 0, "{}", MatrixError::Empty);
        let rows = (0..nrows)
            .map(|r| (0..ncols).map(|c| f(r, c)).collect::<Arc<[T]>>())
            .collect();
        Self { rows, nrows, ncols }
    }

    /// Build a matrix from row vectors, rejecting ragged or empty input.
    ///
    /// ```
    /// use eigenpoly::{Matrix, MatrixError};
    ///
    /// let err = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    /// assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, got: 1 });
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: ncols,
                got: r.len(),
            });
        }
        Ok(Self::from_shared_rows(
            rows.into_iter().map(Arc::from).collect(),
            ncols,
        ))
    }

    /// Build a matrix from row vectors. Panics on ragged or empty input.
    #[track_caller]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        or_panic(Self::try_from_rows(rows))
    }

    /// Stack row vectors.
    ///
    /// Panics if `vectors` is empty or their dimensions differ.
    pub fn rows_to_matrix(vectors: &[Vector<T>]) -> Self {
        or_panic(Self::try_from_rows(
            vectors.iter().map(|v| v.as_slice().to_vec()).collect(),
        ))
    }

    /// Place vectors side by side as columns.
    ///
    /// Panics if `vectors` is empty or their dimensions differ.
    pub fn cols_to_matrix(vectors: &[Vector<T>]) -> Self {
        Self::rows_to_matrix(vectors).transpose()
    }

    pub(crate) fn from_shared_rows(rows: Vec<Arc<[T]>>, ncols: usize) -> Self {
        let nrows = rows.len();
        debug_assert!(rows.iter().all(|r| r.len() == ncols));
        Self { rows, nrows, ncols }
    }
}

impl<T: Scalar> Matrix<T> {
    /// The `nrows x ncols` zero matrix.
    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self::tabulate(nrows, ncols, |_, _| T::zero())
    }
}

impl<T: Clone, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    /// Panics if `M` or `N` is zero.
    fn from(rows: [[T; N]; M]) -> Self {
        Self::tabulate(M, N, |r, c| rows[r][c].clone())
    }
}

impl<T: Clone> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Self::try_from_rows(rows)
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row `r` as a slice.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.rows[r]
    }

    /// Iterate over rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(|r| &r[..])
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row)?.get(col)
    }

    /// Split into the square or rectangular case.
    pub fn classify(self) -> Shape<T> {
        if self.is_square() {
            Shape::Square(SquareMatrix::from_square(self))
        } else {
            Shape::Rect(self)
        }
    }

    /// The square specialization, if the matrix is square.
    pub fn into_square(self) -> Result<SquareMatrix<T>, MatrixError> {
        match self.classify() {
            Shape::Square(sq) => Ok(sq),
            Shape::Rect(m) => Err(MatrixError::NotSquare {
                rows: m.nrows,
                cols: m.ncols,
            }),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Row `r` as a vector.
    pub fn row_vec(&self, r: usize) -> Vector<T> {
        Vector::from_slice(self.row(r))
    }

    /// Column `c` as a vector.
    pub fn col_vec(&self, c: usize) -> Vector<T> {
        assert!(c < self.ncols, "column {c} out of range for {} columns", self.ncols);
        Vector::tabulate(self.nrows, |r| self.rows[r][c].clone())
    }

    /// The square specialization of a copy, if the matrix is square.
    /// Rows are shared, not copied.
    pub fn as_square(&self) -> Option<SquareMatrix<T>> {
        self.clone().into_square().ok()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulate_row_major() {
        let m = Matrix::tabulate(2, 3, |r, c| 10 * r + c);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.row(1), &[10, 11, 12]);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn tabulate_empty_panics() {
        let _ = Matrix::tabulate(0, 3, |_, _| 0.0);
    }

    #[test]
    fn try_from_rows_errors() {
        assert_eq!(
            Matrix::<f64>::try_from_rows(vec![]).unwrap_err(),
            MatrixError::Empty
        );
        assert_eq!(
            Matrix::<f64>::try_from_rows(vec![vec![]]).unwrap_err(),
            MatrixError::Empty
        );
        assert_eq!(
            Matrix::try_from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]).unwrap_err(),
            MatrixError::RaggedRows {
                row: 2,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    #[should_panic(expected = "row 1 has 3 entries, expected 2")]
    fn from_rows_ragged_panics() {
        let _ = Matrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn classify_square_and_rect() {
        assert!(matches!(
            Matrix::from([[1.0, 2.0], [3.0, 4.0]]).classify(),
            Shape::Square(_)
        ));
        assert!(matches!(
            Matrix::from([[1.0, 2.0, 3.0]]).classify(),
            Shape::Rect(_)
        ));
        assert_eq!(
            Matrix::from([[1.0, 2.0, 3.0]]).into_square().unwrap_err(),
            MatrixError::NotSquare { rows: 1, cols: 3 }
        );
    }

    #[test]
    fn row_and_col_vectors() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row_vec(0), Vector::from([1, 2, 3]));
        assert_eq!(m.col_vec(2), Vector::from([3, 6]));
        assert_eq!(m.get(1, 1), Some(&5));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn rows_and_cols_to_matrix() {
        let vs = [Vector::from([1, 2]), Vector::from([3, 4]), Vector::from([5, 6])];
        let by_rows = Matrix::rows_to_matrix(&vs);
        let by_cols = Matrix::cols_to_matrix(&vs);
        assert_eq!(by_rows, Matrix::from([[1, 2], [3, 4], [5, 6]]));
        assert_eq!(by_cols, Matrix::from([[1, 3, 5], [2, 4, 6]]));
    }

    #[test]
    fn error_messages() {
        let e = MatrixError::DimensionMismatch {
            op: "+",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: 2x3 + 3x2");
        let e = MatrixError::IncompatibleOperand {
            left: (2, 3),
            right: (2, 1),
        };
        assert_eq!(e.to_string(), "cannot multiply 2x3 by 2x1");
    }

    #[test]
    fn shared_values_are_send_and_sync() {
        fn check<X: Send + Sync>() {}
        check::<Matrix<f64>>();
        check::<SquareMatrix<f64>>();
        check::<Vector<f64>>();
    }
}
