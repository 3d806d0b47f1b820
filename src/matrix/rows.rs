use std::sync::Arc;

use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, MatrixError, Vector};

// ── Structural surgery ──────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::tabulate(self.ncols, self.nrows, |r, c| self.rows[c][r].clone())
    }

    /// Swap rows `r1` and `r2`. No row is copied.
    pub fn swap_rows(&self, r1: usize, r2: usize) -> Self {
        assert!(
            r1 < self.nrows && r2 < self.nrows,
            "row swap ({r1}, {r2}) out of range for {} rows",
            self.nrows
        );
        let mut rows = self.rows.clone();
        rows.swap(r1, r2);
        Self::from_shared_rows(rows, self.ncols)
    }

    /// Swap columns `c1` and `c2`.
    pub fn swap_cols(&self, c1: usize, c2: usize) -> Self {
        if c1 == c2 {
            return self.clone();
        }
        self.transpose().swap_rows(c1, c2).transpose()
    }

    /// Remove row `r` and column `c`.
    ///
    /// Panics unless the matrix has at least two rows and two columns.
    pub fn suppress_row_col(&self, r: usize, c: usize) -> Self {
        assert!(
            self.nrows > 1 && self.ncols > 1,
            "cannot remove a row and column from a {}x{} matrix",
            self.nrows,
            self.ncols
        );
        assert!(r < self.nrows && c < self.ncols, "({r}, {c}) out of range");
        Self::tabulate(self.nrows - 1, self.ncols - 1, |i, j| {
            let i = i + usize::from(i >= r);
            let j = j + usize::from(j >= c);
            self.rows[i][j].clone()
        })
    }

    /// Append `v` as a new bottom row. `v.dim()` must equal `ncols`.
    pub fn adjoin_row(&self, v: &Vector<T>) -> Self {
        self.adjoin_rows(&Self::rows_to_matrix(std::slice::from_ref(v)))
    }

    /// Append `v` as a new rightmost column. `v.dim()` must equal `nrows`.
    pub fn adjoin_col(&self, v: &Vector<T>) -> Self {
        self.adjoin_cols(&Self::cols_to_matrix(std::slice::from_ref(v)))
    }

    /// Stack the rows of `m` below `self`. Existing rows are shared.
    pub fn adjoin_rows(&self, m: &Self) -> Self {
        assert_eq!(
            self.ncols,
            m.ncols,
            "{}",
            MatrixError::DimensionMismatch {
                op: "adjoin rows",
                left: self.shape(),
                right: m.shape(),
            }
        );
        let rows = self.rows.iter().chain(&m.rows).cloned().collect();
        Self::from_shared_rows(rows, self.ncols)
    }

    /// Place the columns of `m` to the right of `self`.
    pub fn adjoin_cols(&self, m: &Self) -> Self {
        assert_eq!(
            self.nrows,
            m.nrows,
            "{}",
            MatrixError::DimensionMismatch {
                op: "adjoin cols",
                left: self.shape(),
                right: m.shape(),
            }
        );
        let rows = self
            .rows
            .iter()
            .zip(&m.rows)
            .map(|(a, b)| a.iter().chain(b.iter()).cloned().collect::<Arc<[T]>>())
            .collect();
        Self::from_shared_rows(rows, self.ncols + m.ncols)
    }

    /// Keep the rows listed in `keep`, in the order given. Rows are shared.
    pub fn extract_rows(&self, keep: &[usize]) -> Self {
        assert!(!keep.is_empty(), "{}", MatrixError::Empty);
        let rows = keep.iter().map(|&r| self.rows[r].clone()).collect();
        Self::from_shared_rows(rows, self.ncols)
    }

    /// Keep the columns listed in `keep`, in the order given.
    pub fn extract_cols(&self, keep: &[usize]) -> Self {
        Self::tabulate(self.nrows, keep.len(), |r, c| self.rows[r][keep[c]].clone())
    }

    /// Replace row `r` with `v`. Other rows are shared.
    pub fn replace_row(&self, r: usize, v: &Vector<T>) -> Self {
        assert_eq!(
            v.dim(),
            self.ncols,
            "replacement row has {} entries, expected {}",
            v.dim(),
            self.ncols
        );
        self.with_row(r, Arc::from(v.as_slice()))
    }

    /// Replace column `c` with `v`.
    pub fn replace_col(&self, c: usize, v: &Vector<T>) -> Self {
        assert_eq!(
            v.dim(),
            self.nrows,
            "replacement column has {} entries, expected {}",
            v.dim(),
            self.nrows
        );
        Self::tabulate(self.nrows, self.ncols, |i, j| {
            if j == c {
                v[i].clone()
            } else {
                self.rows[i][j].clone()
            }
        })
    }

    fn with_row(&self, r: usize, row: Arc<[T]>) -> Self {
        assert!(r < self.nrows, "row {r} out of range for {} rows", self.nrows);
        let mut rows = self.rows.clone();
        rows[r] = row;
        Self::from_shared_rows(rows, self.ncols)
    }
}

// ── Elementary row operations ───────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Multiply row `r` by `s`. Other rows are shared.
    pub fn scale_row(&self, s: T, r: usize) -> Self {
        let row = self.rows[r].iter().map(|&x| s * x).collect();
        self.with_row(r, row)
    }

    /// Replace row `r2` with `s1 * row(r1) + s2 * row(r2)`.
    ///
    /// Every other row is shared with `self`, not recomputed.
    ///
    /// ```
    /// use eigenpoly::Matrix;
    ///
    /// let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// let n = m.row_operation(-3.0, 0, 1.0, 1);
    /// assert_eq!(n, Matrix::from([[1.0, 2.0], [0.0, -2.0]]));
    /// ```
    pub fn row_operation(&self, s1: T, r1: usize, s2: T, r2: usize) -> Self {
        let (a, b) = (&self.rows[r1], &self.rows[r2]);
        let row = a.iter().zip(b.iter()).map(|(&x, &y)| s1 * x + s2 * y).collect();
        self.with_row(r2, row)
    }

    /// Add `s` times row `r2` to row `r1`.
    pub fn add_multiple_of_row(&self, r1: usize, r2: usize, s: T) -> Self {
        self.row_operation(s, r2, T::one(), r1)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Pivot row for column `c`: the row in `c..nrows` with the largest
    /// absolute entry in column `c`, the lowest index on ties.
    ///
    /// `None` when that entry is exactly zero.
    pub fn find_pivot_row(&self, c: usize) -> Option<usize> {
        if c >= self.nrows {
            return None;
        }
        let mut best = c;
        for r in c + 1..self.nrows {
            if self.rows[r][c].abs() > self.rows[best][c].abs() {
                best = r;
            }
        }
        if self.rows[best][c].is_zero() {
            return None;
        }
        Some(best)
    }
}
