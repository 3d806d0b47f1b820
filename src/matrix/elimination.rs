use log::debug;

use crate::traits::FloatScalar;

use super::{Matrix, SquareMatrix, Vector};

// ── Row reduction on (augmented) matrices ───────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Gaussian elimination with partial pivoting.
    ///
    /// Works on the leading `nrows x nrows` block; extra columns (an
    /// augmented right-hand side) are carried along. Returns `None` when a
    /// pivot column has no non-zero candidate, or when the last diagonal
    /// entry comes out zero. A `Some` result is upper triangular on the
    /// leading block with a non-zero diagonal.
    ///
    /// ```
    /// use eigenpoly::Matrix;
    ///
    /// let m = Matrix::from([[1.0, 2.0, 5.0], [3.0, 4.0, 6.0]]);
    /// let e = m.make_row_echelon().unwrap();
    /// assert_eq!(e[(1, 0)], 0.0);
    /// assert_eq!(e.row(0), &[3.0, 4.0, 6.0]);
    ///
    /// assert!(Matrix::from([[1.0, 2.0], [2.0, 4.0]]).make_row_echelon().is_none());
    /// ```
    pub fn make_row_echelon(&self) -> Option<Self> {
        let n = self.nrows;
        assert!(
            self.ncols >= n,
            "row reduction needs at least as many columns as rows, got {}x{}",
            n,
            self.ncols
        );
        let mut m = self.clone();
        for k in 0..n - 1 {
            let Some(p) = m.find_pivot_row(k) else {
                debug!("row echelon: no pivot in column {k}");
                return None;
            };
            m = m.swap_rows(k, p);
            let pivot = m[(k, k)];
            for r in k + 1..n {
                let a = m[(r, k)];
                if !a.is_zero() {
                    // a * pivot - pivot * a cancels exactly
                    m = m.row_operation(a, k, -pivot, r);
                }
            }
        }
        if m[(n - 1, n - 1)].is_zero() {
            debug!("row echelon: zero in the last diagonal entry");
            return None;
        }
        Some(m)
    }

    /// Solve an upper-triangular augmented `dim x (dim + 1)` system.
    ///
    /// `x[k] = (m[k][dim] - Σ_{j>k} x[j] * m[k][j]) / m[k][k]`, from the
    /// last row up.
    pub fn back_substitution(&self) -> Vector<T> {
        let n = self.nrows;
        assert_eq!(
            self.ncols,
            n + 1,
            "back substitution needs a {}x{} augmented matrix, got {}x{}",
            n,
            n + 1,
            n,
            self.ncols
        );
        let mut x = vec![T::zero(); n];
        for k in (0..n).rev() {
            let rhs = (k + 1..n).fold(self[(k, n)], |acc, j| acc - x[j] * self[(k, j)]);
            x[k] = rhs / self[(k, k)];
        }
        Vector::new(x)
    }

    /// Gauss-Jordan reduction of the leading `nrows x nrows` block to the
    /// identity.
    ///
    /// Returns the reduced matrix and the determinant of the leading block,
    /// the product of the pivots times `(-1)^swaps`. A singular block gives
    /// `(None, 0)`.
    ///
    /// ```
    /// use eigenpoly::Matrix;
    ///
    /// let m = Matrix::from([[0.0, 2.0, 4.0], [1.0, 1.0, 3.0]]);
    /// let (reduced, det) = m.make_unit_diagonal();
    /// assert_eq!(reduced.unwrap(), Matrix::from([[1.0, 0.0, 1.0], [0.0, 1.0, 2.0]]));
    /// assert_eq!(det, -2.0);
    /// ```
    pub fn make_unit_diagonal(&self) -> (Option<Self>, T) {
        let n = self.nrows;
        assert!(
            self.ncols >= n,
            "row reduction needs at least as many columns as rows, got {}x{}",
            n,
            self.ncols
        );
        let mut m = self.clone();
        let mut det = T::one();
        for k in 0..n {
            let Some(p) = m.find_pivot_row(k) else {
                debug!("unit diagonal: no pivot in column {k}");
                return (None, T::zero());
            };
            if p != k {
                m = m.swap_rows(k, p);
                det = -det;
            }
            let pivot = m[(k, k)];
            det = det * pivot;
            // eliminate before normalizing, so a row equal to the pivot row
            // cancels exactly
            for r in (0..n).filter(|&r| r != k) {
                let a = m[(r, k)];
                if !a.is_zero() {
                    m = m.add_multiple_of_row(r, k, -(a / pivot));
                }
            }
            m = m.scale_row(T::one() / pivot, k);
            // clear round-off left in the pivot column
            m = m.replace_col(k, &Vector::tabulate(n, |r| if r == k { T::one() } else { T::zero() }));
        }
        (Some(m), det)
    }
}

// ── Linear systems ──────────────────────────────────────────────────

impl<T: FloatScalar> SquareMatrix<T> {
    /// Solve `Ax = b` by Gaussian elimination and back substitution.
    /// `None` if `A` is singular.
    ///
    /// ```
    /// use eigenpoly::{SquareMatrix, Vector};
    ///
    /// let a = SquareMatrix::from([[2.0, 1.0], [4.0, 3.0]]);
    /// let x = a.gaussian_elimination_back_substitution(&Vector::from([3.0, 7.0])).unwrap();
    /// assert_eq!(x, Vector::from([1.0, 1.0]));
    /// ```
    pub fn gaussian_elimination_back_substitution(&self, b: &Vector<T>) -> Option<Vector<T>> {
        self.adjoin_col(b)
            .make_row_echelon()
            .map(|m| m.back_substitution())
    }

    /// Solve `Ax = b` by Gauss-Jordan reduction. `None` if `A` is singular.
    pub fn gauss_jordan_elimination(&self, b: &Vector<T>) -> Option<Vector<T>> {
        let (reduced, _) = self.adjoin_col(b).make_unit_diagonal();
        reduced.map(|m| m.col_vec(self.dim()))
    }

    /// Inverse and determinant by Gauss-Jordan reduction of `[A | I]`.
    ///
    /// A singular matrix gives `(None, 0)`.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    ///
    /// let a = SquareMatrix::from([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let (inv, det) = a.gauss_jordan_inverse();
    /// assert!((det - 10.0).abs() < 1e-12);
    /// let id = &a * &inv.unwrap();
    /// assert!(id.distance(&SquareMatrix::identity(2)) < 1e-12);
    /// ```
    pub fn gauss_jordan_inverse(&self) -> (Option<Self>, T) {
        let n = self.dim();
        let (reduced, det) = self
            .adjoin_cols(&Self::identity(n))
            .make_unit_diagonal();
        let cols: Vec<usize> = (n..2 * n).collect();
        (
            reduced.map(|m| Self::from_square(m.extract_cols(&cols))),
            det,
        )
    }

    /// The inverse, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.gauss_jordan_inverse().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    fn system() -> (SquareMatrix<f64>, Vector<f64>) {
        (
            SquareMatrix::from([[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]),
            Vector::from([8.0, -11.0, -3.0]),
        )
    }

    #[test]
    fn row_echelon_is_upper_triangular() {
        let (a, b) = system();
        let e = a.adjoin_col(&b).make_row_echelon().unwrap();
        for r in 0..3 {
            assert!(e[(r, r)] != 0.0);
            for c in 0..r {
                assert_eq!(e[(r, c)], 0.0, "entry ({r}, {c})");
            }
        }
    }

    #[test]
    fn row_echelon_singular() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 0.0]]);
        assert!(m.make_row_echelon().is_none());
        // singular only in the last diagonal entry
        let m = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.make_row_echelon().is_none());
    }

    #[test]
    fn row_echelon_single_row() {
        let m = Matrix::from([[5.0, 10.0]]);
        assert_eq!(m.make_row_echelon(), Some(m.clone()));
        assert_eq!(m.make_row_echelon().unwrap().back_substitution(), Vector::from([2.0]));
    }

    #[test]
    fn back_substitution_upper_triangular() {
        let m = Matrix::from([[2.0, 1.0, 1.0, 6.0], [0.0, 1.0, 2.0, 7.0], [0.0, 0.0, 4.0, 12.0]]);
        assert_eq!(m.back_substitution(), Vector::from([1.0, 1.0, 3.0]));
    }

    #[test]
    fn solvers_agree() {
        let (a, b) = system();
        let want = [2.0, 3.0, -1.0];
        let ge = a.gaussian_elimination_back_substitution(&b).unwrap();
        let gj = a.gauss_jordan_elimination(&b).unwrap();
        let cr = a.cramers_rule(&b).unwrap();
        for k in 0..3 {
            assert_near(ge[k], want[k], TOL, "gaussian");
            assert_near(gj[k], want[k], TOL, "gauss-jordan");
            assert_near(cr[k], want[k], TOL, "cramer");
        }
    }

    #[test]
    fn singular_systems_have_no_solution() {
        let a = SquareMatrix::from([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
        let b = Vector::from([1.0, 1.0, 1.0]);
        assert!(a.gaussian_elimination_back_substitution(&b).is_none());
        assert!(a.gauss_jordan_elimination(&b).is_none());
        assert_eq!(a.gauss_jordan_inverse(), (None, 0.0));
        assert!(a.inverse().is_none());
    }

    #[test]
    fn unit_diagonal_determinant_matches_laplace() {
        let a = SquareMatrix::from([
            [0.0, 2.0, 1.0, -1.0],
            [3.0, 0.5, 0.0, 2.0],
            [1.0, 1.0, 4.0, 0.0],
            [-2.0, 0.0, 1.0, 1.0],
        ]);
        let (reduced, det) = a.make_unit_diagonal();
        assert_eq!(reduced.unwrap(), SquareMatrix::identity(4).into_matrix());
        assert_near(det, a.determinant(), 1e-9, "det");
    }

    #[test]
    fn inverse_round_trip() {
        let (a, _) = system();
        let inv = a.inverse().unwrap();
        assert!((&a * &inv).distance(&SquareMatrix::identity(3)) < TOL);
        assert!((&inv * &a).distance(&SquareMatrix::identity(3)) < TOL);
        assert_near(inv.inverse().unwrap().distance(&a), 0.0, TOL, "double inverse");
    }

    #[test]
    fn elimination_leaves_input_untouched() {
        let (a, b) = system();
        let before = a.clone();
        let _ = a.gauss_jordan_elimination(&b);
        let _ = a.gauss_jordan_inverse();
        assert_eq!(a, before);
    }
}
