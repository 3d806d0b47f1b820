//! # eigenpoly
//!
//! Dense real linear algebra built on immutable values: Gaussian and
//! Gauss-Jordan elimination, Laplace-expansion determinants, Cramer's rule,
//! matrix powers, and eigen-decomposition through the roots of the
//! characteristic polynomial.
//!
//! ## Quick start
//!
//! ```
//! use eigenpoly::{SquareMatrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = SquareMatrix::from([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Vector::from([8.0, -11.0, -3.0]);
//! let x = a.gauss_jordan_elimination(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//!
//! // Eigenvalues are the roots of det(A - xI)
//! let m = SquareMatrix::from([[-1.0, 6.0], [-3.0, 8.0]]);
//! assert_eq!(m.eigenvalues(1e-6), vec![2.0, 5.0]);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: [`Vector`], [`Matrix`], and [`SquareMatrix`]. Matrices
//!   store rows behind `Arc<[T]>`; every operation returns a new value and
//!   rows a row operation leaves alone are shared, not copied. Square
//!   matrices add elimination, inverses, determinants, powers, the
//!   characteristic polynomial, and eigen-decomposition.
//!
//! - [`poly`]: polynomial algebra on coefficient slices (index `k` holds the
//!   coefficient of `x^k`) and the [`Polynomial`] value type, which is a
//!   [`Ring`] and so can be a matrix element.
//!
//! - [`roots`]: real roots of real polynomials by a fixed chain of
//!   strategies (rational-root test, closed forms, bracketing and
//!   bisection) with deflation after each root. Tuned through
//!   [`RootSettings`].
//!
//! - [`traits`]: element trait hierarchy:
//!   - [`Ring`]: what Laplace expansion needs (`Zero + One + Neg + Sub`)
//!   - [`Scalar`]: matrix, vector, and coefficient elements (`Ring + Copy + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by norms,
//!     pivoting, root finding, and eigen-decomposition
//!
//! ## Errors
//!
//! Shape violations are programming errors: the `try_*` methods return
//! [`MatrixError`] and the operators panic with its message. Numerically
//! degenerate outcomes (a singular matrix, a repeated eigenvalue, a zero
//! vector to normalize) are `None`.
//!
//! ## Logging
//!
//! Diagnostic messages go through the [`log`](https://docs.rs/log) facade:
//! `trace!` for each root-finding strategy that fires, `debug!` when
//! elimination meets a singular column or eigen-decomposition is declined.
//! Install any `log` backend to see them.

pub mod matrix;
pub mod poly;
pub mod roots;
pub mod traits;

pub use matrix::{
    change_coordinates, find_coordinates, gram_schmidt, is_orthogonal, Matrix, MatrixError,
    Operand, Product, Shape, SquareMatrix, Vector,
};
pub use poly::{PolyError, Polynomial};
pub use roots::{find_roots, find_roots_with, RootSettings};
pub use traits::{FloatScalar, Ring, Scalar};
