use std::cmp::Ordering;

use log::debug;

use crate::roots::find_roots;
use crate::traits::FloatScalar;

use super::{SquareMatrix, Vector};

/// `true` when `xs` is ascending with every gap at least `epsilon`.
fn separated<T: FloatScalar>(xs: &[T], epsilon: T) -> bool {
    xs.windows(2).all(|w| w[1] - w[0] >= epsilon)
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// Real eigenvalues, ascending, as roots of the characteristic
    /// polynomial. Repeated roots appear with their multiplicity.
    ///
    /// Complex eigenvalues are not reported, so the result may be shorter
    /// than `dim`.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    ///
    /// assert_eq!(SquareMatrix::<f64>::identity(2).eigenvalues(1e-3), vec![1.0, 1.0]);
    /// assert_eq!(SquareMatrix::from([[-1.0, 6.0], [-3.0, 8.0]]).eigenvalues(1e-6), vec![2.0, 5.0]);
    /// // rotation by 90 degrees
    /// assert!(SquareMatrix::from([[0.0, -1.0], [1.0, 0.0]]).eigenvalues(1e-6).is_empty());
    /// ```
    pub fn eigenvalues(&self, epsilon: T) -> Vec<T> {
        find_roots(self.characteristic_polynomial().coefs(), epsilon)
    }

    /// One eigenvector per entry of `spectrum`.
    ///
    /// For `λ_k`, every column of `Π_{j≠k} (A - λ_j I)` lies in the
    /// eigenspace of `λ_k`; the non-negligible column with the smallest norm
    /// is returned, not normalized. Entries below `epsilon` in each factor
    /// are zeroed first. An entry is `None` when every column vanishes.
    ///
    /// Returns `None` unless `spectrum` has `dim` entries, is sorted
    /// ascending with gaps of at least `epsilon`, and has no entry smaller
    /// than `epsilon` in magnitude.
    pub fn eigenvectors(&self, spectrum: &[T], epsilon: T) -> Option<Vec<Option<Vector<T>>>> {
        let n = self.dim();
        if spectrum.len() != n {
            debug!("eigenvectors: {} eigenvalues for dimension {n}", spectrum.len());
            return None;
        }
        if !separated(spectrum, epsilon) {
            debug!("eigenvectors: spectrum {spectrum:?} is unsorted or not separated by {epsilon:?}");
            return None;
        }
        if spectrum.iter().any(|l| l.abs() < epsilon) {
            debug!("eigenvectors: spectrum {spectrum:?} contains a near-zero eigenvalue");
            return None;
        }

        let shifted: Vec<Self> = spectrum
            .iter()
            .map(|&l| {
                let m = self - &Self::identity(n).scale(l);
                Self::from_square(m.map(|x| if x.abs() < epsilon { T::zero() } else { x }))
            })
            .collect();

        let vectors = (0..n)
            .map(|k| {
                let product = shifted
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != k)
                    .fold(Self::identity(n), |acc, (_, m)| &acc * m);
                (0..n)
                    .map(|c| product.col_vec(c))
                    .map(|v| {
                        let norm = v.norm();
                        (norm, v)
                    })
                    .filter(|(norm, _)| *norm > epsilon)
                    .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
                    .map(|(_, v)| v)
            })
            .collect();
        Some(vectors)
    }

    /// Eigenvalue/eigenvector pairs in ascending eigenvalue order.
    ///
    /// `None` when the eigenvalues are not `dim` distinct real values at
    /// least `epsilon` apart, when one is smaller than `epsilon` in
    /// magnitude, or when an eigenvector cannot be recovered.
    ///
    /// ```
    /// use eigenpoly::{SquareMatrix, Vector};
    ///
    /// let a = SquareMatrix::from([[-1.0, 6.0], [-3.0, 8.0]]);
    /// let pairs = a.eigen(1e-6).unwrap();
    /// for (lambda, v) in &pairs {
    ///     assert!((&a * v).distance(&v.scale(*lambda)) < 1e-9);
    /// }
    /// assert_eq!(pairs[0].0, 2.0);
    ///
    /// assert!(SquareMatrix::<f64>::identity(2).eigen(1e-6).is_none());
    /// ```
    pub fn eigen(&self, epsilon: T) -> Option<Vec<(T, Vector<T>)>> {
        let values = self.eigenvalues(epsilon);
        if values.len() != self.dim() || !separated(&values, epsilon) {
            debug!("eigen: eigenvalues {values:?} are not {} distinct reals", self.dim());
            return None;
        }
        if values.iter().any(|l| l.abs() < epsilon) {
            debug!("eigen: eigenvalues {values:?} contain a near-zero value");
            return None;
        }
        let vectors = self.eigenvectors(&values, epsilon)?;
        values
            .into_iter()
            .zip(vectors)
            .map(|(l, v)| v.map(|v| (l, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_eigenpair(a: &SquareMatrix<f64>, lambda: f64, v: &Vector<f64>, tol: f64) {
        assert!(v.norm() > EPS, "zero eigenvector for {lambda}");
        let residual = (a * v).distance(&v.scale(lambda));
        assert!(
            residual < tol * v.norm(),
            "A v != {lambda} v: residual {residual}, v = {v:?}"
        );
    }

    #[test]
    fn identity_has_repeated_eigenvalue() {
        let id = SquareMatrix::<f64>::identity(2);
        assert_eq!(id.eigenvalues(0.001), vec![1.0, 1.0]);
        assert!(id.eigen(0.001).is_none());
    }

    #[test]
    fn triangular_eigenvalues_are_the_diagonal() {
        let a = SquareMatrix::from([
            [1.0, 1.0, -1.0, 1.0],
            [0.0, 2.0, 1.0, -1.0],
            [0.0, 0.0, 3.0, 1.0],
            [0.0, 0.0, 0.0, 4.0],
        ]);
        assert_eq!(a.eigenvalues(EPS), vec![1.0, 2.0, 3.0, 4.0]);
        let pairs = a.eigen(EPS).unwrap();
        assert_eq!(pairs.len(), 4);
        for (lambda, v) in &pairs {
            assert_eigenpair(&a, *lambda, v, 1e-9);
        }
    }

    #[test]
    fn symmetric_tridiagonal() {
        let a = SquareMatrix::from([[2.0_f64, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 2.0]]);
        let s = std::f64::consts::SQRT_2;
        let values = a.eigenvalues(1e-9);
        assert_eq!(values.len(), 3);
        for (got, want) in values.iter().zip([2.0 - s, 2.0, 2.0 + s]) {
            assert!((got - want).abs() < 1e-9, "{values:?}");
        }
        for (lambda, v) in &a.eigen(1e-9).unwrap() {
            assert_eigenpair(&a, *lambda, v, 1e-6);
        }
    }

    #[test]
    fn zero_eigenvalue_is_declined() {
        let a = SquareMatrix::from([[1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(a.eigenvalues(EPS), vec![0.0, 1.0]);
        assert!(a.eigen(EPS).is_none());
        assert!(a.eigenvectors(&[0.0, 1.0], EPS).is_none());
    }

    #[test]
    fn eigenvectors_reject_bad_spectra() {
        let a = SquareMatrix::from([[-1.0, 6.0], [-3.0, 8.0]]);
        assert!(a.eigenvectors(&[5.0, 2.0], EPS).is_none(), "unsorted");
        assert!(a.eigenvectors(&[2.0], EPS).is_none(), "wrong length");
        assert!(a.eigenvectors(&[2.0, 2.0 + 1e-9], EPS).is_none(), "too close");
        assert!(a.eigenvectors(&[2.0, 5.0], EPS).is_some());
    }

    #[test]
    fn eigenvector_picks_smallest_column() {
        let a = SquareMatrix::from([[-1.0, 6.0], [-3.0, 8.0]]);
        let vs = a.eigenvectors(&[2.0, 5.0], EPS).unwrap();
        // A - 5I = [[-6, 6], [-3, 3]]: both columns have equal norm, the first wins
        assert_eq!(vs[0], Some(Vector::from([-6.0, -3.0])));
        // A - 2I = [[-3, 6], [-3, 6]]
        assert_eq!(vs[1], Some(Vector::from([-3.0, -3.0])));
    }

    #[test]
    fn vanishing_product_gives_undefined_entry() {
        let a = SquareMatrix::from([[3.0, 0.0], [0.0, 3.0]]);
        let vs = a.eigenvectors(&[1.0, 3.0], EPS).unwrap();
        assert_eq!(vs, vec![None, Some(Vector::from([2.0, 0.0]))]);
    }
}
