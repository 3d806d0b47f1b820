use crate::traits::{FloatScalar, Scalar};

use super::{or_panic, Matrix, MatrixError, Vector};

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Squared Euclidean norm. No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.inner_product(self)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean norm.
    ///
    /// ```
    /// use eigenpoly::Vector;
    /// assert_eq!(Vector::from([3.0, 4.0]).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let n = self.norm();
        if n.is_zero() {
            return None;
        }
        Some(self.scale(T::one() / n))
    }

    /// Euclidean distance `|self - other|`.
    pub fn try_distance(&self, other: &Self) -> Result<T, MatrixError> {
        Ok(self.try_sub(other)?.norm())
    }

    /// Euclidean distance. Panics if the dimensions differ.
    #[track_caller]
    pub fn distance(&self, other: &Self) -> T {
        or_panic(self.try_distance(other))
    }

    /// Angle between two vectors, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so round-off never
    /// produces NaN. Symmetric in its arguments. `None` if either vector is
    /// zero. Panics if the dimensions differ.
    ///
    /// ```
    /// use eigenpoly::Vector;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// let x = Vector::from([1.0, 0.0]);
    /// assert_eq!(x.angle(&Vector::from([0.0, 2.0])), Some(FRAC_PI_2));
    /// assert_eq!(x.angle(&Vector::from([-3.0, 0.0])), Some(PI));
    /// assert_eq!(x.angle(&Vector::from([0.0, 0.0])), None);
    /// ```
    #[track_caller]
    pub fn angle(&self, other: &Self) -> Option<T> {
        let ip = self.inner_product(other);
        let denom = self.norm() * other.norm();
        if denom.is_zero() {
            return None;
        }
        let cos = (ip / denom).max(-T::one()).min(T::one());
        Some(cos.acos())
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Largest absolute entry.
    ///
    /// ```
    /// use eigenpoly::Matrix;
    /// assert_eq!(Matrix::from([[1.0, -7.0], [3.0, 2.0]]).norm(), 7.0);
    /// ```
    pub fn norm(&self) -> T {
        self.row_iter()
            .flat_map(|r| r.iter())
            .fold(T::zero(), |m, &x| m.max(x.abs()))
    }

    /// `norm(self - other)`. Panics if the shapes differ.
    #[track_caller]
    pub fn distance(&self, other: &Self) -> T {
        or_panic(self.try_sub(other)).norm()
    }
}
