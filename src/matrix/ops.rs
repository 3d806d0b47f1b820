use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

use super::{or_panic, Matrix, MatrixError, Vector};

/// Right-hand operand of [`Matrix::try_mul`].
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    Scalar(T),
    Matrix(&'a Matrix<T>),
    /// Treated as a column vector.
    Vector(&'a Vector<T>),
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(v: &'a Vector<T>) -> Self {
        Operand::Vector(v)
    }
}

/// Result of [`Matrix::try_mul`].
#[derive(Debug, Clone, PartialEq)]
pub enum Product<T> {
    Matrix(Matrix<T>),
    Vector(Vector<T>),
}

impl<T> Product<T> {
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Product::Matrix(m) => Some(m),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Matrix(_) => None,
        }
    }
}

// ── Fallible arithmetic ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, op: &'static str, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Self::tabulate(self.nrows, self.ncols, |r, c| {
            f(self.rows[r][c], rhs.rows[r][c])
        }))
    }

    /// Element-wise sum.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with("+", rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with("-", rhs, |a, b| a - b)
    }

    /// Multiply every entry by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Multiply by a scalar, a matrix, or a column vector.
    ///
    /// - A scalar scales every entry.
    /// - A matrix needs `self.ncols() == other.nrows()` and gives the
    ///   matrix product.
    /// - A vector needs `self.ncols() == v.dim()` and gives a vector.
    ///
    /// Any other shape combination is [`MatrixError::IncompatibleOperand`].
    ///
    /// ```
    /// use eigenpoly::{Matrix, MatrixError, Operand, Vector};
    ///
    /// let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let v = Vector::from([1.0, 0.0, -1.0]);
    /// let p = m.try_mul(Operand::from(&v)).unwrap();
    /// assert_eq!(p.into_vector(), Some(Vector::from([-2.0, -2.0])));
    ///
    /// let err = m.try_mul(Operand::from(&m)).unwrap_err();
    /// assert_eq!(err, MatrixError::IncompatibleOperand { left: (2, 3), right: (2, 3) });
    /// ```
    pub fn try_mul(&self, other: Operand<'_, T>) -> Result<Product<T>, MatrixError> {
        match other {
            Operand::Scalar(s) => Ok(Product::Matrix(self.scale(s))),
            Operand::Matrix(m) => self.try_mul_matrix(m).map(Product::Matrix),
            Operand::Vector(v) => self.try_mul_vector(v).map(Product::Vector),
        }
    }

    fn try_mul_matrix(&self, m: &Self) -> Result<Self, MatrixError> {
        if self.ncols != m.nrows {
            return Err(MatrixError::IncompatibleOperand {
                left: self.shape(),
                right: m.shape(),
            });
        }
        Ok(Self::tabulate(self.nrows, m.ncols, |r, c| {
            let row = &self.rows[r];
            (0..self.ncols).fold(T::zero(), |acc, k| acc + row[k] * m.rows[k][c])
        }))
    }

    fn try_mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        if self.ncols != v.dim() {
            return Err(MatrixError::IncompatibleOperand {
                left: self.shape(),
                right: (v.dim(), 1),
            });
        }
        Ok(Vector::tabulate(self.nrows, |r| {
            self.rows[r]
                .iter()
                .zip(v.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
        }))
    }

    #[track_caller]
    pub(crate) fn mul_matrix(&self, rhs: &Self) -> Self {
        or_panic(self.try_mul_matrix(rhs))
    }

    #[track_caller]
    pub(crate) fn mul_vector(&self, rhs: &Vector<T>) -> Vector<T> {
        or_panic(self.try_mul_vector(rhs))
    }
}

// ── Matrix operators ────────────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.try_add(rhs))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.try_sub(rhs))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.mul_matrix(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: Self) -> Matrix<T> {
        self.mul_matrix(&rhs)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        self.mul_vector(rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

// ── Vector operators ────────────────────────────────────────────────

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        or_panic(self.try_add(rhs))
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        or_panic(self.try_sub(rhs))
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.scale(T::zero() - T::one())
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -&self
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}
