//! Polynomial algebra over coefficient sequences.
//!
//! A polynomial is an ordered sequence of coefficients where index `k` holds
//! the coefficient of `x^k`, so `2x^3 - x^2 + 4` is `[4, 0, -1, 2]`.
//! Trailing zero coefficients are insignificant: two sequences denote the
//! same polynomial iff they agree after [`chop`].
//!
//! The free functions operate on slices and return new `Vec`s; the
//! [`Polynomial`] value type wraps them with operators and implements
//! [`Ring`](crate::traits::Ring), which lets it be used as a matrix element.
//!
//! # Example
//!
//! ```
//! use eigenpoly::poly;
//!
//! // (x - 1)(x - 2) = x^2 - 3x + 2
//! let p = poly::multiply(&[-1.0, 1.0], &[-2.0, 1.0]);
//! assert_eq!(p, vec![2.0, -3.0, 1.0]);
//! assert_eq!(poly::evaluate(&p, 2.0), 0.0);
//! assert_eq!(poly::derivative(&p), vec![-3.0, 2.0]);
//! ```

mod division;
mod ops;

pub use division::{divide, divide_out_root, divide_out_roots};

use crate::traits::{cast, Scalar};

/// Errors from polynomial operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// The divisor chops to the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionByZero,
    /// An empty coefficient sequence does not denote a polynomial.
    #[error("an empty coefficient sequence is not a polynomial")]
    Empty,
}

fn require_nonempty<T>(coefs: &[T], what: &str) {
    assert!(!coefs.is_empty(), "{what}: {}", PolyError::Empty);
}

/// Degree of the polynomial, ignoring trailing zero coefficients.
///
/// A single-element sequence (including `[0]`) has degree `0`.
/// Panics on an empty sequence.
///
/// ```
/// use eigenpoly::poly;
/// assert_eq!(poly::degree(&[4.0, 0.0, -1.0, 2.0]), 3);
/// assert_eq!(poly::degree(&[1.0, 2.0, 0.0, 0.0]), 1);
/// assert_eq!(poly::degree(&[0.0]), 0);
/// ```
pub fn degree<T: Scalar>(coefs: &[T]) -> usize {
    require_nonempty(coefs, "degree");
    coefs
        .iter()
        .rposition(|c| !c.is_zero())
        .unwrap_or(0)
}

/// Strip trailing zeros, retaining at least one coefficient.
///
/// ```
/// use eigenpoly::poly;
/// assert_eq!(poly::chop(&[1.0, 2.0, 0.0, 0.0]), vec![1.0, 2.0]);
/// assert_eq!(poly::chop(&[0.0, 0.0]), vec![0.0]);
/// ```
pub fn chop<T: Scalar>(coefs: &[T]) -> Vec<T> {
    coefs[..degree(coefs) + 1].to_vec()
}

/// Extend `coefs` to length `n` by appending zeros. Longer input is
/// returned unchanged.
pub fn pad_right<T: Scalar>(n: usize, coefs: &[T]) -> Vec<T> {
    let mut out = coefs.to_vec();
    if out.len() < n {
        out.resize(n, T::zero());
    }
    out
}

/// Whether two coefficient sequences denote the same polynomial.
pub fn equal<T: Scalar>(a: &[T], b: &[T]) -> bool {
    chop(a) == chop(b)
}

/// Sum of two polynomials; the shorter operand is padded.
pub fn add<T: Scalar>(a: &[T], b: &[T]) -> Vec<T> {
    require_nonempty(a, "add");
    require_nonempty(b, "add");
    let n = a.len().max(b.len());
    (0..n)
        .map(|k| {
            let x = a.get(k).copied().unwrap_or_else(T::zero);
            let y = b.get(k).copied().unwrap_or_else(T::zero);
            x + y
        })
        .collect()
}

/// Difference `a - b`.
pub fn sub<T: Scalar>(a: &[T], b: &[T]) -> Vec<T> {
    add(a, &scale(T::zero() - T::one(), b))
}

/// Multiply every coefficient by `s`.
pub fn scale<T: Scalar>(s: T, coefs: &[T]) -> Vec<T> {
    coefs.iter().map(|&c| s * c).collect()
}

/// Product of two polynomials.
///
/// Computed as the sum of `b` scaled by `a[i]` and shifted up `i` places,
/// which is `O(len(a) * len(b))`.
pub fn multiply<T: Scalar>(a: &[T], b: &[T]) -> Vec<T> {
    require_nonempty(a, "multiply");
    require_nonempty(b, "multiply");
    let mut out = vec![T::zero(); a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] = out[i + j] + ai * bj;
        }
    }
    out
}

/// Sum of a sequence of polynomials. The empty sum is `[0]`.
pub fn sum<T: Scalar>(polys: &[Vec<T>]) -> Vec<T> {
    polys.iter().fold(vec![T::zero()], |acc, p| add(&acc, p))
}

/// Product of a sequence of polynomials. The empty product is `[1]`.
pub fn product<T: Scalar>(polys: &[Vec<T>]) -> Vec<T> {
    polys.iter().fold(vec![T::one()], |acc, p| multiply(&acc, p))
}

/// Raise a polynomial to the power `p` by repeated squaring.
///
/// Uses `O(log p)` multiplications; `power(_, 0)` is `[1]`.
pub fn power<T: Scalar>(coefs: &[T], mut p: u32) -> Vec<T> {
    let mut result = vec![T::one()];
    let mut base = coefs.to_vec();
    while p > 0 {
        if p & 1 == 1 {
            result = multiply(&result, &base);
        }
        p >>= 1;
        if p > 0 {
            base = multiply(&base, &base);
        }
    }
    result
}

/// The monic polynomial `Π (x - r)` having exactly the given roots.
///
/// ```
/// use eigenpoly::poly;
/// assert_eq!(poly::from_roots(&[1.0, 2.0]), vec![2.0, -3.0, 1.0]);
/// ```
pub fn from_roots<T: Scalar>(roots: &[T]) -> Vec<T> {
    roots.iter().fold(vec![T::one()], |acc, &r| {
        multiply(&acc, &[T::zero() - r, T::one()])
    })
}

/// Evaluate the polynomial at `x` (Horner's scheme).
pub fn evaluate<T: Scalar>(coefs: &[T], x: T) -> T {
    coefs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Coefficients of the derivative: `c_k * k` shifted down one degree.
///
/// The derivative of a constant is `[0]`.
pub fn derivative<T: Scalar>(coefs: &[T]) -> Vec<T> {
    if coefs.len() <= 1 {
        return vec![T::zero()];
    }
    coefs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| c * cast::<T>(k))
        .collect()
}

/// A polynomial value.
///
/// Equality is modulo trailing zeros. Implements [`Ring`](crate::traits::Ring)
/// so it can fill a [`Matrix`](crate::Matrix) and go through
/// [`SquareMatrix::laplacian_expansion`](crate::SquareMatrix::laplacian_expansion).
///
/// ```
/// use eigenpoly::Polynomial;
///
/// let p = Polynomial::new(vec![-1.0, 1.0]);        // x - 1
/// let q = Polynomial::new(vec![1.0, 1.0, 0.0]);    // x + 1
/// let r = &p * &q;
/// assert_eq!(r, Polynomial::new(vec![-1.0, 0.0, 1.0]));
/// assert_eq!(r.eval(3.0), 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial<T> {
    coefs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Wrap a coefficient sequence. Panics if `coefs` is empty.
    pub fn new(coefs: Vec<T>) -> Self {
        require_nonempty(&coefs, "Polynomial::new");
        Self { coefs }
    }

    /// Wrap a coefficient sequence, rejecting an empty one.
    pub fn try_new(coefs: Vec<T>) -> Result<Self, PolyError> {
        if coefs.is_empty() {
            return Err(PolyError::Empty);
        }
        Ok(Self { coefs })
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self { coefs: vec![c] }
    }

    /// The degree-1 polynomial `constant + linear * x`.
    pub fn linear(constant: T, linear: T) -> Self {
        Self {
            coefs: vec![constant, linear],
        }
    }

    /// Monic polynomial with the given roots.
    pub fn from_roots(roots: &[T]) -> Self {
        Self {
            coefs: from_roots(roots),
        }
    }

    /// Coefficients, lowest degree first, as stored (not chopped).
    #[inline]
    pub fn coefs(&self) -> &[T] {
        &self.coefs
    }

    /// Consume into the coefficient vector.
    pub fn into_coefs(self) -> Vec<T> {
        self.coefs
    }

    /// Degree ignoring trailing zeros.
    pub fn degree(&self) -> usize {
        degree(&self.coefs)
    }

    /// Copy with trailing zeros removed.
    pub fn chop(&self) -> Self {
        Self {
            coefs: chop(&self.coefs),
        }
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: T) -> T {
        evaluate(&self.coefs, x)
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(&self, s: T) -> Self {
        Self {
            coefs: scale(s, &self.coefs),
        }
    }

    /// Derivative.
    pub fn derivative(&self) -> Self {
        Self {
            coefs: derivative(&self.coefs),
        }
    }

    /// Integer power by repeated squaring.
    pub fn power(&self, p: u32) -> Self {
        Self {
            coefs: power(&self.coefs, p),
        }
    }

    /// Long division: `(quotient, remainder)`.
    pub fn divide(&self, denominator: &Self) -> Result<(Self, Self), PolyError> {
        let (q, r) = divide(&self.coefs, &denominator.coefs)?;
        Ok((Self { coefs: q }, Self { coefs: r }))
    }

    /// Synthetic division by `(x - r)`: `(quotient, p(r))`.
    pub fn divide_out_root(&self, r: T) -> (Self, T) {
        let (q, rem) = divide_out_root(r, &self.coefs);
        (Self { coefs: q }, rem)
    }
}

impl<T: Scalar> From<Vec<T>> for Polynomial<T> {
    fn from(coefs: Vec<T>) -> Self {
        Self::new(coefs)
    }
}

impl<T: Scalar> From<&[T]> for Polynomial<T> {
    fn from(coefs: &[T]) -> Self {
        Self::new(coefs.to_vec())
    }
}
