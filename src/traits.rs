use core::fmt::Debug;
use core::ops::{Neg, Sub};

use num_traits::{Float, Num, NumCast, One, Zero};

/// Arithmetic capability required by ring-generic algorithms.
///
/// Laplace expansion only needs an additive identity, addition, negation,
/// and multiplication, so it is written against this trait rather than a
/// concrete numeric type. Every signed numeric type implements it, and so
/// does [`Polynomial`](crate::Polynomial), which is how the characteristic
/// polynomial `det(A - xI)` is computed with the same routine as a numeric
/// determinant.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Ring: Clone + PartialEq + Debug + Zero + One + Neg<Output = Self> + Sub<Output = Self> {}

impl<T> Ring for T where
    T: Clone + PartialEq + Debug + Zero + One + Neg<Output = T> + Sub<Output = T>
{
}

/// Trait for types that can be used as vector, matrix, and coefficient
/// elements.
///
/// Covers `f32`, `f64`, and all signed integer types.
pub trait Scalar: Ring + Copy + Num + NumCast {}

impl<T: Ring + Copy + Num + NumCast> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `acos`, `abs`, or a total
/// ordering of magnitudes (norms, angles, pivoting, root finding).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Convert a small integer constant into `T`.
///
/// Every `Scalar` can represent the counts and indices this crate feeds
/// through here (degrees, dimensions, small literals).
#[inline]
pub(crate) fn cast<T: Scalar>(n: usize) -> T {
    match T::from(n) {
        Some(v) => v,
        None => panic!("{n} is not representable in the element type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Polynomial;

    fn ring_sum<R: Ring>(xs: &[R]) -> R {
        xs.iter().cloned().fold(R::zero(), |acc, x| acc + x)
    }

    #[test]
    fn numeric_types_are_rings() {
        assert_eq!(ring_sum(&[1.0_f64, 2.0, 3.5]), 6.5);
        assert_eq!(ring_sum(&[1_i64, -2, 3]), 2);
    }

    #[test]
    fn polynomials_are_rings() {
        let p = Polynomial::new(vec![1.0, 1.0]);
        let q = Polynomial::new(vec![0.0, 0.0, 2.0]);
        assert_eq!(ring_sum(&[p, q]), Polynomial::new(vec![1.0, 1.0, 2.0]));
    }

    #[test]
    fn cast_small_constants() {
        assert_eq!(cast::<f64>(3), 3.0);
        assert_eq!(cast::<i32>(7), 7);
    }
}
