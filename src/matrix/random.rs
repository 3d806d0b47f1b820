use std::ops::Range;

use rand::distributions::uniform::SampleUniform;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, SquareMatrix, Vector};

/// Diagonal entries drawn by [`SquareMatrix::random_invertible`].
const DIAGONAL_CHOICES: [f64; 8] = [1.0, -1.0, 2.0, -2.0, 2.5, -2.5, 0.5, 0.25];

/// Accepted `|det|` range for the random diagonal factor.
const DIAGONAL_DET: std::ops::RangeInclusive<f64> = 1e-4..=20.0;

/// Two fixed invertible integer matrices per dimension, `2..=7`.
#[rustfmt::skip]
static FACTORS: [[&[&[i8]]; 2]; 6] = [
    [
        &[&[1, 2], &[2, -1]],
        &[&[0, 1], &[1, 1]],
    ],
    [
        &[&[1, 2, 3], &[-1, 2, 3], &[1, -2, 3]],
        &[&[1, -2, -2], &[3, -1, 1], &[1, 1, 1]],
    ],
    [
        &[&[1, 2, 3, -1], &[-1, 2, 3, -2], &[1, -2, 3, 2], &[1, 1, -1, 1]],
        &[&[1, -2, -2, 1], &[3, -1, -1, 0], &[1, 2, 1, -1], &[1, 1, 1, 0]],
    ],
    [
        &[&[1, 2, 3, -1, 1], &[-1, 2, 3, -2, -1], &[-1, 2, 3, -2, 0], &[1, -2, 3, 2, 1],
          &[1, 1, -1, 1, 1]],
        &[&[1, -2, -2, 1, 1], &[3, -1, -1, 0, 2], &[3, -1, -1, 0, 1], &[1, 2, 1, -1, -1],
          &[1, 1, 1, 0, -1]],
    ],
    [
        &[&[1, 2, 3, -1, 1, 1], &[-1, 2, 3, -2, -1, -1], &[-1, 2, 3, -2, -1, 0],
          &[-1, 2, 3, -2, 0, 1], &[1, -2, 3, 2, 1, -1], &[1, 1, -1, 1, 1, -2]],
        &[&[1, -2, -2, 1, 1, 1], &[3, -1, -1, 0, 2, -1], &[3, -1, -1, 0, 1, -1],
          &[3, -1, -1, 0, 1, 0], &[1, 2, 1, -1, -1, 2], &[1, 1, 1, 0, -1, -1]],
    ],
    [
        &[&[1, 1, 2, 3, -1, 1, 1], &[-1, 1, 2, 3, -2, -1, -1], &[-1, 2, 1, 3, -2, -1, -1],
          &[-1, 2, 3, 1, -2, -1, 0], &[-1, 2, 3, -2, 1, 0, 1], &[1, -2, 3, 2, 1, 1, -1],
          &[1, 1, -1, 1, 1, -2, 1]],
        &[&[1, -2, -2, 1, 1, 1, 1], &[3, -1, -1, 1, 0, 2, -1], &[3, -1, -1, -1, 0, 1, -1],
          &[-1, 2, 3, -1, -2, -1, -1], &[3, -1, -1, 0, 1, 1, 0], &[-1, 2, 3, -2, -1, -1, -1],
          &[1, 1, 1, -1, 0, -1, -1]],
    ],
];

fn real<T: FloatScalar>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

impl<T: Scalar + PartialOrd + SampleUniform> Vector<T> {
    /// Vector with entries drawn uniformly from `range`.
    ///
    /// ```
    /// use eigenpoly::Vector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let v = Vector::random(5, &mut rng, -1.0..1.0);
    /// assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    /// ```
    pub fn random(dim: usize, rng: &mut (impl Rng + ?Sized), range: Range<T>) -> Self {
        Self::tabulate(dim, |_| rng.gen_range(range.clone()))
    }
}

impl<T: Scalar + PartialOrd + SampleUniform> Matrix<T> {
    /// Matrix with entries drawn uniformly from `range`.
    pub fn random(nrows: usize, ncols: usize, rng: &mut (impl Rng + ?Sized), range: Range<T>) -> Self {
        Self::tabulate(nrows, ncols, |_, _| rng.gen_range(range.clone()))
    }
}

impl<T: Scalar + PartialOrd + SampleUniform> SquareMatrix<T> {
    /// Square matrix with entries drawn uniformly from `range`.
    pub fn random(dim: usize, rng: &mut (impl Rng + ?Sized), range: Range<T>) -> Self {
        Self::from_square(Matrix::random(dim, dim, rng, range))
    }
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// Random invertible matrix of dimension `2..=7`.
    ///
    /// A diagonal with entries from `{±1, ±2, ±2.5, 0.5, 0.25}` and
    /// `|det|` in `[1e-4, 20]`, rows shuffled, times one of two fixed
    /// integer matrices of known non-zero determinant.
    ///
    /// Panics for other dimensions.
    ///
    /// ```
    /// use eigenpoly::SquareMatrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let m = SquareMatrix::<f64>::random_invertible(4, &mut rng);
    /// assert!(m.inverse().is_some());
    /// ```
    pub fn random_invertible(dim: usize, rng: &mut (impl Rng + ?Sized)) -> Self {
        assert!(
            (2..=7).contains(&dim),
            "random_invertible supports dimensions 2 to 7, got {dim}"
        );
        let diagonal = loop {
            let d: Vec<f64> = (0..dim)
                .map(|_| DIAGONAL_CHOICES[rng.gen_range(0..DIAGONAL_CHOICES.len())])
                .collect();
            if DIAGONAL_DET.contains(&d.iter().product::<f64>().abs()) {
                break d;
            }
        };
        let mut order: Vec<usize> = (0..dim).collect();
        order.shuffle(rng);
        let sparse = Self::tabulate(dim, |r, c| {
            if order[r] == c {
                real(diagonal[c])
            } else {
                T::zero()
            }
        });

        let factor = FACTORS[dim - 2][rng.gen_range(0..2)];
        let factor = Self::tabulate(dim, |r, c| real(f64::from(factor[r][c])));
        &sparse * &factor
    }
}
