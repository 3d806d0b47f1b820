use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::traits::Scalar;

use super::Polynomial;

// ── Equality modulo trailing zeros ──────────────────────────────────

impl<T: Scalar> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        super::equal(&self.coefs, &other.coefs)
    }
}

// ── Addition ────────────────────────────────────────────────────────

impl<T: Scalar> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial {
            coefs: super::add(&self.coefs, &rhs.coefs),
        }
    }
}

impl<T: Scalar> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

// ── Subtraction ─────────────────────────────────────────────────────

impl<T: Scalar> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial {
            coefs: super::sub(&self.coefs, &rhs.coefs),
        }
    }
}

impl<T: Scalar> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial {
            coefs: self.coefs.iter().map(|&c| T::zero() - c).collect(),
        }
    }
}

impl<T: Scalar> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Multiplication ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial {
            coefs: super::multiply(&self.coefs, &rhs.coefs),
        }
    }
}

impl<T: Scalar> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Polynomial<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

// ── Identities ──────────────────────────────────────────────────────

impl<T: Scalar> Zero for Polynomial<T> {
    fn zero() -> Self {
        Polynomial::constant(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::constant(T::one())
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Highest degree first, zero terms omitted: `2x^3 - x^2 + 4`.
impl<T: Scalar + fmt::Display + PartialOrd> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, &c) in self.coefs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let negative = c < T::zero();
            let mag = if negative { T::zero() - c } else { c };
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;
            let unit = mag.is_one() && k > 0;
            if !unit {
                write!(f, "{mag}")?;
            }
            match k {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{k}")?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
