//! Real roots of real polynomials.
//!
//! [`find_roots`] applies a fixed sequence of strategies to a coefficient
//! sequence (lowest degree first). Each strategy either answers directly or
//! deflates the polynomial to a strictly smaller degree and recurses:
//!
//! 1. degree 0: no roots
//! 2. zero leading coefficient: drop it
//! 3. negative leading coefficient: negate
//! 4. degree 1: `-b / a`
//! 5. zero constant term: `0` is a root, divide out `x`
//! 6. rational-root test ([`rational_roots`]) for integral coefficients
//! 7. two-term polynomials `a x^n + b` ([`mid_zero_roots`])
//! 8. degree 2: quadratic formula ([`roots_quadratic`])
//! 9. odd degree: widen a bracket around `[-1, 1]` until the sign changes,
//!    bisect ([`search_root`]), deflate
//! 10. even degree: bisect between critical points ([`inflection_roots`]),
//!     deflate
//!
//! Roots come back in ascending order, repeated roots once per multiplicity.
//!
//! Step 10 is a heuristic. An even-degree polynomial whose real roots do
//! not lie between two critical points with a sign change (for example
//! `x^4 + x - 3`, which has a single critical point) is reported as having
//! no further real roots.
//!
//! # Example
//!
//! ```
//! use eigenpoly::roots::find_roots;
//!
//! // x^2 - 3x + 2
//! assert_eq!(find_roots(&[2.0, -3.0, 1.0], 1e-5), vec![1.0, 2.0]);
//!
//! // x^3 - 2 has one real root
//! let r = find_roots(&[-2.0_f64, 0.0, 0.0, 1.0], 1e-5);
//! assert_eq!(r.len(), 1);
//! assert!((r[0] - 2.0_f64.cbrt()).abs() < 1e-5);
//! ```

mod bracket;
mod rational;

#[cfg(test)]
mod tests;

pub use bracket::{find_x_intercept, inflection_roots, mid_zero_roots, roots_quadratic, search_root};
pub use rational::{divisors, gcd, rational_candidates, rational_roots};

use core::cmp::Ordering;

use log::{debug, trace};

use crate::poly::{self, PolyError};
use crate::traits::{cast, FloatScalar};

/// Settings for [`find_roots_with`].
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Tolerance for accepting a candidate root, for treating a
    /// discriminant as zero, and for the final bisection bracket width.
    pub epsilon: T,
    /// Critical points of an even-degree polynomial are solved with
    /// `epsilon / derivative_refinement`.
    pub derivative_refinement: T,
    /// Maximum number of times a bracket is doubled looking for a sign change.
    pub max_expansions: usize,
    /// Maximum number of bisection steps.
    pub max_bisections: usize,
}

impl<T: FloatScalar> RootSettings<T> {
    /// Default limits with the given tolerance.
    pub fn with_epsilon(epsilon: T) -> Self {
        Self {
            epsilon,
            derivative_refinement: cast(10),
            max_expansions: 2048,
            max_bisections: 2048,
        }
    }

    pub(crate) fn refined(&self) -> Self {
        Self {
            epsilon: self.epsilon / self.derivative_refinement,
            ..*self
        }
    }
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self::with_epsilon(1e-5)
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self::with_epsilon(1e-5)
    }
}

pub(crate) fn sort_ascending<T: PartialOrd>(xs: &mut [T]) {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Real roots of the polynomial `coefs`, ascending.
///
/// Shorthand for [`find_roots_with`] using [`RootSettings::with_epsilon`].
///
/// # Panics
///
/// Panics if `coefs` is empty.
pub fn find_roots<T: FloatScalar>(coefs: &[T], epsilon: T) -> Vec<T> {
    find_roots_with(coefs, &RootSettings::with_epsilon(epsilon))
}

/// Real roots of the polynomial `coefs`, ascending, with explicit limits.
///
/// The zero polynomial is reported as having no roots.
///
/// # Panics
///
/// Panics if `coefs` is empty.
pub fn find_roots_with<T: FloatScalar>(coefs: &[T], settings: &RootSettings<T>) -> Vec<T> {
    assert!(!coefs.is_empty(), "find_roots: {}", PolyError::Empty);
    let mut roots = solve(coefs, settings);
    sort_ascending(&mut roots);
    roots
}

/// Divide out `found`, solve what is left, and merge.
fn deflate_and_recurse<T: FloatScalar>(
    mut found: Vec<T>,
    coefs: &[T],
    settings: &RootSettings<T>,
) -> Vec<T> {
    let (rest, _) = poly::divide_out_roots(&found, coefs);
    trace!("deflated {} root(s), remaining degree {}", found.len(), rest.len() - 1);
    found.extend(solve(&rest, settings));
    sort_ascending(&mut found);
    found
}

fn solve<T: FloatScalar>(coefs: &[T], settings: &RootSettings<T>) -> Vec<T> {
    let degree = coefs.len() - 1;
    if degree == 0 {
        return Vec::new();
    }

    let lead = coefs[degree];
    if lead.is_zero() {
        return solve(&coefs[..degree], settings);
    }
    if lead < T::zero() {
        return solve(&poly::scale(-T::one(), coefs), settings);
    }

    if degree == 1 {
        return vec![-coefs[0] / coefs[1]];
    }

    if coefs[0].is_zero() {
        trace!("zero constant term, degree {degree}");
        let mut roots = solve(&coefs[1..], settings);
        roots.push(T::zero());
        sort_ascending(&mut roots);
        return roots;
    }

    let (rational, rest) = rational_roots(coefs, settings.epsilon);
    if !rational.is_empty() {
        trace!("rational roots {rational:?}");
        let mut roots = rational;
        roots.extend(solve(&rest, settings));
        sort_ascending(&mut roots);
        return roots;
    }

    if let Some(roots) = mid_zero_roots(coefs) {
        trace!("two-term polynomial of degree {degree}");
        return roots;
    }

    if degree == 2 {
        return roots_quadratic(coefs, settings.epsilon);
    }

    if degree % 2 == 1 {
        let f = |x: T| poly::evaluate(coefs, x);
        return match search_root(f, -T::one(), T::one(), settings) {
            Some(r) => {
                trace!("odd degree {degree}, bracketed root {r:?}");
                deflate_and_recurse(vec![r], coefs, settings)
            }
            None => {
                debug!("odd degree {degree}: no sign change found, returning no roots");
                Vec::new()
            }
        };
    }

    let found = inflection_roots(coefs, settings);
    if found.is_empty() {
        trace!("even degree {degree}: no sign change between critical points");
        return Vec::new();
    }
    trace!("even degree {degree}, roots between critical points {found:?}");
    deflate_and_recurse(found, coefs, settings)
}
