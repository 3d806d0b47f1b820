use log::trace;

use crate::traits::Scalar;

use super::{chop, PolyError};

/// Polynomial long division: `numerator / denominator`.
///
/// Returns `(quotient, remainder)` with
/// `quotient * denominator + remainder == numerator` and
/// `degree(remainder) < degree(denominator)` (or a zero remainder).
///
/// - A denominator that chops to zero is an error.
/// - A zero numerator yields `([0], [0])`.
/// - A numerator of lower degree than the denominator yields
///   `([0], numerator)`.
///
/// Each step cancels the numerator's leading term against the denominator's
/// leading term, then continues with the reduced numerator.
///
/// ```
/// use eigenpoly::poly;
///
/// // (12x^4 + x^3 + x^2 + x + 1) / (3x^2 + x + 1)
/// let n = [1.0_f64, 1.0, 1.0, 1.0, 12.0];
/// let d = [1.0, 1.0, 3.0];
/// let (q, r) = poly::divide(&n, &d).unwrap();
/// assert_eq!(q[2], 4.0);
/// let back = poly::add(&poly::multiply(&q, &d), &r);
/// for (a, b) in back.iter().zip(n.iter()) {
///     assert!((a - b).abs() < 1e-12);
/// }
/// ```
pub fn divide<T: Scalar>(
    numerator: &[T],
    denominator: &[T],
) -> Result<(Vec<T>, Vec<T>), PolyError> {
    let den = chop(denominator);
    if den.iter().all(|c| c.is_zero()) {
        return Err(PolyError::DivisionByZero);
    }
    let num = chop(numerator);
    if num.iter().all(|c| c.is_zero()) {
        return Ok((vec![T::zero()], vec![T::zero()]));
    }
    if num.len() < den.len() {
        return Ok((vec![T::zero()], num));
    }

    let dd = den.len() - 1;
    let lead = den[dd];
    let mut rem = num;
    let mut quot = vec![T::zero(); rem.len() - dd];

    for k in (0..quot.len()).rev() {
        let s = rem[k + dd] / lead;
        quot[k] = s;
        if s.is_zero() {
            continue;
        }
        for (j, &d) in den.iter().enumerate() {
            rem[k + j] = rem[k + j] - s * d;
        }
        // the leading term cancels exactly by construction
        rem[k + dd] = T::zero();
    }

    rem.truncate(dd.max(1));
    Ok((chop(&quot), chop(&rem)))
}

/// Synthetic division by `(x - r)`.
///
/// Returns `(quotient, remainder)`; the remainder equals the polynomial
/// evaluated at `r`, so it is zero exactly when `r` is a root. Dividing a
/// constant yields the quotient `[0]`.
///
/// ```
/// use eigenpoly::poly;
///
/// // x^2 - 3x + 2 = (x - 1)(x - 2)
/// let (q, rem) = poly::divide_out_root(1.0, &[2.0, -3.0, 1.0]);
/// assert_eq!(q, vec![-2.0, 1.0]);
/// assert_eq!(rem, 0.0);
/// ```
pub fn divide_out_root<T: Scalar>(r: T, coefs: &[T]) -> (Vec<T>, T) {
    let n = coefs.len();
    if n <= 1 {
        return (vec![T::zero()], coefs.first().copied().unwrap_or_else(T::zero));
    }
    let mut quot = vec![T::zero(); n - 1];
    let mut carry = T::zero();
    for k in (1..n).rev() {
        carry = coefs[k] + carry * r;
        quot[k - 1] = carry;
    }
    let rem = coefs[0] + carry * r;
    trace!("deflated root {r:?}, remainder {rem:?}");
    (quot, rem)
}

/// Divide out each of `roots` in turn.
///
/// Returns the final quotient and the remainder of each successive
/// division, in order.
pub fn divide_out_roots<T: Scalar>(roots: &[T], coefs: &[T]) -> (Vec<T>, Vec<T>) {
    let mut quot = coefs.to_vec();
    let mut rems = Vec::with_capacity(roots.len());
    for &r in roots {
        let (q, rem) = divide_out_root(r, &quot);
        quot = q;
        rems.push(rem);
    }
    (quot, rems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::{add, equal, multiply, pad_right};

    fn check_identity(n: &[f64], d: &[f64]) {
        let (q, r) = divide(n, d).unwrap();
        let back = add(&multiply(&q, d), &r);
        assert!(
            back.iter()
                .zip(pad_right(back.len(), n).iter())
                .all(|(a, b)| (a - b).abs() < 1e-9),
            "{q:?} * {d:?} + {r:?} != {n:?}"
        );
    }

    #[test]
    fn divide_textbook_example() {
        let n = [1.0, 1.0, 1.0, 1.0, 12.0];
        let d = [1.0, 1.0, 3.0];
        let (q, r) = divide(&n, &d).unwrap();
        assert_eq!(q.len(), 3);
        assert_eq!(q[2], 4.0);
        assert!(r.len() <= 2);
        check_identity(&n, &d);
    }

    #[test]
    fn divide_exact() {
        // (x^2 - 1) / (x - 1) = x + 1
        let (q, r) = divide(&[-1.0, 0.0, 1.0], &[-1.0, 1.0]).unwrap();
        assert_eq!(q, vec![1.0, 1.0]);
        assert_eq!(r, vec![0.0]);
    }

    #[test]
    fn divide_by_zero_polynomial() {
        assert_eq!(
            divide(&[1.0, 2.0], &[0.0, 0.0]).unwrap_err(),
            PolyError::DivisionByZero
        );
    }

    #[test]
    fn divide_zero_numerator() {
        let (q, r) = divide(&[0.0, 0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(q, vec![0.0]);
        assert_eq!(r, vec![0.0]);
    }

    #[test]
    fn divide_lower_degree_numerator() {
        let (q, r) = divide(&[1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(q, vec![0.0]);
        assert_eq!(r, vec![1.0, 2.0]);
    }

    #[test]
    fn divide_constants() {
        let (q, r) = divide(&[6.0], &[3.0]).unwrap();
        assert_eq!(q, vec![2.0]);
        assert_eq!(r, vec![0.0]);
    }

    #[test]
    fn divide_ignores_trailing_zeros() {
        check_identity(&[1.0, 1.0, -3.0, -3.0, 0.0], &[1.0, 1.0, 3.0, 0.0]);
        check_identity(&[5.0, -4.0, 3.0, 2.0, 1.0, 7.0], &[2.0, 0.5]);
    }

    #[test]
    fn synthetic_division_remainder_is_value() {
        let p = [3.0, -1.0, 0.0, 3.0];
        let (q, rem) = divide_out_root(2.0, &p);
        assert_eq!(rem, crate::poly::evaluate(&p, 2.0));
        let back = add(&multiply(&q, &[-2.0, 1.0]), &[rem]);
        assert!(equal(&back, &p));
    }

    #[test]
    fn synthetic_division_of_constant() {
        assert_eq!(divide_out_root(4.0, &[9.0]), (vec![0.0], 9.0));
    }

    #[test]
    fn divide_out_several_roots() {
        let p = crate::poly::from_roots(&[1.0, 2.0, 3.0]);
        let (q, rems) = divide_out_roots(&[3.0, 1.0], &p);
        assert_eq!(rems, vec![0.0, 0.0]);
        assert_eq!(q, vec![-2.0, 1.0]);
    }
}
