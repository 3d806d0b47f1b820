use log::trace;
use num_traits::NumCast;

use crate::poly;
use crate::traits::FloatScalar;

/// Coefficients larger than this are not factored.
const MAX_FACTORED: u64 = 1 << 40;

/// Greatest common divisor, always non-negative.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.abs()
}

/// Positive divisors of `|n|` in ascending order. `divisors(0)` is empty.
///
/// ```
/// use eigenpoly::roots::divisors;
/// assert_eq!(divisors(-12), vec![1, 2, 3, 4, 6, 12]);
/// ```
pub fn divisors(n: i64) -> Vec<i64> {
    let n = n.unsigned_abs();
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1u64;
    while d * d <= n {
        if n % d == 0 {
            low.push(d as i64);
            if d * d != n {
                high.push((n / d) as i64);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

fn as_integer<T: FloatScalar>(c: T) -> Option<i64> {
    if !c.is_finite() || !c.fract().is_zero() {
        return None;
    }
    let n = c.to_i64()?;
    (n.unsigned_abs() <= MAX_FACTORED).then_some(n)
}

/// Candidate rational roots `±a/b` of an integer-coefficient polynomial,
/// where `a` divides the constant term and `b` divides the leading one.
///
/// Each ratio appears once (only reduced pairs are kept) and the result is
/// sorted ascending. Empty when some coefficient is not an integer, when
/// either end coefficient is zero, or when a coefficient is too large to
/// factor.
pub fn rational_candidates<T: FloatScalar>(coefs: &[T]) -> Vec<T> {
    let Some(ints) = coefs.iter().map(|&c| as_integer(c)).collect::<Option<Vec<_>>>() else {
        return Vec::new();
    };
    let (c0, cn) = match (ints.first(), ints.last()) {
        (Some(&c0), Some(&cn)) if c0 != 0 && cn != 0 => (c0, cn),
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    for b in divisors(cn) {
        for a in divisors(c0) {
            if gcd(a, b) != 1 {
                continue;
            }
            let (Some(a), Some(b)) = (<T as NumCast>::from(a), <T as NumCast>::from(b)) else {
                continue;
            };
            let r = a / b;
            out.push(-r);
            out.push(r);
        }
    }
    super::sort_ascending(&mut out);
    out
}

/// Rational-root test.
///
/// Tries every candidate from [`rational_candidates`]; a candidate whose
/// value is within `epsilon` of zero is a root, is divided out, and is tried
/// again before moving on, so repeated roots are found with their
/// multiplicity. Stops once degree-many roots are found.
///
/// Returns the roots found (ascending) and the deflated coefficients. With
/// no roots found the coefficients come back unchanged.
///
/// ```
/// use eigenpoly::roots::rational_roots;
///
/// // 2x^3 - 3x^2 + 1 = (x - 1)^2 (2x + 1)
/// let (roots, rest) = rational_roots(&[1.0, 0.0, -3.0, 2.0], 1e-9);
/// assert_eq!(roots, vec![-0.5, 1.0, 1.0]);
/// assert_eq!(rest.len(), 1);
/// ```
pub fn rational_roots<T: FloatScalar>(coefs: &[T], epsilon: T) -> (Vec<T>, Vec<T>) {
    let degree = coefs.len().saturating_sub(1);
    let mut found = Vec::new();
    let mut rest = coefs.to_vec();

    'candidates: for r in rational_candidates(coefs) {
        while found.len() < degree {
            if poly::evaluate(&rest, r).abs() >= epsilon {
                continue 'candidates;
            }
            trace!("rational root {r:?}");
            rest = poly::divide_out_root(r, &rest).0;
            found.push(r);
        }
        break;
    }

    super::sort_ascending(&mut found);
    (found, rest)
}
