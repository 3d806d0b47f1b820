use log::{debug, trace};

use crate::poly;
use crate::traits::{cast, FloatScalar};

use super::{find_roots_with, sort_ascending, RootSettings};

fn opposite_signs<T: FloatScalar>(a: T, b: T) -> bool {
    (a < T::zero() && b > T::zero()) || (a > T::zero() && b < T::zero())
}

/// Bisection for an x-intercept of `g` within `[left, right]`.
///
/// `g(left)` and `g(right)` must not have the same strict sign; `None` is
/// returned otherwise. The bracket is halved, keeping the half over which
/// `g` changes sign, until it is narrower than `settings.epsilon`; the left
/// end of the final bracket is returned.
///
/// Bisection also stops when the midpoint can no longer be distinguished
/// from an endpoint, or after `settings.max_bisections` halvings.
///
/// ```
/// use eigenpoly::roots::{find_x_intercept, RootSettings};
///
/// let x = find_x_intercept(|x: f64| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
/// assert!((x - 2.0_f64.sqrt()).abs() < 1e-5);
/// ```
pub fn find_x_intercept<T, F>(g: F, left: T, right: T, settings: &RootSettings<T>) -> Option<T>
where
    T: FloatScalar,
    F: Fn(T) -> T,
{
    let (gl, gr) = (g(left), g(right));
    if (gl > T::zero() && gr > T::zero()) || (gl < T::zero() && gr < T::zero()) {
        return None;
    }
    // orient so the function rises from left to right
    let flip = gl > gr;
    let rising = |x: T| if flip { -g(x) } else { g(x) };

    let two: T = cast(2);
    let (mut left, mut right) = (left, right);
    for _ in 0..settings.max_bisections {
        if (right - left).abs() < settings.epsilon {
            return Some(left);
        }
        let mid = (left + right) / two;
        if mid == left || mid == right {
            return Some(left);
        }
        if rising(mid) > T::zero() {
            right = mid;
        } else {
            left = mid;
        }
    }
    debug!("bisection stopped after {} steps at width {:?}", settings.max_bisections, right - left);
    Some(left)
}

/// Find one x-intercept of `g`, widening the bracket until `g` changes sign.
///
/// An endpoint where `g` is exactly zero is returned as is. While `g` has
/// the same sign at both ends, each end moves outward by half the bracket
/// width, doubling it. Once the signs differ the bracket is handed to
/// [`find_x_intercept`].
///
/// Returns `None` if no sign change appears within
/// `settings.max_expansions` widenings (for example when `g` never crosses
/// zero).
pub fn search_root<T, F>(g: F, left: T, right: T, settings: &RootSettings<T>) -> Option<T>
where
    T: FloatScalar,
    F: Fn(T) -> T,
{
    let two: T = cast(2);
    let (mut left, mut right) = (left, right);
    for _ in 0..=settings.max_expansions {
        let gl = g(left);
        if gl.is_zero() {
            return Some(left);
        }
        let gr = g(right);
        if gr.is_zero() {
            return Some(right);
        }
        if opposite_signs(gl, gr) {
            return find_x_intercept(&g, left, right, settings);
        }
        let d = (right - left).abs() / two;
        left = left - d;
        right = right + d;
        if !left.is_finite() || !right.is_finite() {
            break;
        }
    }
    debug!("no sign change found, giving up at [{left:?}, {right:?}]");
    None
}

/// Real roots of `c + b x + a x^2` given as `[c, b, a]`.
///
/// A positive discriminant gives two roots in ascending order; a
/// discriminant within `epsilon` of zero gives the repeated root twice; a
/// negative one gives no real roots.
///
/// ```
/// use eigenpoly::roots::roots_quadratic;
/// assert_eq!(roots_quadratic(&[2.0, -3.0, 1.0], 1e-5), vec![1.0, 2.0]);
/// assert_eq!(roots_quadratic(&[1.0, -2.0, 1.0], 1e-5), vec![1.0, 1.0]);
/// assert!(roots_quadratic(&[1.0, 0.0, 1.0], 1e-5).is_empty());
/// ```
pub fn roots_quadratic<T: FloatScalar>(coefs: &[T], epsilon: T) -> Vec<T> {
    assert_eq!(coefs.len(), 3, "roots_quadratic needs exactly three coefficients");
    let (c, b, a) = (coefs[0], coefs[1], coefs[2]);
    let two: T = cast(2);
    let four: T = cast(4);

    let discr = b * b - four * a * c;
    if discr > T::zero() {
        let s = discr.sqrt();
        let mut roots = vec![(-b + s) / (two * a), (-b - s) / (two * a)];
        sort_ascending(&mut roots);
        roots
    } else if discr.abs() < epsilon {
        let r = -b / (two * a);
        vec![r, r]
    } else {
        Vec::new()
    }
}

/// Closed-form roots of a two-term polynomial `a x^n + b`.
///
/// Applies only when every coefficient strictly between the constant and
/// the leading one is zero. Odd `n` has the single real root
/// `-sign(b) |b/a|^(1/n)`. Even `n` with `a` and `b` of opposite signs has
/// the pair `±|b/a|^(1/n)`. Anything else returns `None`.
///
/// ```
/// use eigenpoly::roots::mid_zero_roots;
/// let cube = mid_zero_roots(&[8.0_f64, 0.0, 0.0, 1.0]).unwrap();
/// assert!(cube.len() == 1 && (cube[0] + 2.0).abs() < 1e-12);
/// assert_eq!(mid_zero_roots(&[-4.0, 0.0, 1.0]), Some(vec![-2.0, 2.0]));
/// assert_eq!(mid_zero_roots(&[4.0, 0.0, 1.0]), None);
/// assert_eq!(mid_zero_roots(&[4.0, 1.0, 1.0]), None);
/// ```
pub fn mid_zero_roots<T: FloatScalar>(coefs: &[T]) -> Option<Vec<T>> {
    let n = coefs.len().checked_sub(1).filter(|&n| n >= 1)?;
    if coefs[1..n].iter().any(|c| !c.is_zero()) {
        return None;
    }
    let (b, a) = (coefs[0], coefs[n]);
    let magnitude = (b / a).abs().powf(T::one() / cast::<T>(n));

    if n % 2 == 1 {
        let root = if b > T::zero() {
            -magnitude
        } else if b < T::zero() {
            magnitude
        } else {
            T::zero()
        };
        return Some(vec![root]);
    }
    if opposite_signs(a, b) {
        return Some(vec![-magnitude, magnitude]);
    }
    None
}

/// Roots located between consecutive critical points.
///
/// The critical points are the real roots of the derivative, solved with
/// the tighter tolerance `epsilon / derivative_refinement`. A critical point
/// where the polynomial is exactly zero is a root. Between each consecutive
/// pair where the polynomial changes sign, a root is bisected out.
///
/// Roots lying outside the outermost critical points, or at points where
/// the polynomial touches zero without crossing, are not found.
pub fn inflection_roots<T: FloatScalar>(coefs: &[T], settings: &RootSettings<T>) -> Vec<T> {
    let f = |x: T| poly::evaluate(coefs, x);
    let critical = find_roots_with(&poly::derivative(coefs), &settings.refined());
    trace!("critical points {critical:?}");

    let mut found: Vec<T> = critical.iter().copied().filter(|&x| f(x).is_zero()).collect();
    for pair in critical.windows(2) {
        let (l, r) = (pair[0], pair[1]);
        if opposite_signs(f(l), f(r)) {
            if let Some(root) = search_root(&f, l, r, settings) {
                found.push(root);
            }
        }
    }
    sort_ascending(&mut found);
    found
}
