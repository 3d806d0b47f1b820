use super::*;

const EPS: f64 = 1e-5;

fn assert_roots_near(got: &[f64], want: &[f64], tol: f64, msg: &str) {
    assert_eq!(got.len(), want.len(), "{}: got {:?}, want {:?}", msg, got, want);
    for (g, w) in got.iter().zip(want) {
        assert!(
            (g - w).abs() < tol,
            "{}: got {:?}, want {:?} (diff {})",
            msg,
            got,
            want,
            (g - w).abs()
        );
    }
}

// ── Strategy chain ──────────────────────────────────────────────────

#[test]
fn constants_have_no_roots() {
    assert!(find_roots(&[5.0], EPS).is_empty());
    assert!(find_roots(&[0.0], EPS).is_empty());
    assert!(find_roots(&[0.0, 0.0, 0.0], EPS).is_empty());
}

#[test]
#[should_panic(expected = "not a polynomial")]
fn empty_coefficients_panic() {
    let empty: [f64; 0] = [];
    let _ = find_roots(&empty, EPS);
}

#[test]
fn trailing_zeros_are_dropped() {
    assert_eq!(find_roots(&[2.0, -3.0, 1.0, 0.0, 0.0], EPS), vec![1.0, 2.0]);
}

#[test]
fn negative_leading_coefficient() {
    // -(x - 1)(x - 2)
    assert_eq!(find_roots(&[-2.0, 3.0, -1.0], EPS), vec![1.0, 2.0]);
}

#[test]
fn linear() {
    assert_eq!(find_roots(&[3.0, 2.0], EPS), vec![-1.5]);
    assert_eq!(find_roots(&[-3.0, -2.0], EPS), vec![-1.5]);
}

#[test]
fn zero_constant_term_contributes_zero() {
    // x^3 - x = x (x - 1)(x + 1)
    assert_eq!(find_roots(&[0.0, -1.0, 0.0, 1.0], EPS), vec![-1.0, 0.0, 1.0]);
    // x^2 has a double root at zero
    assert_eq!(find_roots(&[0.0, 0.0, 1.0], EPS), vec![0.0, 0.0]);
}

#[test]
fn quadratic_example() {
    assert_eq!(find_roots(&[2.0, -3.0, 1.0], EPS), vec![1.0, 2.0]);
}

#[test]
fn rational_roots_with_multiplicity() {
    // (x + 1)^2 (2x + 1)(x - 2)
    let p = poly::multiply(
        &poly::from_roots(&[-1.0, -1.0, 2.0]),
        &[1.0, 2.0],
    );
    assert_eq!(find_roots(&p, EPS), vec![-1.0, -1.0, -0.5, 2.0]);
}

#[test]
fn rational_and_irrational_together() {
    // (x - 3)(x^2 - 2)
    let p = poly::multiply(&[-3.0, 1.0], &[-2.0, 0.0, 1.0]);
    let s = 2.0_f64.sqrt();
    assert_roots_near(&find_roots(&p, EPS), &[-s, s, 3.0], 1e-9, "rational + mid-zero");
}

#[test]
fn two_term_polynomials() {
    assert_roots_near(&find_roots(&[-5.0, 0.0, 1.0], EPS), &[-5.0_f64.sqrt(), 5.0_f64.sqrt()], 1e-12, "x^2 - 5");
    assert_roots_near(&find_roots(&[3.0, 0.0, 0.0, 1.0], EPS), &[-3.0_f64.cbrt()], 1e-12, "x^3 + 3");
    assert!(find_roots(&[3.0, 0.0, 0.0, 0.0, 1.0], EPS).is_empty());
}

#[test]
fn quadratic_without_real_roots() {
    assert!(find_roots(&[1.0, 1.0, 1.0], EPS).is_empty());
}

#[test]
fn odd_degree_bracketing() {
    // x^3 - 2x - 5, one real root near 2.0946
    let r = find_roots(&[-5.0, -2.0, 0.0, 1.0], EPS);
    assert_eq!(r.len(), 1);
    assert!(poly::evaluate(&[-5.0, -2.0, 0.0, 1.0], r[0]).abs() < 1e-3);
    assert!((r[0] - 2.094_551_481_5).abs() < EPS);
}

#[test]
fn odd_degree_far_root() {
    // (x - 100.5)(x^2 + 1)
    let p = poly::multiply(&[-100.5, 1.0], &[1.0, 0.0, 1.0]);
    assert_roots_near(&find_roots(&p, EPS), &[100.5], 1e-4, "far root");
}

#[test]
fn even_degree_between_critical_points() {
    // (x^2 - 2)(x^2 - 3)
    let r = find_roots(&[6.0, 0.0, -5.0, 0.0, 1.0], EPS);
    let (s2, s3) = (2.0_f64.sqrt(), 3.0_f64.sqrt());
    assert_roots_near(&r, &[-s3, -s2, s2, s3], 1e-3, "biquadratic");
}

#[test]
fn even_degree_heuristic_needs_two_critical_points() {
    // x^4 + x - 3 has two real roots, but a single critical point
    assert!(find_roots(&[-3.0, 1.0, 0.0, 0.0, 1.0], EPS).is_empty());
}

#[test]
fn even_degree_without_real_roots() {
    // (x^2 + 1)(x^2 + 2x + 3)
    let p = poly::multiply(&[1.0, 0.0, 1.0], &[3.0, 2.0, 1.0]);
    assert!(find_roots(&p, EPS).is_empty());
}

// ── Round trips ─────────────────────────────────────────────────────

#[test]
fn recovers_integer_roots() {
    let roots = [-4.0, -1.0, 0.0, 2.0, 2.0, 7.0];
    assert_eq!(find_roots(&poly::from_roots(&roots), EPS), roots.to_vec());
}

#[test]
fn recovers_irrational_odd_degree_roots() {
    // cubic with three irrational roots
    let roots = [-1.3, 0.45, 2.7];
    let p = poly::from_roots(&roots);
    assert_roots_near(&find_roots(&p, 1e-8), &roots, 1e-5, "cubic round trip");
}

#[test]
fn finer_epsilon_is_more_precise() {
    let p = [-5.0_f64, -2.0, 0.0, 1.0];
    let coarse = find_roots(&p, 1e-3)[0];
    let fine = find_roots(&p, 1e-10)[0];
    assert!(poly::evaluate(&p, fine).abs() < poly::evaluate(&p, coarse).abs() + 1e-12);
    assert!(poly::evaluate(&p, fine).abs() < 1e-8);
}

#[test]
fn single_precision() {
    let r = find_roots(&[2.0_f32, -3.0, 1.0], 1e-4);
    assert_eq!(r, vec![1.0_f32, 2.0]);
}

// ── Settings ────────────────────────────────────────────────────────

#[test]
fn default_settings() {
    let s = RootSettings::<f64>::default();
    assert_eq!(s.epsilon, 1e-5);
    assert_eq!(s.derivative_refinement, 10.0);
    assert!((s.refined().epsilon - 1e-6).abs() < 1e-20);
}

#[test]
fn expansion_limit_gives_up() {
    // root at 1000 is not reached in three doublings of [-1, 1]
    let s = RootSettings {
        max_expansions: 3,
        ..RootSettings::with_epsilon(EPS)
    };
    let p = poly::multiply(&[-1000.5, 1.0], &[1.0, 0.0, 1.0]);
    assert!(find_roots_with(&p, &s).is_empty());
    assert_eq!(find_roots_with(&p, &RootSettings::default()).len(), 1);
}
