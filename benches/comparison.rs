use criterion::{criterion_group, criterion_main, Criterion};
use eigenpoly::{Matrix, SquareMatrix, Vector};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned test matrices
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize) -> f64 {
    ((i + 1) * (j + 2) % 7) as f64 + if i == j { 10.0 } else { 0.0 }
}

fn eigenpoly_square(n: usize) -> SquareMatrix<f64> {
    SquareMatrix::tabulate(n, entry)
}

/// Symmetric tridiagonal with integer characteristic polynomial and
/// distinct eigenvalues.
fn eigenpoly_tridiagonal(n: usize) -> SquareMatrix<f64> {
    SquareMatrix::tabulate(n, |i, j| match i.abs_diff(j) {
        0 => 2.0,
        1 => 1.0,
        _ => 0.0,
    })
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_4x4");

    g.bench_function("eigenpoly", |b| {
        let a = Matrix::tabulate(4, 4, |i, j| (i * 4 + j + 1) as f64);
        let m = Matrix::tabulate(4, 4, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(|i, j| (i * 4 + j + 1) as f64);
        let m = nalgebra::Matrix4::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn dot_100(c: &mut Criterion) {
    let mut g = c.benchmark_group("dot_100");

    g.bench_function("eigenpoly", |b| {
        let u = Vector::tabulate(100, |k| k as f64);
        let v = Vector::tabulate(100, |k| (100 - k) as f64);
        b.iter(|| std::hint::black_box(&u).inner_product(std::hint::black_box(&v)))
    });

    g.bench_function("nalgebra", |b| {
        let u = nalgebra::DVector::from_fn(100, |k, _| k as f64);
        let v = nalgebra::DVector::from_fn(100, |k, _| (100 - k) as f64);
        b.iter(|| std::hint::black_box(&u).dot(std::hint::black_box(&v)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Determinant: Laplace expansion vs Gauss-Jordan
// ---------------------------------------------------------------------------

fn det_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_6x6");

    g.bench_function("eigenpoly_laplace", |b| {
        let a = eigenpoly_square(6);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("eigenpoly_gauss_jordan", |b| {
        let a = eigenpoly_square(6);
        b.iter(|| std::hint::black_box(&a).make_unit_diagonal().1)
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix6::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Linear solve and inverse
// ---------------------------------------------------------------------------

fn solve_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve_6x6");
    let rhs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    g.bench_function("eigenpoly_gaussian", |b| {
        let a = eigenpoly_square(6);
        let v = Vector::from(rhs);
        b.iter(|| {
            std::hint::black_box(&a).gaussian_elimination_back_substitution(std::hint::black_box(&v))
        })
    });

    g.bench_function("eigenpoly_cramer", |b| {
        let a = eigenpoly_square(6);
        let v = Vector::from(rhs);
        b.iter(|| std::hint::black_box(&a).cramers_rule(std::hint::black_box(&v)))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix6::from_fn(entry);
        let v = nalgebra::Vector6::from_column_slice(&rhs);
        b.iter(|| std::hint::black_box(&a).lu().solve(std::hint::black_box(&v)))
    });

    g.finish();
}

fn inverse_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_6x6");

    g.bench_function("eigenpoly", |b| {
        let a = eigenpoly_square(6);
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix6::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).try_inverse())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Power and eigen-decomposition
// ---------------------------------------------------------------------------

fn power_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("power_4x4");

    g.bench_function("eigenpoly_p1000", |b| {
        let a = eigenpoly_square(4).scale(0.05);
        b.iter(|| std::hint::black_box(&a).power(std::hint::black_box(1000)))
    });

    g.finish();
}

fn eigen_5x5(c: &mut Criterion) {
    let mut g = c.benchmark_group("eigen_5x5");

    g.bench_function("eigenpoly_eigenvalues", |b| {
        let a = eigenpoly_tridiagonal(5);
        b.iter(|| std::hint::black_box(&a).eigenvalues(1e-9))
    });

    g.bench_function("eigenpoly_eigen", |b| {
        let a = eigenpoly_tridiagonal(5);
        b.iter(|| std::hint::black_box(&a).eigen(1e-9))
    });

    g.bench_function("nalgebra_symmetric", |b| {
        let a = nalgebra::Matrix5::from_fn(|i, j| match i.abs_diff(j) {
            0 => 2.0,
            1 => 1.0,
            _ => 0.0,
        });
        b.iter(|| std::hint::black_box(a).symmetric_eigen())
    });

    g.finish();
}

criterion_group!(
    benches,
    matmul_4x4,
    dot_100,
    det_6x6,
    solve_6x6,
    inverse_6x6,
    power_4x4,
    eigen_5x5,
);
criterion_main!(benches);
