//! Bases and coordinates.

use log::debug;

use crate::traits::FloatScalar;

use super::{Matrix, SquareMatrix, Vector};

/// `true` when every pair of `vectors` has `|<u, v>| < epsilon`.
///
/// Fewer than two vectors are trivially orthogonal. Vectors whose
/// dimensions differ are not.
///
/// ```
/// use eigenpoly::{is_orthogonal, Vector};
///
/// let e = [Vector::from([1.0, 0.0]), Vector::from([0.0, 2.0])];
/// assert!(is_orthogonal(&e, 1e-9));
/// assert!(!is_orthogonal(&[Vector::from([1.0, 1.0]), Vector::from([1.0, 0.0])], 1e-9));
/// ```
pub fn is_orthogonal<T: FloatScalar>(vectors: &[Vector<T>], epsilon: T) -> bool {
    if vectors.len() < 2 {
        return true;
    }
    if vectors.iter().any(|v| v.dim() != vectors[0].dim()) {
        return false;
    }
    vectors.iter().enumerate().all(|(i, u)| {
        vectors[i + 1..]
            .iter()
            .all(|v| u.inner_product(v).abs() < epsilon)
    })
}

/// Orthonormalize `n` vectors of dimension `n` by Gram-Schmidt.
///
/// The first output is parallel to `vectors[0]`, and each output `k` lies
/// in the span of the first `k + 1` inputs. `None` if the inputs are
/// linearly dependent, up to round-off: an input whose remainder after
/// projection is below `sqrt(machine epsilon)` times its own norm counts as
/// dependent.
///
/// Panics if the count differs from the dimension.
///
/// ```
/// use eigenpoly::{gram_schmidt, is_orthogonal, Vector};
///
/// let basis = gram_schmidt(&[Vector::from([3.0, 4.0]), Vector::from([1.0, 0.0])]).unwrap();
/// assert!(basis[0].distance(&Vector::from([0.6, 0.8])) < 1e-12);
/// assert!(is_orthogonal(&basis, 1e-12));
/// ```
pub fn gram_schmidt<T: FloatScalar>(vectors: &[Vector<T>]) -> Option<Vec<Vector<T>>> {
    let n = vectors.len();
    assert!(
        vectors.iter().all(|v| v.dim() == n),
        "gram_schmidt needs {n} vectors of dimension {n}"
    );
    let mut basis: Vec<Vector<T>> = Vec::with_capacity(n);
    for v in vectors {
        let u = basis.iter().fold(v.clone(), |acc, e| &acc - &e.scale(e.inner_product(v)));
        if u.norm() <= T::epsilon().sqrt() * v.norm() {
            debug!("gram_schmidt: input {} is dependent on the previous ones", basis.len());
            return None;
        }
        basis.push(u.normalize()?);
    }
    Some(basis)
}

/// Coordinates of `v` in `basis`: the `c` with `Σ c_k basis[k] = v`.
///
/// `None` if the basis vectors are linearly dependent.
///
/// ```
/// use eigenpoly::{find_coordinates, Vector};
///
/// let basis = [Vector::from([1.0, 1.0]), Vector::from([1.0, -1.0])];
/// let c = find_coordinates(&Vector::from([3.0, 1.0]), &basis).unwrap();
/// assert_eq!(c, Vector::from([2.0, 1.0]));
/// ```
pub fn find_coordinates<T: FloatScalar>(v: &Vector<T>, basis: &[Vector<T>]) -> Option<Vector<T>> {
    let inv = basis_matrix(basis).inverse()?;
    Some(&inv * v)
}

/// Re-express coordinates `c` from `from` in the basis `to`.
///
/// `None` if `to` is linearly dependent.
pub fn change_coordinates<T: FloatScalar>(
    c: &Vector<T>,
    from: &[Vector<T>],
    to: &[Vector<T>],
) -> Option<Vector<T>> {
    let v = &basis_matrix(from) * c;
    find_coordinates(&v, to)
}

/// Basis vectors as the columns of a square matrix.
fn basis_matrix<T: FloatScalar>(basis: &[Vector<T>]) -> SquareMatrix<T> {
    let m = Matrix::cols_to_matrix(basis);
    assert!(
        m.is_square(),
        "a basis of dimension {} needs {} vectors, got {}",
        m.nrows(),
        m.nrows(),
        m.ncols()
    );
    SquareMatrix::from_square(m)
}
