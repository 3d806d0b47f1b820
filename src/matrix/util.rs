use std::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::{Matrix, SquareMatrix, Vector};

// ── Map / aggregation ───────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use eigenpoly::Matrix;
    /// let m = Matrix::from([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn map<U: Clone>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix::tabulate(self.nrows, self.ncols, |r, c| f(self.rows[r][c].clone()))
    }
}

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.row_iter()
            .flat_map(|r| r.iter())
            .fold(T::zero(), |s, &x| s + x)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One line per row, columns right-aligned:
    ///
    /// ```text
    /// │  1  -2│
    /// │ 10   3│
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = vec![0; self.ncols];
        for row in self.row_iter() {
            for (w, x) in widths.iter_mut().zip(row) {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{x}")));
            }
        }

        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_matrix(), f)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, x) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// A [`fmt::Write`] sink that keeps only the number of characters written.
///
/// `Display` for [`Matrix`] uses it to size each column from the widest
/// formatted entry without allocating a `String` per element. Widths are
/// counted in `char`s, so entries such as `−` or `½` take one column.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
