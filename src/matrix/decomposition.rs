use itertools::iproduct;
use log::{debug, trace};

use crate::error::{AlgebraError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::shape::is_near_zero;

#[inline(always)]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.
    } else {
        -1.
    }
}

impl Matrix {
    /// Copy of `self` without row `row` and column `col`.
    ///
    /// Removing the only column yields the empty matrix rather than a stack of
    /// zero-length rows.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let shape = self.shape()?;
        if row >= shape.rows {
            return Err(AlgebraError::row_index(row, shape.rows));
        }
        if col >= shape.cols {
            return Err(AlgebraError::col_index(col, shape.cols));
        }
        if shape.cols == 1 {
            return Ok(Matrix::default());
        }

        Ok(Matrix {
            lines: self
                .lines
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != row)
                .map(|(_, line)| {
                    line.iter()
                        .enumerate()
                        .filter(|(j, _)| *j != col)
                        .map(|(_, x)| *x)
                        .collect()
                })
                .collect(),
        })
    }

    pub fn determinant(&self) -> Result<f64> {
        let n = self.square_size("determinant")?;

        match n {
            0 => Ok(1.),
            1 => Ok(self.lines[0][0]),
            _ => (0..n)
                .map(|i| -> Result<f64> {
                    Ok(sign(i) * self.lines[i][0] * self.minor(i, 0)?.determinant()?)
                })
                .sum(),
        }
    }

    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.square_size("inverse")?;

        let det = self.determinant()?;
        if is_near_zero(det) {
            debug!("refusing to invert {}x{} matrix with determinant {}", n, n, det);
            return Err(AlgebraError::SingularMatrix(det));
        }

        match n {
            0 => Ok(Matrix::default()),
            1 => Ok(Matrix {
                lines: vec![vec![1. / det]],
            }),
            _ => {
                let mut inv = Matrix::zeros(n, n);
                for (i, j) in iproduct!(0..n, 0..n) {
                    inv.lines[j][i] = sign(i + j) * self.minor(i, j)?.determinant()? / det;
                }
                Ok(inv)
            }
        }
    }

    /// Row-echelon form by forward elimination, no back-substitution.
    ///
    /// A near-zero pivot is replaced by the first row below it with a usable
    /// entry in that column. When there is none the column is left as is and
    /// elimination moves on, so singular input yields a zero on the diagonal
    /// instead of an error.
    pub fn upper_triangular(&self) -> Result<Matrix> {
        let n = self.square_size("upper_triangular")?;
        if n <= 1 {
            return Ok(self.clone());
        }

        let mut mat = self.clone();
        for j in 0..n - 1 {
            if is_near_zero(mat.lines[j][j]) {
                match (j + 1..n).find(|&i| !is_near_zero(mat.lines[i][j])) {
                    Some(i) => {
                        trace!("pivot column {}: swapping rows {} and {}", j, j, i);
                        mat = mat.swap_rows(i, j)?;
                    }
                    None => {
                        debug!("pivot column {}: no nonzero candidate, keeping zero pivot", j);
                    }
                }
            }

            let pivot = mat.lines[j][j];
            for i in j + 1..n {
                let x = mat.lines[i][j];
                if is_near_zero(x) {
                    continue;
                }
                mat = mat.add_scaled_row(j, -x / pivot, i)?;
            }
        }

        Ok(mat)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, epsilon: f64) {
        assert_eq!(a.get_shape().unwrap(), b.get_shape().unwrap());
        for (x, y) in a.lines.iter().flatten().zip(b.lines.iter().flatten()) {
            assert_abs_diff_eq!(x, y, epsilon = epsilon);
        }
    }

    fn assert_upper(m: &Matrix) {
        let n = m.get_shape().unwrap().0;
        for i in 0..n {
            for j in 0..i {
                assert!(is_near_zero(m.lines[i][j]), "entry ({}, {}) = {}", i, j, m.lines[i][j]);
            }
        }
    }

    #[test]
    fn test_minor() {
        let m = Matrix::from([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        assert_eq!(
            m.minor(1, 1).unwrap().to_list(),
            vec![vec![1., 3.], vec![7., 9.]]
        );
        assert_eq!(
            m.minor(0, 2).unwrap().to_list(),
            vec![vec![4., 5.], vec![7., 8.]]
        );
        assert_eq!(Matrix::from([[5.]]).minor(0, 0).unwrap(), Matrix::default());
        assert_eq!(Matrix::from([[1.], [2.]]).minor(1, 0).unwrap(), Matrix::default());
        assert_eq!(
            Matrix::from([[1., 2.]]).minor(0, 1).unwrap(),
            Matrix::default()
        );

        assert_eq!(
            m.minor(3, 0),
            Err(AlgebraError::Index {
                index: 3,
                size: 3,
                axis: "rows"
            })
        );
        assert_eq!(
            m.minor(0, 3),
            Err(AlgebraError::Index {
                index: 3,
                size: 3,
                axis: "columns"
            })
        );
        assert!(matches!(Matrix::default().minor(0, 0), Err(AlgebraError::Index { .. })));
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix::from([[1., 2.], [3., 4.]]).determinant().unwrap(), -2.);
        assert_eq!(Matrix::from([[7.]]).determinant().unwrap(), 7.);
        assert_eq!(Matrix::default().determinant().unwrap(), 1.);

        for n in 0..6 {
            assert_eq!(Matrix::identity(n).determinant().unwrap(), 1.);
        }
        for n in 1..6 {
            assert_eq!(Matrix::zeros(n, n).determinant().unwrap(), 0.);
        }

        let m = Matrix::from([[2., 1., -1.], [-3., -1., 2.], [-2., 1., 2.]]);
        assert_abs_diff_eq!(m.determinant().unwrap(), -1., epsilon = 1e-12);

        let m = Matrix::from([
            [1., 0., 2., -1.],
            [3., 0., 0., 5.],
            [2., 1., 4., -3.],
            [1., 0., 5., 0.],
        ]);
        assert_abs_diff_eq!(m.determinant().unwrap(), 30., epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_errors() {
        assert!(matches!(
            Matrix::ones(2, 3).determinant(),
            Err(AlgebraError::Domain(_))
        ));
        let jagged = Matrix::from(vec![vec![1., 2.], vec![3.]]);
        assert!(matches!(jagged.determinant(), Err(AlgebraError::Shape(_))));
        assert!(matches!(jagged.inverse(), Err(AlgebraError::Shape(_))));
        assert!(matches!(jagged.upper_triangular(), Err(AlgebraError::Shape(_))));
        assert!(matches!(jagged.minor(0, 0), Err(AlgebraError::Shape(_))));
    }

    #[test]
    fn test_inverse() {
        let m = Matrix::from([[4., 7.], [2., 6.]]);
        let inv = m.inverse().unwrap();
        assert_matrix_eq(&inv, &Matrix::from([[0.6, -0.7], [-0.2, 0.4]]), 1e-12);

        assert_eq!(Matrix::from([[4.]]).inverse().unwrap().to_list(), vec![vec![0.25]]);
        assert_eq!(Matrix::default().inverse().unwrap(), Matrix::default());
        assert_eq!(Matrix::identity(3).inverse().unwrap(), Matrix::identity(3));

        let m = Matrix::from([[2., 1., -1.], [-3., -1., 2.], [-2., 1., 2.]]);
        let product = (&m * &m.inverse().unwrap()).unwrap();
        assert_matrix_eq(&product, &Matrix::identity(3), 1e-9);
    }

    #[test]
    fn test_inverse_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut checked = 0;
        for n in 1..=5 {
            let m = Matrix::random(n, n, -5., 5., &mut rng).unwrap();
            if m.determinant().unwrap().abs() < 0.5 {
                continue;
            }
            let product = (&m * &m.inverse().unwrap()).unwrap();
            assert_matrix_eq(&product, &Matrix::identity(n), 1e-6);
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_inverse_errors() {
        assert!(matches!(
            Matrix::from([[1., 2.], [1., 2.]]).inverse(),
            Err(AlgebraError::SingularMatrix(_))
        ));
        assert!(matches!(
            Matrix::from([[0.0001]]).inverse(),
            Err(AlgebraError::SingularMatrix(_))
        ));
        assert!(matches!(
            Matrix::ones(3, 2).inverse(),
            Err(AlgebraError::Domain(_))
        ));
    }

    #[test]
    fn test_upper_triangular_pivots() {
        let m = Matrix::from([[0., 1.], [1., 0.]]);
        let upper = m.upper_triangular().unwrap();
        assert_eq!(upper.to_list(), vec![vec![1., 0.], vec![0., 1.]]);
        assert_eq!(m.to_list(), vec![vec![0., 1.], vec![1., 0.]]);
    }

    #[test]
    fn test_upper_triangular() {
        let m = Matrix::from([[2., 1., -1.], [-3., -1., 2.], [-2., 1., 2.]]);
        let upper = m.upper_triangular().unwrap();
        assert_upper(&upper);
        assert_matrix_eq(
            &upper,
            &Matrix::from([[2., 1., -1.], [0., 0.5, 0.5], [0., 0., -1.]]),
            1e-12,
        );
        let diagonal: f64 = (0..3).map(|i| upper.lines[i][i]).product();
        assert_abs_diff_eq!(diagonal, m.determinant().unwrap(), epsilon = 1e-12);

        let m = Matrix::from([[1., 2., 3.], [2., 4., 7.], [1., 3., 1.]]);
        let upper = m.upper_triangular().unwrap();
        assert_upper(&upper);
        assert!((0..3).all(|i| !is_near_zero(upper.lines[i][i])));
    }

    #[test]
    fn test_upper_triangular_zero_column() {
        let m = Matrix::from([[0., 1., 2.], [0., 3., 4.], [0., 5., 6.]]);
        let upper = m.upper_triangular().unwrap();
        assert_upper(&upper);
        assert_eq!(upper.lines[0], vec![0., 1., 2.]);
        assert_eq!(upper.lines[1], vec![0., 3., 4.]);
        assert_abs_diff_eq!(upper.lines[2][2], -2. / 3., epsilon = 1e-12);

        let m = Matrix::from([[0., 1.], [0., 2.]]);
        assert_eq!(m.upper_triangular().unwrap(), m);
    }

    #[test]
    fn test_upper_triangular_trivial_and_errors() {
        assert_eq!(Matrix::default().upper_triangular().unwrap(), Matrix::default());
        assert_eq!(
            Matrix::from([[3.]]).upper_triangular().unwrap(),
            Matrix::from([[3.]])
        );
        assert!(matches!(
            Matrix::ones(2, 3).upper_triangular(),
            Err(AlgebraError::Domain(_))
        ));
    }
}
