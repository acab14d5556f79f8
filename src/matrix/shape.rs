use crate::error::{AlgebraError, Result};
use crate::matrix::matrix::Matrix;

pub const ZERO_TOLERANCE: f64 = 1e-3;

pub fn is_near_zero(x: f64) -> bool {
    x.abs() < ZERO_TOLERANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}

impl Matrix {
    pub fn shape(&self) -> Result<Shape> {
        let rows = self.lines.len();
        if rows == 0 {
            return Ok(Shape { rows: 0, cols: 0 });
        }

        let cols = self.lines[0].len();
        if cols == 0 {
            return Err(AlgebraError::shape(
                "row number is nonzero while column number is zero",
            ));
        }

        if let Some((i, line)) = self
            .lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != cols)
        {
            return Err(AlgebraError::shape(format!(
                "jagged matrix: row {} has {} columns, expected {}",
                i,
                line.len(),
                cols
            )));
        }

        Ok(Shape { rows, cols })
    }

    pub fn get_shape(&self) -> Result<(usize, usize)> {
        self.shape().map(Into::into)
    }

    pub(crate) fn square_size(&self, op: &str) -> Result<usize> {
        let shape = self.shape()?;
        if !shape.is_square() {
            return Err(AlgebraError::domain(format!(
                "{} requires a square matrix, got {}x{}",
                op, shape.rows, shape.cols
            )));
        }
        Ok(shape.rows)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let m = Matrix::from([[1., 2., 3.], [4., 5., 6.]]);
        assert_eq!(m.get_shape().unwrap(), (2, 3));
        assert!(!m.shape().unwrap().is_square());

        assert_eq!(Matrix::default().get_shape().unwrap(), (0, 0));
        assert!(Matrix::default().shape().unwrap().is_square());
    }

    #[test]
    fn test_shape_rejects_invalid() {
        let jagged = Matrix::from(vec![vec![1., 2.], vec![3., 4., 5.]]);
        assert!(matches!(jagged.shape(), Err(AlgebraError::Shape(_))));

        let empty_rows = Matrix::from(vec![vec![], vec![]]);
        assert!(matches!(empty_rows.shape(), Err(AlgebraError::Shape(_))));

        // only the first row decides the column count
        let late_empty = Matrix::from(vec![vec![1.], vec![]]);
        assert!(matches!(late_empty.shape(), Err(AlgebraError::Shape(_))));
    }

    #[test]
    fn test_square_size() {
        let m = Matrix::from([[1., 2.], [3., 4.]]);
        assert_eq!(m.square_size("test").unwrap(), 2);

        let m = Matrix::from([[1., 2.]]);
        assert!(matches!(m.square_size("test"), Err(AlgebraError::Domain(_))));
    }

    #[test]
    fn test_is_near_zero() {
        assert!(is_near_zero(0.));
        assert!(is_near_zero(-0.0009));
        assert!(is_near_zero(0.0009));
        assert!(!is_near_zero(0.001));
        assert!(!is_near_zero(-0.5));
        assert!(!is_near_zero(f64::NAN));
    }
}
