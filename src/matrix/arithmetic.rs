use std::ops;

use crate::error::{AlgebraError, Result};
use crate::matrix::matrix::Matrix;

impl Matrix {
    pub fn scalar_multiply(&self, c: f64) -> Result<Matrix> {
        self.shape()?;
        Ok(self.map(|x| x * c))
    }

    pub fn scalar_add(&self, c: f64) -> Result<Matrix> {
        self.shape()?;
        Ok(self.map(|x| x + c))
    }

    pub fn matrix_add(&self, rhs: &Matrix) -> Result<Matrix> {
        let (lhs_shape, rhs_shape) = (self.shape()?, rhs.shape()?);
        if lhs_shape != rhs_shape {
            return Err(AlgebraError::shape(format!(
                "cannot add a {}x{} matrix to a {}x{} matrix",
                rhs_shape.rows, rhs_shape.cols, lhs_shape.rows, lhs_shape.cols
            )));
        }

        Ok(Matrix {
            lines: self
                .lines
                .iter()
                .zip(rhs.lines.iter())
                .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
                .collect(),
        })
    }

    pub fn matrix_multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        let (lhs_shape, rhs_shape) = (self.shape()?, rhs.shape()?);
        if lhs_shape.cols != rhs_shape.rows {
            return Err(AlgebraError::shape(format!(
                "column number of the left matrix ({}) must be equal to row number of the right matrix ({})",
                lhs_shape.cols, rhs_shape.rows
            )));
        }

        let rhs_cols = rhs.transpose()?;
        Ok(Matrix {
            lines: self
                .lines
                .iter()
                .map(|row| {
                    rhs_cols
                        .lines
                        .iter()
                        .map(|col| row.iter().zip(col.iter()).map(|(a, b)| a * b).sum())
                        .collect()
                })
                .collect(),
        })
    }

    pub fn transpose(&self) -> Result<Matrix> {
        let shape = self.shape()?;
        Ok(Matrix {
            lines: (0..shape.cols)
                .map(|c| self.lines.iter().map(|line| line[c]).collect())
                .collect(),
        })
    }

    pub fn concatenate(&self, rhs: &Matrix, axis: i32) -> Result<Matrix> {
        let (lhs_shape, rhs_shape) = (self.shape()?, rhs.shape()?);

        match axis {
            0 => {
                if lhs_shape.cols != rhs_shape.cols {
                    return Err(AlgebraError::shape(format!(
                        "row-wise concatenation needs equal column counts, got {} and {}",
                        lhs_shape.cols, rhs_shape.cols
                    )));
                }
                Ok(Matrix {
                    lines: self.lines.iter().chain(rhs.lines.iter()).cloned().collect(),
                })
            }
            1 => {
                if lhs_shape.rows != rhs_shape.rows {
                    return Err(AlgebraError::shape(format!(
                        "column-wise concatenation needs equal row counts, got {} and {}",
                        lhs_shape.rows, rhs_shape.rows
                    )));
                }
                Ok(Matrix {
                    lines: self
                        .lines
                        .iter()
                        .zip(rhs.lines.iter())
                        .map(|(a, b)| a.iter().chain(b.iter()).copied().collect())
                        .collect(),
                })
            }
            _ => Err(AlgebraError::domain(format!(
                "axis must be 0 or 1, got {}",
                axis
            ))),
        }
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        self.matrix_add(rhs)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.matrix_multiply(rhs)
    }
}

impl ops::Add<f64> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: f64) -> Result<Matrix> {
        self.scalar_add(rhs)
    }
}

impl ops::Mul<f64> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: f64) -> Result<Matrix> {
        self.scalar_multiply(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
