use crate::error::{AlgebraError, Result};
use crate::matrix::matrix::Matrix;

impl Matrix {
    fn check_row(&self, row: usize) -> Result<()> {
        let rows = self.shape()?.rows;
        if row >= rows {
            return Err(AlgebraError::row_index(row, rows));
        }
        Ok(())
    }

    pub fn swap_rows(&self, r1: usize, r2: usize) -> Result<Matrix> {
        self.check_row(r1)?;
        self.check_row(r2)?;

        let mut mat = self.clone();
        mat.lines.swap(r1, r2);
        Ok(mat)
    }

    pub fn scale_row(&self, r: usize, c: f64) -> Result<Matrix> {
        self.check_row(r)?;

        let mut mat = self.clone();
        mat.lines[r].iter_mut().for_each(|x| *x *= c);
        Ok(mat)
    }

    pub fn add_scaled_row(&self, r1: usize, c: f64, r2: usize) -> Result<Matrix> {
        self.check_row(r1)?;
        self.check_row(r2)?;

        let mut mat = self.clone();
        let source = self.lines[r1].iter();
        mat.lines[r2]
            .iter_mut()
            .zip(source)
            .for_each(|(dst, src)| *dst += c * src);
        Ok(mat)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
