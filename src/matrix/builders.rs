use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{AlgebraError, Result};
use crate::matrix::matrix::Matrix;

impl Matrix {
    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            lines: vec![vec![value; cols]; rows],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.)
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 1.)
    }

    pub fn identity(n: usize) -> Matrix {
        Matrix {
            lines: (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| if i == j { 1. } else { 0. })
                        .collect()
                })
                .collect(),
        }
    }

    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Matrix> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(AlgebraError::Range(format!(
                "bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min > max {
            return Err(AlgebraError::Range(format!(
                "min ({}) should be not bigger than max ({})",
                min, max
            )));
        }

        let dist = Uniform::new_inclusive(min, max);
        Ok(Matrix {
            lines: (0..rows)
                .map(|_| (0..cols).map(|_| dist.sample(&mut *rng)).collect())
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
