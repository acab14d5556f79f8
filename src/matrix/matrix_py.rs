use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::AlgebraError;
use crate::matrix::matrix::Matrix;
use crate::matrix::shape;

impl From<AlgebraError> for PyErr {
    fn from(error: AlgebraError) -> PyErr {
        match error {
            AlgebraError::Index { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix,
}

impl From<Matrix> for PyMatrix {
    fn from(inner: Matrix) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_list(lines).into()
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn shape(&self) -> PyResult<(usize, usize)> {
        Ok(self.inner.get_shape()?)
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.transpose()?.into())
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __eq__(&self, rhs: &PyMatrix) -> bool {
        self.inner == rhs.inner
    }

    pub fn scalar_multiply(&self, c: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.scalar_multiply(c)?.into())
    }

    pub fn scalar_add(&self, c: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.scalar_add(c)?.into())
    }

    pub fn concatenate(&self, rhs: &PyMatrix, axis: i32) -> PyResult<PyMatrix> {
        Ok(self.inner.concatenate(&rhs.inner, axis)?.into())
    }

    pub fn swap_rows(&self, r1: usize, r2: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.swap_rows(r1, r2)?.into())
    }

    pub fn scale_row(&self, r: usize, c: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.scale_row(r, c)?.into())
    }

    pub fn add_scaled_row(&self, r1: usize, c: f64, r2: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.add_scaled_row(r1, c, r2)?.into())
    }

    pub fn minor(&self, row: usize, col: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.minor(row, col)?.into())
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn upper_triangular(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.upper_triangular()?.into())
    }

    pub fn show(&self) {
        self.inner.show()
    }
}

#[pyfunction]
pub fn zeros(rows: usize, cols: usize) -> PyMatrix {
    Matrix::zeros(rows, cols).into()
}

#[pyfunction]
pub fn ones(rows: usize, cols: usize) -> PyMatrix {
    Matrix::ones(rows, cols).into()
}

#[pyfunction]
pub fn identity(n: usize) -> PyMatrix {
    Matrix::identity(n).into()
}

#[pyfunction]
#[pyo3(signature = (rows, cols, min, max, seed=None))]
pub fn random(rows: usize, cols: usize, min: f64, max: f64, seed: Option<u64>) -> PyResult<PyMatrix> {
    let matrix = match seed {
        Some(seed) => Matrix::random(rows, cols, min, max, &mut StdRng::seed_from_u64(seed))?,
        None => Matrix::random(rows, cols, min, max, &mut rand::thread_rng())?,
    };
    Ok(matrix.into())
}

#[pyfunction]
pub fn is_near_zero(x: f64) -> bool {
    shape::is_near_zero(x)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
