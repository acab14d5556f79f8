#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod arithmetic;
    pub mod builders;
    pub mod decomposition;
    pub mod ero;
    pub mod matrix;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod shape;
    pub mod show;
}

pub use error::{AlgebraError, Result};
pub use matrix::matrix::Matrix;
pub use matrix::shape::{is_near_zero, Shape, ZERO_TOLERANCE};
pub use matrix::show::ShowConfig;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_algebra(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::zeros, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::ones, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::identity, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::random, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::is_near_zero, m)?)?;
    Ok(())
}
