use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Index {index} out of bounds for {axis} of size {size}")]
    Index {
        index: usize,
        size: usize,
        axis: &'static str,
    },

    #[error("Singular matrix: determinant {0} is too close to zero")]
    SingularMatrix(f64),
}

impl AlgebraError {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        AlgebraError::Shape(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        AlgebraError::Domain(msg.into())
    }

    pub(crate) fn row_index(index: usize, size: usize) -> Self {
        AlgebraError::Index {
            index,
            size,
            axis: "rows",
        }
    }

    pub(crate) fn col_index(index: usize, size: usize) -> Self {
        AlgebraError::Index {
            index,
            size,
            axis: "columns",
        }
    }
}
