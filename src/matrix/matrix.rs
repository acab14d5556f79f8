#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    pub lines: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn from_list(lines: Vec<Vec<f64>>) -> Self {
        Matrix { lines }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.lines.clone()
    }

    pub fn into_list(self) -> Vec<Vec<f64>> {
        self.lines
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        self.lines.get(row)?.get(col).copied()
    }

    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            lines: self
                .lines
                .iter()
                .map(|line| line.iter().map(|x| f(*x)).collect())
                .collect(),
        }
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_list(lines)
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(lines: [[f64; C]; R]) -> Self {
        Matrix::from_list(lines.iter().map(|l| l.to_vec()).collect())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
