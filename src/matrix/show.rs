use itertools::Itertools;
use std::fmt;

use crate::error::Result;
use crate::matrix::matrix::Matrix;

const PREFIX: &str = "Matrix(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowConfig {
    pub precision: usize,
    pub width: usize,
}

impl Default for ShowConfig {
    fn default() -> Self {
        ShowConfig {
            precision: 3,
            width: 8,
        }
    }
}

impl Matrix {
    pub fn render(&self, config: &ShowConfig) -> Result<String> {
        self.shape()?;

        let body = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "[{}]",
                    line.iter()
                        .map(|x| format!(
                            "{:>width$.prec$}",
                            x,
                            width = config.width,
                            prec = config.precision
                        ))
                        .join(", ")
                )
            })
            .join(&format!("\n{}", " ".repeat(PREFIX.len())));

        Ok(format!("{}{})", PREFIX, body))
    }

    pub fn show(&self) {
        match self.render(&ShowConfig::default()) {
            Ok(text) => println!("{}", text),
            Err(error) => {
                log::error!("cannot show matrix: {}", error);
                eprintln!("Error: {}", error);
            }
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(&ShowConfig::default()) {
            Ok(text) => write!(f, "{}", text),
            Err(error) => write!(f, "Error: {}", error),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
