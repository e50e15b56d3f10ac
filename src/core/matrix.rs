//! Matrix value type and the text parser.
//!
//! Input format: one row per line, numeric tokens separated by whitespace.
//! Rows must be rectangular; matrices are immutable once parsed.

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No rows at all (blank or whitespace-only text).
    EmptyInput,
    /// A row has a different number of tokens than the first row.
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token could not be read as a floating-point number.
    NonNumericToken(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => {
                write!(f, "Matrix text is empty; enter at least one row.")
            }
            ParseError::RaggedRows {
                line,
                expected,
                found,
            } => write!(
                f,
                "Invalid format: all rows must have the same number of elements \
                 (row {} has {}, expected {}).",
                line, found, expected
            ),
            ParseError::NonNumericToken(token) => write!(
                f,
                "Invalid matrix format: '{}' is not a number. Enter rows separated \
                 by newlines and numbers separated by spaces.",
                token
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Rectangular row-major matrix of f64, backed by nalgebra.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    pub fn from_inner(data: DMatrix<f64>) -> Self {
        Matrix { data }
    }

    pub fn inner(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    pub fn is_square(&self) -> bool {
        self.data.nrows() == self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    pub fn row_values(&self, row: usize) -> Vec<f64> {
        self.data.row(row).iter().cloned().collect()
    }

    pub fn col_values(&self, col: usize) -> Vec<f64> {
        self.data.column(col).iter().cloned().collect()
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.transpose(),
        }
    }
}

impl FromStr for Matrix {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: f64 = token
                    .parse()
                    .map_err(|_| ParseError::NonNumericToken(token.to_string()))?;
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::RaggedRows {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Matrix {
            data: DMatrix::from_row_slice(rows.len(), cols, &flat),
        })
    }
}
