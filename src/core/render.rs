//! Output shaping: matrices, scalars, eigen pairs and step traces as text.
//! Determinants are shown to 2 decimal places; everything else at full
//! precision.

use nalgebra::DVector;
use num_complex::Complex;

use super::dispatch::Value;
use super::linalg::EigenPairs;
use super::matrix::Matrix;
use super::ops::Operation;

/// Full precision, but integral values drop the trailing ".0".
pub fn scalar_text(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

/// Determinant display convention: two decimal places, no negative zero.
pub fn det_text(x: f64) -> String {
    let text = format!("{:.2}", x);
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

pub fn complex_text(c: Complex<f64>) -> String {
    if c.im.abs() < 1e-12 {
        scalar_text(c.re)
    } else if c.im >= 0.0 {
        format!("{}+{}i", scalar_text(c.re), scalar_text(c.im))
    } else {
        format!("{}-{}i", scalar_text(c.re), scalar_text(-c.im))
    }
}

pub fn row_text(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|&v| scalar_text(v)).collect();
    format!("[{}]", cells.join(" "))
}

/// Rows as bracketed lines with right-aligned columns.
pub fn matrix_text(m: &Matrix) -> String {
    let cells: Vec<Vec<String>> = (0..m.rows())
        .map(|i| (0..m.cols()).map(|j| scalar_text(m.get(i, j))).collect())
        .collect();
    aligned_rows(&cells)
}

/// Eigenvectors laid out as the columns of one matrix.
pub fn eigen_vectors_text(vectors: &[DVector<Complex<f64>>]) -> String {
    let nrows = vectors.first().map(|v| v.len()).unwrap_or(0);
    let cells: Vec<Vec<String>> = (0..nrows)
        .map(|i| vectors.iter().map(|v| complex_text(v[i])).collect())
        .collect();
    aligned_rows(&cells)
}

pub fn eigen_values_text(pairs: &EigenPairs) -> String {
    let cells: Vec<String> = pairs.values.iter().map(|&c| complex_text(c)).collect();
    format!("[{}]", cells.join(" "))
}

fn aligned_rows(cells: &[Vec<String>]) -> String {
    let ncols = cells.first().map(|r| r.len()).unwrap_or(0);
    let widths: Vec<usize> = (0..ncols)
        .map(|j| cells.iter().map(|row| row[j].len()).max().unwrap_or(0))
        .collect();
    cells
        .iter()
        .map(|row| {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:>width$}", cell, width = w))
                .collect();
            format!("[{}]", padded.join(" "))
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// One successful outcome as display text, headed by its subject.
pub fn value_text(op: Operation, subject: &str, value: &Value) -> String {
    match value {
        Value::Scalar(x) => format!("det({}) = {}", subject, det_text(*x)),
        Value::Rank(r) => format!("rank({}) = {}", subject, r),
        Value::Matrix(m) => match op {
            Operation::Transpose => format!("{}ᵀ:\n{}", subject, matrix_text(m)),
            Operation::Inverse => format!("{}⁻¹:\n{}", subject, matrix_text(m)),
            _ => format!("Result:\n{}", matrix_text(m)),
        },
        Value::Eigen(pairs) => format!(
            "Eigenvalues of {}:\n{}\nEigenvectors of {}:\n{}",
            subject,
            eigen_values_text(pairs),
            subject,
            eigen_vectors_text(&pairs.vectors)
        ),
    }
}
