//! Thin wrappers over the nalgebra primitives the dispatcher consumes.
//!
//! This is the entire library surface used: determinant, inverse with
//! singular detection, SVD-tolerance rank, and eigen-decomposition.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex;

/// Caller guarantees the matrix is square.
pub fn determinant(m: &DMatrix<f64>) -> f64 {
    m.determinant()
}

/// None means the matrix is singular (no inverse exists).
pub fn inverse(m: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    m.clone().try_inverse()
}

/// Rank with a singular-value tolerance cutoff: σmax · max(rows, cols) · ε.
pub fn rank(m: &DMatrix<f64>) -> usize {
    let svd = m.clone().svd(false, false);
    let sigma_max = svd.singular_values.iter().cloned().fold(0.0, f64::max);
    let tol = sigma_max * m.nrows().max(m.ncols()) as f64 * f64::EPSILON;
    svd.singular_values.iter().filter(|&&s| s > tol).count()
}

#[derive(Debug, Clone)]
pub struct EigenPairs {
    pub values: Vec<Complex<f64>>,
    /// One eigenvector per eigenvalue, in the same order.
    pub vectors: Vec<DVector<Complex<f64>>>,
}

/// Eigenvalues via the real Schur form; eigenvectors recovered as the
/// null-space direction of (A − λI), taken from its smallest singular value.
/// Caller guarantees the matrix is square.
pub fn eigen(m: &DMatrix<f64>) -> Result<EigenPairs, String> {
    let n = m.nrows();
    let values: Vec<Complex<f64>> = m.complex_eigenvalues().iter().cloned().collect();
    let complex_m: DMatrix<Complex<f64>> = m.map(|x| Complex::new(x, 0.0));

    let mut vectors = Vec::with_capacity(values.len());
    for &lambda in &values {
        let mut shifted = complex_m.clone();
        for i in 0..n {
            shifted[(i, i)] -= lambda;
        }
        let svd = shifted.svd(false, true);
        let v_t = svd
            .v_t
            .ok_or_else(|| "SVD did not produce right singular vectors".to_string())?;
        // Singular values are sorted descending; the last right singular
        // vector spans the null-space direction.
        let mut v: DVector<Complex<f64>> = v_t.row(n - 1).map(|c| c.conj()).transpose();
        normalize_phase(&mut v);
        vectors.push(v);
    }

    Ok(EigenPairs { values, vectors })
}

/// Rotate the vector so its largest component is real and positive. The
/// eigenvector is only defined up to a phase; fixing it keeps output stable.
fn normalize_phase(v: &mut DVector<Complex<f64>>) {
    let mut pivot = 0;
    for i in 1..v.len() {
        if v[i].norm() > v[pivot].norm() {
            pivot = i;
        }
    }
    let c = v[pivot];
    if c.norm() > 0.0 {
        let phase = c / Complex::new(c.norm(), 0.0);
        for i in 0..v.len() {
            v[i] /= phase;
        }
    }
}
