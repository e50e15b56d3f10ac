//! Operation dispatcher: shape validation, library calls, outcome shaping.
//!
//! Per-matrix operations (Transpose, Determinant, Inverse, Rank, Eigen) are
//! evaluated for A and B independently; a warning on one never suppresses
//! the other. Every library call runs behind a panic guard so an unexpected
//! numeric failure surfaces as a `ComputeError`, never as an unhandled fault.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::linalg::{self, EigenPairs};
use super::matrix::Matrix;
use super::ops::Operation;
use super::render;

#[derive(Debug, Clone)]
pub enum Value {
    Matrix(Matrix),
    /// Determinant.
    Scalar(f64),
    Rank(usize),
    Eigen(EigenPairs),
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Value(Value),
    ShapeWarning(String),
    ComputeError(String),
}

#[derive(Debug, Clone)]
pub struct TargetReport {
    /// "A", "B" for per-matrix operations; "A + B" etc. for combined ones.
    pub subject: &'static str,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct OperationReport {
    pub op: Operation,
    pub targets: Vec<TargetReport>,
    /// Ordered, purely presentational; empty unless steps were requested
    /// for an operation that has them.
    pub steps: Vec<String>,
}

pub fn apply(op: Operation, a: &Matrix, b: &Matrix, show_steps: bool) -> OperationReport {
    let trace = show_steps && op.supports_steps();
    let mut steps = Vec::new();

    let targets = match op {
        Operation::Add => vec![elementwise(a, b, false, trace, &mut steps)],
        Operation::Subtract => vec![elementwise(a, b, true, trace, &mut steps)],
        Operation::Multiply => vec![multiply(a, b, trace, &mut steps)],
        Operation::Transpose => per_matrix(a, b, |m, _| {
            Outcome::Value(Value::Matrix(m.transpose()))
        }),
        Operation::Determinant => per_matrix(a, b, |m, name| {
            if m.is_square() {
                Outcome::Value(Value::Scalar(linalg::determinant(m.inner())))
            } else {
                Outcome::ShapeWarning(format!(
                    "Matrix {} must be square to calculate determinant.",
                    name
                ))
            }
        }),
        Operation::Inverse => per_matrix(a, b, |m, name| {
            if !m.is_square() {
                return Outcome::ShapeWarning(format!(
                    "Matrix {} must be square to calculate inverse.",
                    name
                ));
            }
            match linalg::inverse(m.inner()) {
                Some(inv) => Outcome::Value(Value::Matrix(Matrix::from_inner(inv))),
                None => Outcome::ComputeError(format!("Matrix {} is not invertible.", name)),
            }
        }),
        Operation::Rank => per_matrix(a, b, |m, _| {
            Outcome::Value(Value::Rank(linalg::rank(m.inner())))
        }),
        Operation::Eigen => per_matrix(a, b, |m, name| {
            if !m.is_square() {
                return Outcome::ShapeWarning(format!(
                    "Matrix {} must be square to calculate eigenvalues.",
                    name
                ));
            }
            match linalg::eigen(m.inner()) {
                Ok(pairs) => Outcome::Value(Value::Eigen(pairs)),
                Err(msg) => Outcome::ComputeError(msg),
            }
        }),
    };

    OperationReport { op, targets, steps }
}

fn elementwise(
    a: &Matrix,
    b: &Matrix,
    subtract: bool,
    trace: bool,
    steps: &mut Vec<String>,
) -> TargetReport {
    let (subject, sign, verb) = if subtract {
        ("A - B", "-", "subtraction")
    } else {
        ("A + B", "+", "addition")
    };

    if a.shape() != b.shape() {
        return TargetReport {
            subject,
            outcome: Outcome::ShapeWarning(format!(
                "Matrices must have the same shape for {}.",
                verb
            )),
        };
    }

    let outcome = guarded(|| {
        let result = if subtract {
            Matrix::from_inner(a.inner() - b.inner())
        } else {
            Matrix::from_inner(a.inner() + b.inner())
        };
        if trace {
            for i in 0..a.rows() {
                steps.push(format!(
                    "Row {}: {} {} {} = {}",
                    i + 1,
                    render::row_text(&a.row_values(i)),
                    sign,
                    render::row_text(&b.row_values(i)),
                    render::row_text(&result.row_values(i)),
                ));
            }
        }
        Outcome::Value(Value::Matrix(result))
    });

    TargetReport { subject, outcome }
}

fn multiply(a: &Matrix, b: &Matrix, trace: bool, steps: &mut Vec<String>) -> TargetReport {
    let subject = "A × B";

    if a.cols() != b.rows() {
        let (ar, ac) = a.shape();
        let (br, bc) = b.shape();
        return TargetReport {
            subject,
            outcome: Outcome::ShapeWarning(format!(
                "Cannot multiply: A is {}×{}, B is {}×{}. Columns of A must equal rows of B.",
                ar, ac, br, bc
            )),
        };
    }

    let outcome = guarded(|| {
        let product = Matrix::from_inner(a.inner() * b.inner());
        if trace {
            for i in 0..product.rows() {
                for j in 0..product.cols() {
                    steps.push(format!(
                        "C[{},{}] = {} · {} = {}",
                        i + 1,
                        j + 1,
                        render::row_text(&a.row_values(i)),
                        render::row_text(&b.col_values(j)),
                        render::scalar_text(product.get(i, j)),
                    ));
                }
            }
        }
        Outcome::Value(Value::Matrix(product))
    });

    TargetReport { subject, outcome }
}

fn per_matrix<F>(a: &Matrix, b: &Matrix, compute: F) -> Vec<TargetReport>
where
    F: Fn(&Matrix, &'static str) -> Outcome,
{
    vec![
        TargetReport {
            subject: "A",
            outcome: guarded(|| compute(a, "A")),
        },
        TargetReport {
            subject: "B",
            outcome: guarded(|| compute(b, "B")),
        },
    ]
}

fn guarded<F: FnOnce() -> Outcome>(compute: F) -> Outcome {
    match catch_unwind(AssertUnwindSafe(compute)) {
        Ok(outcome) => outcome,
        Err(payload) => Outcome::ComputeError(panic_text(payload)),
    }
}

fn panic_text(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected numeric failure".to_string()
    }
}
