use matrixlab::core::dispatch::{apply, Outcome, Value};
use matrixlab::core::matrix::Matrix;
use matrixlab::core::ops::Operation;

fn m(text: &str) -> Matrix {
    text.parse().expect("matrix")
}

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn value_matrix(outcome: &Outcome) -> &Matrix {
    match outcome {
        Outcome::Value(Value::Matrix(m)) => m,
        other => panic!("expected matrix value, got {:?}", other),
    }
}

fn value_scalar(outcome: &Outcome) -> f64 {
    match outcome {
        Outcome::Value(Value::Scalar(x)) => *x,
        other => panic!("expected scalar value, got {:?}", other),
    }
}

#[test]
fn add_concrete_and_commutative() {
    let a = m("1 2 3\n4 5 6");
    let b = m("7 8 9\n10 11 12");
    let ab = apply(Operation::Add, &a, &b, false);
    assert_eq!(value_matrix(&ab.targets[0].outcome), &m("8 10 12\n14 16 18"));

    let ba = apply(Operation::Add, &b, &a, false);
    assert_eq!(
        value_matrix(&ab.targets[0].outcome),
        value_matrix(&ba.targets[0].outcome)
    );
}

#[test]
fn subtract_is_antisymmetric() {
    let a = m("1 2\n3 4");
    let b = m("0.5 1\n-2 7");
    let ab = apply(Operation::Subtract, &a, &b, false);
    let ba = apply(Operation::Subtract, &b, &a, false);
    let s1 = value_matrix(&ab.targets[0].outcome);
    let s2 = value_matrix(&ba.targets[0].outcome);
    for i in 0..2 {
        for j in 0..2 {
            assert!(approx_eq(s1.get(i, j), -s2.get(i, j), 1e-12));
        }
    }
}

#[test]
fn add_shape_mismatch_is_a_warning() {
    let report = apply(Operation::Add, &m("1 2\n3 4"), &m("1 2 3\n4 5 6"), false);
    match &report.targets[0].outcome {
        Outcome::ShapeWarning(msg) => assert!(msg.contains("same shape")),
        other => panic!("expected warning, got {:?}", other),
    }
}

#[test]
fn multiply_values() {
    let c = apply(Operation::Multiply, &m("1 2\n3 4"), &m("5 6\n7 8"), false);
    assert_eq!(value_matrix(&c.targets[0].outcome), &m("19 22\n43 50"));
}

#[test]
fn multiply_shape_warning_names_both_shapes() {
    let report = apply(
        Operation::Multiply,
        &m("1 2 3\n4 5 6"),
        &m("7 8 9\n10 11 12"),
        false,
    );
    match &report.targets[0].outcome {
        Outcome::ShapeWarning(msg) => {
            assert!(msg.contains("A is 2×3"));
            assert!(msg.contains("B is 2×3"));
            assert!(msg.contains("Columns of A must equal rows of B"));
        }
        other => panic!("expected warning, got {:?}", other),
    }
}

#[test]
fn transpose_is_an_involution_and_covers_both() {
    let a = m("1 2 3\n4 5 6");
    let b = m("7 8\n9 10");
    let once = apply(Operation::Transpose, &a, &b, false);
    assert_eq!(once.targets.len(), 2);
    let at = value_matrix(&once.targets[0].outcome).clone();
    let twice = apply(Operation::Transpose, &at, &b, false);
    assert_eq!(value_matrix(&twice.targets[0].outcome), &a);
}

#[test]
fn determinant_concrete() {
    let report = apply(Operation::Determinant, &m("1 2\n3 4"), &m("1 0\n0 1"), false);
    assert!(approx_eq(value_scalar(&report.targets[0].outcome), -2.0, 1e-9));
    assert!(approx_eq(value_scalar(&report.targets[1].outcome), 1.0, 1e-9));
}

#[test]
fn determinant_warns_per_matrix_independently() {
    // A is not square; B still gets its determinant.
    let report = apply(Operation::Determinant, &m("1 2 3\n4 5 6"), &m("1 2\n3 4"), false);
    assert!(matches!(
        report.targets[0].outcome,
        Outcome::ShapeWarning(_)
    ));
    assert!(approx_eq(value_scalar(&report.targets[1].outcome), -2.0, 1e-9));
}

#[test]
fn inverse_times_original_is_identity() {
    let a = m("4 7\n2 6");
    let report = apply(Operation::Inverse, &a, &a, false);
    let inv = value_matrix(&report.targets[0].outcome);
    let product = inv.inner() * a.inner();
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(approx_eq(product[(i, j)], expected, 1e-9));
        }
    }
}

#[test]
fn singular_matrix_det_zero_and_not_invertible() {
    let s = m("1 2\n2 4");
    let det = apply(Operation::Determinant, &s, &s, false);
    assert!(approx_eq(value_scalar(&det.targets[0].outcome), 0.0, 1e-9));

    let inv = apply(Operation::Inverse, &s, &s, false);
    match &inv.targets[0].outcome {
        Outcome::ComputeError(msg) => assert!(msg.contains("not invertible")),
        other => panic!("expected compute error, got {:?}", other),
    }
}

#[test]
fn inverse_mixed_outcomes_are_independent() {
    // A singular, B invertible: error on A, value on B.
    let report = apply(Operation::Inverse, &m("1 2\n2 4"), &m("4 7\n2 6"), false);
    assert!(matches!(
        report.targets[0].outcome,
        Outcome::ComputeError(_)
    ));
    assert!(matches!(
        report.targets[1].outcome,
        Outcome::Value(Value::Matrix(_))
    ));
}

#[test]
fn add_steps_are_one_per_row() {
    let report = apply(
        Operation::Add,
        &m("1 2 3\n4 5 6"),
        &m("7 8 9\n10 11 12"),
        true,
    );
    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[0], "Row 1: [1 2 3] + [7 8 9] = [8 10 12]");
    assert_eq!(report.steps[1], "Row 2: [4 5 6] + [10 11 12] = [14 16 18]");
}

#[test]
fn multiply_steps_are_one_per_element() {
    let report = apply(Operation::Multiply, &m("1 2\n3 4"), &m("5 6\n7 8"), true);
    assert_eq!(report.steps.len(), 4);
    assert_eq!(report.steps[0], "C[1,1] = [1 2] · [5 7] = 19");
}

#[test]
fn steps_never_appear_for_per_matrix_operations() {
    let report = apply(Operation::Determinant, &m("1 2\n3 4"), &m("1 2\n3 4"), true);
    assert!(report.steps.is_empty());
}

#[test]
fn steps_do_not_change_the_result() {
    let a = m("1 2\n3 4");
    let b = m("5 6\n7 8");
    let quiet = apply(Operation::Add, &a, &b, false);
    let traced = apply(Operation::Add, &a, &b, true);
    assert_eq!(
        value_matrix(&quiet.targets[0].outcome),
        value_matrix(&traced.targets[0].outcome)
    );
    assert!(quiet.steps.is_empty());
}
