//! One request/response cycle: raw text in, report or parse errors out.
//! Nothing here outlives a single call; there is no caching between runs.

use super::dispatch::{self, OperationReport};
use super::matrix::{Matrix, ParseError};
use super::ops::{Mode, Operation};

#[derive(Debug, Clone)]
pub struct SessionInput<'a> {
    pub matrix_a: &'a str,
    pub matrix_b: &'a str,
    pub mode: Mode,
    pub operation: Operation,
    pub show_steps: bool,
}

#[derive(Debug, Clone)]
pub enum SessionOutput {
    /// The operation is not on the mode's menu (e.g. beginner level 1
    /// asking for a determinant).
    OperationUnavailable { operation: Operation, mode: Mode },
    /// At least one matrix failed to parse; dispatch was skipped entirely.
    /// The successfully parsed side is carried so callers can still echo it.
    ParseFailed {
        a: Result<Matrix, ParseError>,
        b: Result<Matrix, ParseError>,
    },
    Computed {
        a: Matrix,
        b: Matrix,
        report: OperationReport,
    },
}

pub fn run(input: &SessionInput<'_>) -> SessionOutput {
    if !input.mode.allows(input.operation) {
        return SessionOutput::OperationUnavailable {
            operation: input.operation,
            mode: input.mode,
        };
    }

    let a = input.matrix_a.parse::<Matrix>();
    let b = input.matrix_b.parse::<Matrix>();
    match (a, b) {
        (Ok(a), Ok(b)) => {
            let report = dispatch::apply(input.operation, &a, &b, input.show_steps);
            SessionOutput::Computed { a, b, report }
        }
        (a, b) => SessionOutput::ParseFailed { a, b },
    }
}
