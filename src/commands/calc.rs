use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::core::dispatch::{OperationReport, Outcome};
use crate::core::matrix::{Matrix, ParseError};
use crate::core::ops::{Level, Mode, Operation};
use crate::core::render;
use crate::core::session::{self, SessionInput, SessionOutput};

pub fn main(
    op: Operation,
    a: Option<String>,
    a_file: Option<PathBuf>,
    b: Option<String>,
    b_file: Option<PathBuf>,
    steps: bool,
) -> Result<()> {
    let text_a = matrix_text_arg("A", "--a", a, a_file)?;
    let text_b = matrix_text_arg("B", "--b", b, b_file)?;

    // Steps are a beginner-mode feature; asking for them implies the level
    // that teaches the operation.
    let mode = if steps {
        Mode::Beginner {
            level: Level::teaching(op),
        }
    } else {
        Mode::Experienced
    };

    let input = SessionInput {
        matrix_a: &text_a,
        matrix_b: &text_b,
        mode,
        operation: op,
        show_steps: steps,
    };

    match session::run(&input) {
        SessionOutput::OperationUnavailable { operation, .. } => {
            bail!("operation '{}' is not available here", operation.label())
        }
        SessionOutput::ParseFailed { a, b } => {
            report_parse("A", &a);
            report_parse("B", &b);
            bail!("matrix input rejected");
        }
        SessionOutput::Computed { a, b, report } => {
            println!("Matrix A:\n{}", render::matrix_text(&a));
            println!("Matrix B:\n{}", render::matrix_text(&b));
            print_report(&report);
            Ok(())
        }
    }
}

fn matrix_text_arg(
    name: &str,
    flag: &str,
    inline: Option<String>,
    file: Option<PathBuf>,
) -> Result<String> {
    match (inline, file) {
        // ';' lets a whole matrix fit on one shell line
        (Some(text), None) => Ok(text.replace(';', "\n")),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("read matrix {} from {}", name, path.display())),
        _ => bail!("matrix {}: pass exactly one of {} or {}-file", name, flag, flag),
    }
}

/// Echo a parsed matrix, or surface its parse error exactly once.
pub fn report_parse(name: &str, parsed: &Result<Matrix, ParseError>) {
    match parsed {
        Ok(m) => println!("Matrix {}:\n{}", name, render::matrix_text(m)),
        Err(e) => eprintln!("{} Matrix {}: {}", "err:".red().bold(), name, e),
    }
}

pub fn print_report(report: &OperationReport) {
    for line in &report.steps {
        println!("{}", line);
    }
    for target in &report.targets {
        match &target.outcome {
            Outcome::Value(value) => {
                println!("{}", render::value_text(report.op, target.subject, value))
            }
            Outcome::ShapeWarning(msg) => {
                println!("{} {}", "warn:".yellow().bold(), msg)
            }
            Outcome::ComputeError(msg) => {
                println!("{} {}", "err:".red().bold(), msg)
            }
        }
    }
}
