//! Interactive calculator loop — the default mode with no subcommand.

use colored::Colorize;
use std::io::{self, Write};

use clap::ValueEnum;

use crate::commands::calc::{print_report, report_parse};
use crate::config::MatrixlabConfig;
use crate::core::matrix::Matrix;
use crate::core::ops::{Level, Mode, Operation};
use crate::core::session::{self, SessionInput, SessionOutput};

const DEFAULT_A: &str = "1 2 3\n4 5 6";
const DEFAULT_B: &str = "7 8 9\n10 11 12";

pub fn start(cfg: &MatrixlabConfig) -> anyhow::Result<()> {
    banner();

    let mut mode = cfg.startup_mode();
    let mut show_steps = cfg.show_steps;
    let mut operation = mode.operations()[0];
    let mut raw_a = DEFAULT_A.to_string();
    let mut raw_b = DEFAULT_B.to_string();

    if let Mode::Beginner { level } = mode {
        println!("{}", level.label().bold());
        println!("{}", level.concept());
    }

    loop {
        // Prompt
        print!(
            "{} {} {} ",
            "⟦MATRIXLAB⟧".bold().truecolor(0, 180, 225),
            mode.describe().truecolor(130, 200, 0),
            "›".truecolor(255, 240, 0)
        );
        io::stdout().flush().ok();

        // Read line
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let cmd = parts.remove(0);

        match cmd.as_str() {
            "help" | "?" => print_help(),
            "exit" | "quit" => break,

            "mode" => match parts.first().map(String::as_str) {
                Some("beginner") => {
                    let level = match mode {
                        Mode::Beginner { level } => level,
                        Mode::Experienced => Level::One,
                    };
                    mode = Mode::Beginner { level };
                    println!("{}", level.label().bold());
                    println!("{}", level.concept());
                    operation = clamp_operation(operation, mode);
                }
                Some("experienced") => {
                    mode = Mode::Experienced;
                }
                _ => usage("mode <beginner|experienced>"),
            },

            // Picking a level implies beginner mode.
            "level" => match parts.first().and_then(|p| p.parse::<u8>().ok()) {
                Some(n) => match Level::from_number(n) {
                    Some(level) => {
                        mode = Mode::Beginner { level };
                        println!("{}", level.label().bold());
                        println!("{}", level.concept());
                        operation = clamp_operation(operation, mode);
                    }
                    None => usage("level <1-4>"),
                },
                None => usage("level <1-4>"),
            },

            "concept" => match mode {
                Mode::Beginner { level } => println!("{}", level.concept()),
                Mode::Experienced => {
                    println!("Concept notes are shown in beginner mode; try 'level 1'.")
                }
            },

            "a" => {
                raw_a = read_matrix_text("A")?;
                report_parse("A", &raw_a.parse::<Matrix>());
            }
            "b" => {
                raw_b = read_matrix_text("B")?;
                report_parse("B", &raw_b.parse::<Matrix>());
            }
            "show" => {
                report_parse("A", &raw_a.parse::<Matrix>());
                report_parse("B", &raw_b.parse::<Matrix>());
            }

            "ops" => {
                for op in mode.operations() {
                    let marker = if *op == operation { "*" } else { " " };
                    println!("{} {}", marker, op.label());
                }
            }
            "op" => match parts.first() {
                Some(name) => match Operation::from_str(name, true) {
                    Ok(op) if mode.allows(op) => {
                        operation = op;
                        println!("{}", op.label());
                    }
                    Ok(op) => eprintln!(
                        "{} '{}' is not on this level's menu; see 'ops'.",
                        "warn:".yellow().bold(),
                        op.label()
                    ),
                    Err(_) => eprintln!(
                        "{} unknown operation '{}'; try add, sub, mul, transpose, det, inv, rank, eigen",
                        "err:".red().bold(),
                        name
                    ),
                },
                None => usage("op <name>"),
            },

            "steps" => match (mode, parts.first().map(String::as_str)) {
                (Mode::Experienced, _) => eprintln!(
                    "{} step traces are a beginner-mode feature",
                    "warn:".yellow().bold()
                ),
                (_, Some("on")) => show_steps = true,
                (_, Some("off")) => show_steps = false,
                _ => usage("steps <on|off>"),
            },

            "calc" | "=" => {
                let input = SessionInput {
                    matrix_a: &raw_a,
                    matrix_b: &raw_b,
                    mode,
                    operation,
                    show_steps,
                };
                match session::run(&input) {
                    SessionOutput::OperationUnavailable { operation, .. } => eprintln!(
                        "{} '{}' is not on this level's menu; see 'ops'.",
                        "warn:".yellow().bold(),
                        operation.label()
                    ),
                    SessionOutput::ParseFailed { a, b } => {
                        report_parse("A", &a);
                        report_parse("B", &b);
                    }
                    SessionOutput::Computed { a, b, report } => {
                        report_parse("A", &Ok(a));
                        report_parse("B", &Ok(b));
                        print_report(&report);
                    }
                }
            }

            other => eprintln!(
                "{} unknown command '{}'; try 'help'",
                "err:".red().bold(),
                other
            ),
        }
    }
    Ok(())
}

fn clamp_operation(current: Operation, mode: Mode) -> Operation {
    if mode.allows(current) {
        current
    } else {
        mode.operations()[0]
    }
}

fn read_matrix_text(name: &str) -> anyhow::Result<String> {
    println!(
        "Enter matrix {} one row per line, numbers separated by spaces; finish with '.' or a blank line.",
        name
    );
    let mut text = String::new();
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() || line == "." {
            break;
        }
        text.push_str(line);
        text.push('\n');
    }
    Ok(text)
}

fn banner() {
    println!("{}", "MATRIXLAB".bold().truecolor(0, 180, 225));
    println!("Learn and practice matrix operations on two matrices. Type 'help' for commands.");
}

fn print_help() {
    println!("commands:");
    println!("  mode <beginner|experienced>   switch mode");
    println!("  level <1-4>                   pick a learning level (implies beginner)");
    println!("  concept                       show the current level's concept note");
    println!("  a | b                         enter matrix A or B (multi-line)");
    println!("  show                          echo both matrices");
    println!("  ops                           list operations for the current mode");
    println!("  op <name>                     choose the operation (add, det, inv, ...)");
    println!("  steps <on|off>                toggle step-by-step traces (beginner)");
    println!("  calc | =                      compute and show the result");
    println!("  exit | quit                   leave");
}

fn usage(u: &str) {
    eprintln!("usage: {u}");
}
