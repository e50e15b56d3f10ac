mod cli;
mod commands;
mod config;
/// matrixlab main — subcommands + interactive shell by default.
mod core;
mod shell;

use anyhow::bail;
use clap::Parser; // trait import enables MatrixlabCli::parse()

use crate::cli::{Command, MatrixlabCli, ModeArg};
use crate::config::resolve_config_path;
use crate::core::ops::{Level, Mode};

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("matrixlab"));
}

fn main() -> anyhow::Result<()> {
    set_console_title();

    let args = MatrixlabCli::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    let cfg_path = resolve_config_path(&args.config);
    let cfg = config::load(&cfg_path)?;

    match args.cmd {
        // No subcommand: open the interactive calculator.
        None | Some(Command::Shell) => shell::start(&cfg),

        Some(Command::Calc {
            op,
            a,
            a_file,
            b,
            b_file,
            steps,
        }) => commands::calc::main(op, a, a_file, b, b_file, steps),

        Some(Command::Ops { mode, level }) => {
            let mode = match mode {
                ModeArg::Experienced => Mode::Experienced,
                ModeArg::Beginner => {
                    let n = level.unwrap_or(1);
                    let Some(level) = Level::from_number(n) else {
                        bail!("level must be 1-4, got {}", n);
                    };
                    Mode::Beginner { level }
                }
            };
            commands::ops::main(mode)
        }

        Some(Command::Parse { file, text }) => commands::parse::main(file, text),
    }
}
