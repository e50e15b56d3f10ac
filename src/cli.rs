use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::ops::Operation;

#[derive(Copy, Clone, Debug, ValueEnum)]
#[derive(Default)]
pub enum ModeArg {
    #[default]
    Experienced,
    Beginner,
}

#[derive(Debug, Parser)]
#[command(
    name = "matrixlab",
    about = "matrixlab — learn and practice matrix operations on two matrices",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct MatrixlabCli {
    /// Global: disable colored output
    #[arg(long = "plain", action = ArgAction::SetTrue, global = true)]
    pub plain: bool,

    /// Global: path to config (TOML); default: ~/.matrixlab/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute one operation on two matrices
    ///
    /// Matrix text is one row per line, numbers separated by spaces; inline
    /// text may use ';' as a row separator.
    ///
    /// Examples:
    ///   matrixlab calc add --a "1 2; 3 4" --b "5 6; 7 8"
    ///   matrixlab calc det --a-file a.txt --b-file b.txt
    Calc {
        /// Operation to perform
        #[arg(value_enum, value_name = "OPERATION")]
        op: Operation,

        /// Matrix A as inline text
        #[arg(long = "a", value_name = "TEXT", conflicts_with = "a_file")]
        a: Option<String>,

        /// Matrix A from a file
        #[arg(long = "a-file", value_name = "FILE")]
        a_file: Option<PathBuf>,

        /// Matrix B as inline text
        #[arg(long = "b", value_name = "TEXT", conflicts_with = "b_file")]
        b: Option<String>,

        /// Matrix B from a file
        #[arg(long = "b-file", value_name = "FILE")]
        b_file: Option<PathBuf>,

        /// Show the step-by-step trace (add/subtract/multiply only)
        #[arg(long = "steps", action = ArgAction::SetTrue)]
        steps: bool,
    },

    /// List the operations available to a mode/level, with concept notes
    Ops {
        #[arg(long = "mode", value_enum, default_value_t = ModeArg::Experienced)]
        mode: ModeArg,

        /// Learning level 1-4 (beginner mode)
        #[arg(long = "level", value_name = "N")]
        level: Option<u8>,
    },

    /// Parse a matrix and echo its shape and values (debug helper)
    Parse {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Inline matrix text; ';' separates rows
        #[arg(long = "text", value_name = "TEXT", conflicts_with = "file")]
        text: Option<String>,
    },

    /// Interactive calculator shell (also the default with no subcommand)
    Shell,
}
