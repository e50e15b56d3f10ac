use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::core::matrix::Matrix;
use crate::core::render;

pub fn main(file: Option<PathBuf>, text: Option<String>) -> Result<()> {
    let raw = match (text, file) {
        (Some(t), None) => t.replace(';', "\n"),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("read matrix from {}", path.display()))?,
        _ => bail!("pass exactly one of FILE or --text"),
    };

    match raw.parse::<Matrix>() {
        Ok(m) => {
            println!("{} rows × {} cols", m.rows(), m.cols());
            println!("{}", render::matrix_text(&m));
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "err:".red().bold(), e);
            bail!("matrix input rejected");
        }
    }
}
