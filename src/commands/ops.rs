use anyhow::Result;
use colored::Colorize;

use crate::core::ops::{Mode, Operation};

pub fn main(mode: Mode) -> Result<()> {
    match mode {
        Mode::Beginner { level } => {
            println!("{}", level.label().bold());
            println!("{}", level.concept());
            println!();
            for op in level.operations() {
                println!("  {}", op.label());
            }
        }
        Mode::Experienced => {
            for op in Operation::ALL {
                println!("  {}", op.label());
            }
        }
    }
    Ok(())
}
