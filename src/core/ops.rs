//! Operation catalog and the Beginner/Experienced selection model.

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    #[clap(alias = "addition")]
    Add,
    #[clap(alias = "sub")]
    Subtract,
    #[clap(alias = "mul")]
    Multiply,
    #[clap(alias = "t")]
    Transpose,
    #[clap(alias = "det")]
    Determinant,
    #[clap(alias = "inv")]
    Inverse,
    Rank,
    #[clap(alias = "eig")]
    Eigen,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
        Operation::Inverse,
        Operation::Rank,
        Operation::Eigen,
    ];

    /// User-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition (A + B)",
            Operation::Subtract => "Subtraction (A - B)",
            Operation::Multiply => "Multiplication (A × B)",
            Operation::Transpose => "Transpose (Aᵀ, Bᵀ)",
            Operation::Determinant => "Determinant (det(A), det(B))",
            Operation::Inverse => "Inverse (A⁻¹, B⁻¹)",
            Operation::Rank => "Rank (rank(A), rank(B))",
            Operation::Eigen => "Eigenvalues & Eigenvectors",
        }
    }

    /// Operations that combine A and B into one result.
    pub fn takes_both(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }

    /// Step traces exist only for the elementwise/product operations.
    pub fn supports_steps(self) -> bool {
        self.takes_both()
    }
}

/// Learning path levels, in the order they are taught.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
}

impl Level {
    pub fn from_number(n: u8) -> Option<Level> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            4 => Some(Level::Four),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::One => "Level 1: Addition & Subtraction",
            Level::Two => "Level 2: Multiplication",
            Level::Three => "Level 3: Transpose, Determinant & Inverse",
            Level::Four => "Level 4: Rank, Eigenvalues & Eigenvectors",
        }
    }

    /// Short concept note shown to beginners.
    pub fn concept(self) -> &'static str {
        match self {
            Level::One => {
                "You can add or subtract matrices only if they have the same shape. \
                 Each element is added or subtracted individually."
            }
            Level::Two => {
                "Multiply a row of A with a column of B. Requires that columns of A \
                 = rows of B."
            }
            Level::Three => {
                "Transpose: flip rows and columns. Determinant: a number describing \
                 matrix properties. Inverse: exists only for square matrices with \
                 nonzero determinant."
            }
            Level::Four => {
                "Rank: the number of independent rows or columns. Eigenvalues and \
                 eigenvectors show the stretching behavior of the matrix."
            }
        }
    }

    pub fn operations(self) -> &'static [Operation] {
        match self {
            Level::One => &[Operation::Add, Operation::Subtract],
            Level::Two => &[Operation::Multiply],
            Level::Three => &[
                Operation::Transpose,
                Operation::Determinant,
                Operation::Inverse,
            ],
            Level::Four => &[Operation::Rank, Operation::Eigen],
        }
    }

    /// The level on which an operation is introduced.
    pub fn teaching(op: Operation) -> Level {
        match op {
            Operation::Add | Operation::Subtract => Level::One,
            Operation::Multiply => Level::Two,
            Operation::Transpose | Operation::Determinant | Operation::Inverse => Level::Three,
            Operation::Rank | Operation::Eigen => Level::Four,
        }
    }
}

/// Explicit selection state: which operations are on the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Beginner { level: Level },
    Experienced,
}

impl Mode {
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Mode::Beginner { level } => level.operations(),
            Mode::Experienced => &Operation::ALL,
        }
    }

    pub fn allows(self, op: Operation) -> bool {
        self.operations().contains(&op)
    }

    /// Short prompt tag, e.g. "beginner:L2" or "experienced".
    pub fn describe(self) -> String {
        match self {
            Mode::Beginner { level } => format!("beginner:L{}", level.number()),
            Mode::Experienced => "experienced".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experienced_sees_all_operations() {
        assert_eq!(Mode::Experienced.operations().len(), 8);
    }

    #[test]
    fn beginner_levels_partition_the_catalog() {
        let mut seen = Vec::new();
        for n in 1..=4 {
            let level = Level::from_number(n).unwrap();
            seen.extend_from_slice(level.operations());
        }
        assert_eq!(seen, Operation::ALL);
    }

    #[test]
    fn level_two_is_multiplication_only() {
        let mode = Mode::Beginner { level: Level::Two };
        assert_eq!(mode.operations(), &[Operation::Multiply]);
        assert!(!mode.allows(Operation::Determinant));
    }

    #[test]
    fn teaching_level_round_trips() {
        for op in Operation::ALL {
            assert!(Level::teaching(op).operations().contains(&op));
        }
    }
}
