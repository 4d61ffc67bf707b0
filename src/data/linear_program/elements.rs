//! # Building blocks to describe linear programs.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}

/// A `BuildError` is created when a problem statement doesn't describe a valid standard form
/// program.
///
/// These are shape errors only; whether the described program is feasible or bounded is decided
/// by the algorithm, not at construction time.
#[derive(Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The problem has no variables or no constraints.
    Empty,
    /// A constraint row has a different number of coefficients than there are variables.
    RowLength {
        /// Index of the offending constraint row.
        row: usize,
        /// The number of variables of the problem.
        expected: usize,
        /// The number of coefficients the row actually has.
        found: usize,
    },
    /// The number of right-hand side values doesn't match the number of constraint rows.
    RhsLength {
        /// The number of constraint rows of the problem.
        expected: usize,
        /// The number of right-hand side values actually provided.
        found: usize,
    },
}

impl Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::Empty => {
                write!(f, "the problem needs at least one variable and one constraint")
            }
            BuildError::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "constraint row {} has {} coefficients, the problem has {} variables",
                row, found, expected,
            ),
            BuildError::RhsLength { expected, found } => write!(
                f,
                "{} right-hand side values for {} constraint rows",
                found, expected,
            ),
        }
    }
}

impl Error for BuildError {}
