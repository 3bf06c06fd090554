use thiserror::Error;

/// Reasons a problem is rejected before (or while) pivoting.
///
/// Unboundedness is not an error: it is reported as [`crate::Outcome::Unbounded`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Problem must have at least one variable and one constraint (got {variables} variables, {constraints} constraints)")]
    Empty { variables: usize, constraints: usize },
    #[error("Constraint {row} has {found} coefficients, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
    #[error("Right-hand side has {found} entries, expected {expected}")]
    RhsLength { expected: usize, found: usize },
    #[error("Non-finite value in {location}")]
    NonFinite { location: String },
    #[error("Tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
    #[error("Origin is infeasible: rhs of constraint {row} is negative ({value})")]
    InfeasibleOrigin { row: usize, value: f64 },
    #[error("No optimum reached after {0} iterations")]
    IterationLimit(usize),
}
