use simplex_solver::SolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid problem file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {what}: {token:?}")]
    Parse { what: String, token: String },
    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(String),
    #[error(transparent)]
    Solve(#[from] SolveError),
}
