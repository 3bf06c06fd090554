mod error;
mod problem;
mod simplex;
mod solution;
mod tableau;

pub use error::SolveError;
pub use problem::Problem;
pub use simplex::{Solver, solve};
pub use solution::{Outcome, Solution};
pub use tableau::Tableau;
