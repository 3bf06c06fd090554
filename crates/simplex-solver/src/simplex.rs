use log::{debug, trace};

use crate::error::SolveError;
use crate::problem::Problem;
use crate::solution::Outcome;
use crate::tableau::Tableau;

/// Primal tableau simplex solver for `max c·x, A x <= b, x >= 0`
#[derive(Debug, Clone)]
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Solve the problem starting from the all-slack basis.
    ///
    /// Entering columns follow the most negative reduced cost, leaving rows
    /// the minimum ratio, both breaking ties on the lowest index. There is no
    /// anti-cycling rule; degenerate problems that cycle run into
    /// [`SolveError::IterationLimit`].
    pub fn solve(&self, problem: &Problem) -> Result<Outcome, SolveError> {
        problem.validate(self.tolerance)?;
        debug!(
            "solving {} variables x {} constraints (tolerance {:e})",
            problem.num_variables(),
            problem.num_constraints(),
            self.tolerance
        );

        let mut tableau = Tableau::new(problem);

        for iteration in 0..=self.max_iterations {
            let Some(col) = tableau.entering_column(self.tolerance) else {
                debug!("optimal after {} iterations, objective {}", iteration, tableau.objective_value());
                return Ok(Outcome::Optimal(tableau.extract(iteration)));
            };
            let Some(row) = tableau.leaving_row(col, self.tolerance) else {
                debug!("unbounded in column {} after {} iterations", col, iteration);
                return Ok(Outcome::Unbounded);
            };
            if iteration == self.max_iterations {
                break;
            }

            trace!(
                "iteration {}: column {} enters, row {} leaves (basic {}), pivot {}",
                iteration,
                col,
                row,
                tableau.basis()[row],
                tableau[(row, col)]
            );
            tableau.pivot(row, col);
        }

        debug!("iteration limit {} reached", self.max_iterations);
        Err(SolveError::IterationLimit(self.max_iterations))
    }
}

/// Solve `max c·x, A x <= b, x >= 0` with tolerance `eps`.
///
/// Shorthand for [`Solver::solve`] on a [`Problem`] assembled from slices.
pub fn solve(objective: &[f64], constraints: &[Vec<f64>], rhs: &[f64], eps: f64) -> Result<Outcome, SolveError> {
    let problem = Problem::from_parts(objective.to_vec(), constraints.to_vec(), rhs.to_vec())?;
    Solver::new().with_tolerance(eps).solve(&problem)
}
