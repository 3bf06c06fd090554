use crate::error::SolveError;

/// A linear program in standard maximization form:
///
/// ```text
/// maximize   c·x
/// subject to A x <= b
///            x >= 0
/// ```
///
/// Every constraint row is a `<=` row. The right-hand sides must be
/// non-negative so that the all-slack basis is a feasible starting point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Objective coefficients `c`, one per variable
    pub objective: Vec<f64>,
    /// Constraint rows of `A`, each with one coefficient per variable
    pub constraints: Vec<Vec<f64>>,
    /// Right-hand side `b`, one entry per constraint
    pub rhs: Vec<f64>,
}

impl Problem {
    pub fn new(objective: Vec<f64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
            rhs: Vec::new(),
        }
    }

    /// Build a problem from its three parts, checking dimensions and finiteness.
    pub fn from_parts(objective: Vec<f64>, constraints: Vec<Vec<f64>>, rhs: Vec<f64>) -> Result<Self, SolveError> {
        let problem = Self { objective, constraints, rhs };
        problem.check_shape()?;
        Ok(problem)
    }

    pub fn add_constraint(&mut self, coefficients: Vec<f64>, rhs: f64) {
        self.constraints.push(coefficients);
        self.rhs.push(rhs);
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Full precondition check used by the solver: shape, finiteness,
    /// tolerance and a feasible origin (`rhs >= -tolerance`).
    pub fn validate(&self, tolerance: f64) -> Result<(), SolveError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SolveError::InvalidTolerance(tolerance));
        }
        self.check_shape()?;

        if let Some((row, &value)) = self.rhs.iter().enumerate().find(|&(_, &b)| b < -tolerance) {
            return Err(SolveError::InfeasibleOrigin { row, value });
        }
        Ok(())
    }

    fn check_shape(&self) -> Result<(), SolveError> {
        let n = self.num_variables();
        let m = self.num_constraints();

        if n == 0 || m == 0 {
            return Err(SolveError::Empty { variables: n, constraints: m });
        }
        if self.rhs.len() != m {
            return Err(SolveError::RhsLength { expected: m, found: self.rhs.len() });
        }
        for (row, coefficients) in self.constraints.iter().enumerate() {
            if coefficients.len() != n {
                return Err(SolveError::RowLength { row, expected: n, found: coefficients.len() });
            }
        }

        if let Some(j) = self.objective.iter().position(|c| !c.is_finite()) {
            return Err(SolveError::NonFinite { location: format!("objective coefficient {}", j) });
        }
        for (i, coefficients) in self.constraints.iter().enumerate() {
            if let Some(j) = coefficients.iter().position(|a| !a.is_finite()) {
                return Err(SolveError::NonFinite { location: format!("constraint {} coefficient {}", i, j) });
            }
        }
        if let Some(i) = self.rhs.iter().position(|b| !b.is_finite()) {
            return Err(SolveError::NonFinite { location: format!("right-hand side {}", i) });
        }

        Ok(())
    }

    /// Objective value `c·x` of a candidate point.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, x)| c * x).sum()
    }

    /// Per-constraint slack `b - A x`. Negative entries are violated rows.
    pub fn slacks(&self, values: &[f64]) -> Vec<f64> {
        self.constraints
            .iter()
            .zip(&self.rhs)
            .map(|(row, &b)| {
                let lhs: f64 = row.iter().zip(values).map(|(a, x)| a * x).sum();
                b - lhs
            })
            .collect()
    }

    /// Whether `values` satisfies `x >= -tol` and `A x <= b + tol`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.num_variables()
            && values.iter().all(|&x| x >= -tolerance)
            && self.slacks(values).iter().all(|&s| s >= -tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Problem {
        let mut problem = Problem::new(vec![2.0, 3.0]);
        problem.add_constraint(vec![1.0, 1.0], 4.0);
        problem.add_constraint(vec![2.0, 1.0], 5.0);
        problem
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert_eq!(two_by_two().validate(1e-9), Ok(()));
    }

    #[test]
    fn test_from_parts_rejects_short_row() {
        let err = Problem::from_parts(vec![1.0, 1.0], vec![vec![1.0, 1.0], vec![1.0]], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, SolveError::RowLength { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn test_from_parts_rejects_rhs_length() {
        let err = Problem::from_parts(vec![1.0], vec![vec![1.0]], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, SolveError::RhsLength { expected: 1, found: 2 });
    }

    #[test]
    fn test_empty_problem() {
        let problem = Problem::new(vec![1.0, 2.0]);
        assert_eq!(problem.validate(1e-9), Err(SolveError::Empty { variables: 2, constraints: 0 }));
    }

    #[test]
    fn test_non_finite_coefficient() {
        let mut problem = two_by_two();
        problem.constraints[1][0] = f64::NAN;
        match problem.validate(1e-9) {
            Err(SolveError::NonFinite { location }) => assert_eq!(location, "constraint 1 coefficient 0"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rhs_is_infeasible_origin() {
        let mut problem = two_by_two();
        problem.rhs[1] = -1.0;
        assert_eq!(problem.validate(1e-9), Err(SolveError::InfeasibleOrigin { row: 1, value: -1.0 }));
    }

    #[test]
    fn test_rhs_within_tolerance_of_zero_is_accepted() {
        let mut problem = two_by_two();
        problem.rhs[0] = -1e-12;
        assert!(problem.validate(1e-9).is_ok());
    }

    #[test]
    fn test_invalid_tolerance() {
        assert_eq!(two_by_two().validate(0.0), Err(SolveError::InvalidTolerance(0.0)));
        assert!(matches!(two_by_two().validate(f64::NAN), Err(SolveError::InvalidTolerance(_))));
    }

    #[test]
    fn test_evaluate_and_slacks() {
        let problem = two_by_two();
        assert!((problem.evaluate(&[0.0, 4.0]) - 12.0).abs() < 1e-12);
        assert_eq!(problem.slacks(&[0.0, 4.0]), vec![0.0, 1.0]);
        assert!(problem.is_feasible(&[0.0, 4.0], 1e-9));
        assert!(!problem.is_feasible(&[3.0, 3.0], 1e-9));
        assert!(!problem.is_feasible(&[-1.0, 0.0], 1e-9));
    }
}
