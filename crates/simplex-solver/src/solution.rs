/// Terminal result of a simplex run
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An optimal basic solution was found
    Optimal(Solution),
    /// The objective increases without limit along a feasible ray
    Unbounded,
}

/// Optimal basic solution read off the final tableau
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Value of each original variable
    pub values: Vec<f64>,
    /// Optimal objective value
    pub objective_value: f64,
    /// Number of pivots performed
    pub iterations: usize,
    /// Column basic in each constraint row at termination
    pub basis: Vec<usize>,
}

impl Outcome {
    pub fn is_optimal(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Optimal(solution) => Some(solution),
            Outcome::Unbounded => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Outcome::Optimal(solution) => Some(solution),
            Outcome::Unbounded => None,
        }
    }
}

impl Solution {
    /// Whether variable `j` is in the final basis
    pub fn is_basic(&self, j: usize) -> bool {
        self.basis.contains(&j)
    }
}
