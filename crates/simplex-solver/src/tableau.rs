use std::ops::{Index, IndexMut};

use crate::problem::Problem;
use crate::solution::Solution;

/// Dense simplex tableau stored row-major in one contiguous buffer.
///
/// Layout for `n` variables and `m` constraints, `(m + 1) x (n + m + 1)`:
///
/// ```text
///            x_0 .. x_{n-1} | s_0 .. s_{m-1} | rhs
/// row 0..m       A          |      I         |  b
/// row m         -c          |      0         |  z
/// ```
///
/// The last row is the objective row; its rhs entry tracks the objective
/// value of the current basic solution.
#[derive(Debug, Clone)]
pub struct Tableau {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
    n_vars: usize,
    /// Column currently basic in each constraint row
    basis: Vec<usize>,
}

impl Tableau {
    /// Build the initial tableau with the all-slack basis.
    ///
    /// Panics if a constraint row does not have one entry per variable; run
    /// [`Problem::validate`] first.
    pub fn new(problem: &Problem) -> Self {
        let n_vars = problem.num_variables();
        let n_constraints = problem.num_constraints();
        let n_rows = n_constraints + 1;
        let n_cols = n_vars + n_constraints + 1;

        let mut tableau = Self {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
            n_vars,
            basis: (n_vars..n_vars + n_constraints).collect(),
        };

        let rhs_col = tableau.rhs_col();
        for (i, (row, &b)) in problem.constraints.iter().zip(&problem.rhs).enumerate() {
            tableau.row_mut(i)[..n_vars].copy_from_slice(row);
            tableau[(i, n_vars + i)] = 1.0;
            tableau[(i, rhs_col)] = b;
        }

        let obj_row = tableau.objective_row();
        for (j, &c) in problem.objective.iter().enumerate() {
            tableau[(obj_row, j)] = -c;
        }

        tableau
    }

    pub fn num_rows(&self) -> usize {
        self.n_rows
    }

    pub fn num_cols(&self) -> usize {
        self.n_cols
    }

    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    fn objective_row(&self) -> usize {
        self.n_rows - 1
    }

    fn rhs_col(&self) -> usize {
        self.n_cols - 1
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Most negative objective-row coefficient strictly below `-tolerance`,
    /// over structural and slack columns. First column wins ties.
    ///
    /// `None` means no column can improve the objective: the tableau is optimal.
    pub fn entering_column(&self, tolerance: f64) -> Option<usize> {
        let objective = &self.row(self.objective_row())[..self.rhs_col()];

        let mut min_val = -tolerance;
        let mut min_col = None;
        for (j, &coef) in objective.iter().enumerate() {
            if coef < min_val {
                min_val = coef;
                min_col = Some(j);
            }
        }
        min_col
    }

    /// Minimum-ratio test on `col`. Only rows with an entry above `tolerance`
    /// qualify; the first row with the smallest ratio wins.
    ///
    /// `None` means the column is unbounded.
    pub fn leaving_row(&self, col: usize, tolerance: f64) -> Option<usize> {
        let rhs_col = self.rhs_col();

        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;
        for i in 0..self.objective_row() {
            let val = self[(i, col)];
            if val > tolerance {
                let ratio = self[(i, rhs_col)] / val;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }
        min_row
    }

    /// Exchange the variable basic in `row` for the one in column `col`.
    pub fn pivot(&mut self, row: usize, col: usize) {
        let n_cols = self.n_cols;

        let pivot_val = self[(row, col)];
        for value in self.row_mut(row) {
            *value /= pivot_val;
        }

        let (before, rest) = self.data.split_at_mut(row * n_cols);
        let (pivot_row, after) = rest.split_at_mut(n_cols);
        for other in before.chunks_exact_mut(n_cols).chain(after.chunks_exact_mut(n_cols)) {
            let factor = other[col];
            if factor == 0.0 {
                continue;
            }
            for (value, &p) in other.iter_mut().zip(pivot_row.iter()) {
                *value -= factor * p;
            }
        }

        self.basis[row] = col;
    }

    /// Current objective value, the rhs entry of the objective row.
    pub fn objective_value(&self) -> f64 {
        self[(self.objective_row(), self.rhs_col())]
    }

    /// Read the basic solution off the tableau. Non-basic structural
    /// variables sit at zero.
    pub fn extract(&self, iterations: usize) -> Solution {
        let rhs_col = self.rhs_col();
        let mut values = vec![0.0; self.n_vars];
        for (i, &basic) in self.basis.iter().enumerate() {
            if basic < self.n_vars {
                values[basic] = self[(i, rhs_col)];
            }
        }

        Solution {
            values,
            objective_value: self.objective_value(),
            iterations,
            basis: self.basis.clone(),
        }
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.n_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.n_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Problem {
        // max 2x + 3y
        //   x +  y <= 4
        //  2x +  y <= 5
        let mut problem = Problem::new(vec![2.0, 3.0]);
        problem.add_constraint(vec![1.0, 1.0], 4.0);
        problem.add_constraint(vec![2.0, 1.0], 5.0);
        problem
    }

    #[test]
    fn test_initial_layout() {
        let tableau = Tableau::new(&sample());

        assert_eq!(tableau.num_rows(), 3);
        assert_eq!(tableau.num_cols(), 5);
        assert_eq!(tableau.row(0), &[1.0, 1.0, 1.0, 0.0, 4.0]);
        assert_eq!(tableau.row(1), &[2.0, 1.0, 0.0, 1.0, 5.0]);
        assert_eq!(tableau.row(2), &[-2.0, -3.0, 0.0, 0.0, 0.0]);
        assert_eq!(tableau.basis(), &[2, 3]);
    }

    #[test]
    fn test_entering_column_picks_most_negative() {
        let tableau = Tableau::new(&sample());
        assert_eq!(tableau.entering_column(1e-9), Some(1));
    }

    #[test]
    fn test_entering_column_ties_go_left() {
        let mut problem = Problem::new(vec![1.0, 1.0]);
        problem.add_constraint(vec![1.0, 1.0], 5.0);
        let tableau = Tableau::new(&problem);
        assert_eq!(tableau.entering_column(1e-9), Some(0));
    }

    #[test]
    fn test_entering_column_respects_tolerance() {
        let mut problem = Problem::new(vec![1e-7, 0.0]);
        problem.add_constraint(vec![1.0, 1.0], 5.0);
        let tableau = Tableau::new(&problem);
        assert_eq!(tableau.entering_column(1e-6), None);
        assert_eq!(tableau.entering_column(1e-9), Some(0));
    }

    #[test]
    fn test_leaving_row_ratio_and_tie_break() {
        // ratios for column 1: 4/1 = 4, 5/1 = 5
        let tableau = Tableau::new(&sample());
        assert_eq!(tableau.leaving_row(1, 1e-9), Some(0));

        // ratios for column 0: 2/1 = 2, 4/2 = 2; first row wins
        let mut problem = Problem::new(vec![1.0]);
        problem.add_constraint(vec![1.0], 2.0);
        problem.add_constraint(vec![2.0], 4.0);
        let tableau = Tableau::new(&problem);
        assert_eq!(tableau.leaving_row(0, 1e-9), Some(0));
    }

    #[test]
    fn test_leaving_row_none_when_column_non_positive() {
        let mut problem = Problem::new(vec![3.0, 2.0]);
        problem.add_constraint(vec![-2.0, 1.0], 2.0);
        let tableau = Tableau::new(&problem);
        assert_eq!(tableau.leaving_row(0, 1e-9), None);
    }

    #[test]
    fn test_pivot_eliminates_column() {
        let mut tableau = Tableau::new(&sample());
        tableau.pivot(0, 1);

        assert_eq!(tableau.basis(), &[1, 3]);
        assert_eq!(tableau.row(0), &[1.0, 1.0, 1.0, 0.0, 4.0]);
        assert_eq!(tableau.row(1), &[1.0, 0.0, -1.0, 1.0, 1.0]);
        assert_eq!(tableau.row(2), &[1.0, 0.0, 3.0, 0.0, 12.0]);
        assert_eq!(tableau.entering_column(1e-9), None);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let mut tableau = Tableau::new(&sample());
        tableau.pivot(0, 1);

        let first = tableau.extract(1);
        let second = tableau.extract(1);
        assert_eq!(first, second);
        assert_eq!(first.values, vec![0.0, 4.0]);
        assert_eq!(first.objective_value, 12.0);
    }
}
