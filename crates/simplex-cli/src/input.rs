use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use simplex_solver::Problem;

use crate::error::CliError;

/// Whitespace-separated tokens pulled from a line-oriented reader on demand,
/// so several values may share a line.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next<T: FromStr>(&mut self, what: &str) -> Result<T, CliError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::UnexpectedEof(what.to_string()));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        let token = self.pending.pop_front().unwrap_or_default();
        token.parse().map_err(|_| CliError::Parse {
            what: what.to_string(),
            token,
        })
    }
}

/// A problem read interactively, together with the tolerance entered last
pub struct Interactive {
    pub problem: Problem,
    pub eps: f64,
}

/// Prompt for dimensions, coefficients, right-hand sides and epsilon.
pub fn read_interactive<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<Interactive, CliError> {
    write!(out, "Enter the number of variables: ")?;
    out.flush()?;
    let n: usize = tokens.next("number of variables")?;
    write!(out, "Enter the number of constraints: ")?;
    out.flush()?;
    let m: usize = tokens.next("number of constraints")?;

    writeln!(out, "Enter the coefficients of the objective function (C):")?;
    let mut objective = Vec::with_capacity(n);
    for j in 0..n {
        write!(out, "C[{}]: ", j)?;
        out.flush()?;
        objective.push(tokens.next(&format!("C[{}]", j))?);
    }

    writeln!(out, "Enter the coefficients of the constraint functions (A):")?;
    let mut constraints = Vec::with_capacity(m);
    for i in 0..m {
        writeln!(out, "Constraint {}:", i + 1)?;
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            write!(out, "A[{}][{}]: ", i, j)?;
            out.flush()?;
            row.push(tokens.next(&format!("A[{}][{}]", i, j))?);
        }
        constraints.push(row);
    }

    writeln!(out, "Enter the right-hand side numbers (b):")?;
    let mut rhs = Vec::with_capacity(m);
    for i in 0..m {
        write!(out, "b[{}]: ", i)?;
        out.flush()?;
        rhs.push(tokens.next(&format!("b[{}]", i))?);
    }

    write!(out, "Enter the approximation accuracy (epsilon): ")?;
    out.flush()?;
    let eps = tokens.next("epsilon")?;

    let problem = Problem::from_parts(objective, constraints, rhs)?;
    Ok(Interactive { problem, eps })
}

/// Load a JSON problem `{"objective": [..], "constraints": [[..]], "rhs": [..]}`.
pub fn read_problem_file(path: &Path) -> Result<Problem, CliError> {
    let source = std::fs::read_to_string(path)?;
    parse_problem(&source)
}

pub fn parse_problem(source: &str) -> Result<Problem, CliError> {
    let problem: Problem = serde_json::from_str(source)?;
    Ok(Problem::from_parts(problem.objective, problem.constraints, problem.rhs)?)
}
