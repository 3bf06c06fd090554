use std::io::Write;

use simplex_solver::Outcome;

use crate::error::CliError;

pub const NOT_APPLICABLE: &str = "The method is not applicable!";

pub fn write_text<W: Write>(out: &mut W, outcome: &Outcome) -> Result<(), CliError> {
    match outcome {
        Outcome::Optimal(solution) => {
            writeln!(out, "Optimal solution found:")?;
            for (i, value) in solution.values.iter().enumerate() {
                writeln!(out, "x{} = {:.6}", i + 1, value)?;
            }
            writeln!(out, "Objective value: {:.6}", solution.objective_value)?;
        }
        Outcome::Unbounded => writeln!(out, "{}", NOT_APPLICABLE)?,
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, outcome: &Outcome) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)?;
    Ok(())
}
