mod error;
mod input;
mod report;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use simplex_solver::Solver;

use crate::error::CliError;
use crate::input::Tokens;

#[derive(Parser)]
#[command(name = "simplex")]
#[command(about = "Maximize c·x subject to Ax <= b, x >= 0 with the tableau simplex method", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the problem on the console (the default)
    Interactive {
        /// Pivot limit before giving up
        #[arg(long, default_value_t = 10000)]
        max_iterations: usize,
    },
    /// Solve a problem stored as JSON
    Solve {
        /// File with {"objective": [..], "constraints": [[..]], "rhs": [..]}
        file: PathBuf,
        /// Comparison tolerance
        #[arg(long, default_value_t = 1e-6)]
        eps: f64,
        /// Pivot limit before giving up
        #[arg(long, default_value_t = 10000)]
        max_iterations: usize,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Interactive { max_iterations: 10000 });
    if let Err(e) = run(command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Commands::Interactive { max_iterations } => {
            let mut tokens = Tokens::new(io::stdin().lock());
            let read = input::read_interactive(&mut tokens, &mut out)?;

            let solver = Solver::new().with_tolerance(read.eps).with_max_iterations(max_iterations);
            let outcome = solver.solve(&read.problem)?;
            report::write_text(&mut out, &outcome)?;
        }
        Commands::Solve { file, eps, max_iterations, format } => {
            let problem = input::read_problem_file(&file)?;
            info!("loaded {} ({} variables, {} constraints)", file.display(), problem.num_variables(), problem.num_constraints());

            let solver = Solver::new().with_tolerance(eps).with_max_iterations(max_iterations);
            let outcome = solver.solve(&problem)?;
            match format {
                Format::Text => report::write_text(&mut out, &outcome)?,
                Format::Json => report::write_json(&mut out, &outcome)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}
