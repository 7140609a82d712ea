use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use tracing_subscriber::EnvFilter;

use crate::{
    error::WorksheetError,
    input::read_input,
    worksheet::{Reading, Worksheet},
};

/// Logs go to stderr so stdout only ever carries the answer line.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Extracts the input path from the process arguments.
pub fn input_path<I>(mut args: I) -> Result<PathBuf, WorksheetError>
where
    I: Iterator<Item = String>,
{
    let program = args
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("aoc2025-day-6"));

    args.next()
        .map(PathBuf::from)
        .ok_or(WorksheetError::Usage { program })
}

#[tracing::instrument]
pub fn solve_file(path: &Path, reading: Reading) -> Result<u64, WorksheetError> {
    let input = read_input(path)?;
    let problems = Worksheet::parse(&input)?.problems(reading)?;
    Ok(problems.total())
}

/// Runs one reading of the worksheet named on the command line.
pub fn run(reading: Reading) -> ExitCode {
    init_tracing();

    let path = match input_path(std::env::args()) {
        Ok(path) => path,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    match solve_file(&path, reading) {
        Ok(total) => {
            println!("final = {total}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
