use std::process::ExitCode;

use aoc2025_day_6::{cli, Reading};

fn main() -> ExitCode {
    cli::run(Reading::Rows)
}
