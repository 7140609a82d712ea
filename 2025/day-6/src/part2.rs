use miette::*;

use crate::{
    error::WorksheetError,
    worksheet::{Reading, Worksheet},
};

/// Grand total when each column is a number, read top to bottom, and a
/// problem's columns are taken right to left.
pub fn solve(input: &str) -> Result<u64, WorksheetError> {
    let problems = Worksheet::parse(input)?.problems(Reading::Columns)?;
    tracing::debug!(problems = problems.len(), "parsed worksheet");
    Ok(problems.total())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let total = solve(input)?;
    Ok(total.to_string())
}
