use miette::*;

use crate::{
    error::WorksheetError,
    worksheet::{Reading, Worksheet},
};

/// Grand total when every operand row inside a problem is read as one number.
pub fn solve(input: &str) -> Result<u64, WorksheetError> {
    let problems = Worksheet::parse(input)?.problems(Reading::Rows)?;
    Ok(problems.total())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let total = solve(input)?;
    Ok(total.to_string())
}
