use chumsky::prelude::*;

use crate::{error::WorksheetError, segment::Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    /// Anything other than a lone `+` or `*`. Contributes nothing to the total.
    Unknown,
}

fn operation_parser<'a>() -> impl Parser<'a, &'a str, Operation, extra::Err<Rich<'a, char>>> {
    choice((
        just('+').to(Operation::Add),
        just('*').to(Operation::Multiply),
    ))
}

/// One or more ASCII digits, rejected if the value does not fit in a u64.
fn operand_parser<'a>() -> impl Parser<'a, &'a str, u64, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<u64>()
                .map_err(|err| Rich::custom(span, err))
        })
}

impl Operation {
    pub fn from_symbol(text: &str) -> Self {
        operation_parser()
            .parse(text.trim())
            .into_result()
            .unwrap_or(Operation::Unknown)
    }

    /// Reads the operator under `segment`, ignoring positions past the end of the row.
    pub fn from_operator_row(operator_row: &[char], segment: &Segment) -> Self {
        let start = segment.start.min(operator_row.len());
        let end = segment.end.min(operator_row.len());
        let symbol: String = operator_row[start..end].iter().collect();
        Self::from_symbol(&symbol)
    }

    /// Folds `operands` with wrapping u64 arithmetic.
    pub fn apply(self, operands: &[u64]) -> u64 {
        match self {
            Operation::Add => operands.iter().fold(0, |acc, &n| acc.wrapping_add(n)),
            Operation::Multiply => operands.iter().fold(1, |acc, &n| acc.wrapping_mul(n)),
            Operation::Unknown => 0,
        }
    }
}

/// Trims `text` and parses the whole of it as an unsigned decimal integer.
pub fn parse_operand(text: &str) -> Result<u64, WorksheetError> {
    let trimmed = text.trim();
    operand_parser()
        .parse(trimmed)
        .into_result()
        .map_err(|_| WorksheetError::OperandParse {
            text: trimmed.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operands: Vec<u64>,
    operation: Operation,
}

impl Problem {
    pub fn new(operands: Vec<u64>, operation: Operation) -> Self {
        Self {
            operands,
            operation,
        }
    }

    pub fn operands(&self) -> &[u64] {
        &self.operands
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn answer(&self) -> u64 {
        self.operation.apply(&self.operands)
    }
}

/// Every problem on a worksheet, in segment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problems(Vec<Problem>);

impl Problems {
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Grand total of every answer, wrapping on overflow.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, problem| {
            let answer = problem.answer();
            tracing::trace!(?problem, answer, "solved problem");
            acc.wrapping_add(answer)
        })
    }
}

impl FromIterator<Problem> for Problems {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
