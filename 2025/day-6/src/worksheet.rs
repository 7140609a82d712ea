use crate::{
    error::WorksheetError,
    grid::Grid,
    input::WorksheetLines,
    problem::{parse_operand, Operation, Problem, Problems},
    segment::{segments, Segment},
};

/// How the digits of a problem are read off the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Each operand row within the problem is one number, top row first.
    Rows,
    /// Each column is one number read top to bottom, rightmost column first.
    Columns,
}

#[derive(Debug, Clone)]
pub struct Worksheet {
    rows: Grid<char>,
    columns: Grid<char>,
    operator_row: Vec<char>,
    segments: Vec<Segment>,
}

impl Worksheet {
    #[tracing::instrument(skip(input))]
    pub fn parse(input: &str) -> Result<Self, WorksheetError> {
        let lines = WorksheetLines::split(input)?;

        let rows = Grid::from_lines(&lines.operand_rows)?;
        let columns = rows.transpose();
        let segments = segments(&columns);

        Ok(Self {
            rows,
            columns,
            operator_row: lines.operator_row.chars().collect(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn operands(&self, segment: &Segment, reading: Reading) -> Result<Vec<u64>, WorksheetError> {
        match reading {
            Reading::Rows => (0..self.rows.height())
                .map(|y| parse_operand(&self.rows.text(y, segment.clone())))
                .collect(),
            Reading::Columns => segment
                .clone()
                .rev()
                .map(|x| parse_operand(&self.columns.text(x, 0..self.columns.width())))
                .collect(),
        }
    }

    pub fn problem(&self, segment: &Segment, reading: Reading) -> Result<Problem, WorksheetError> {
        let operands = self.operands(segment, reading)?;
        let operation = Operation::from_operator_row(&self.operator_row, segment);
        Ok(Problem::new(operands, operation))
    }

    /// Parses every segment, stopping at the first malformed operand.
    #[tracing::instrument(skip(self))]
    pub fn problems(&self, reading: Reading) -> Result<Problems, WorksheetError> {
        self.segments
            .iter()
            .map(|segment| self.problem(segment, reading))
            .collect()
    }
}
