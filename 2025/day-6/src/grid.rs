use std::ops::Range;

use crate::error::WorksheetError;

/// Row-major grid that tolerates ragged rows.
///
/// The first row fixes the width. Cells past the end of a shorter row are
/// absent and read back as `None`, as does anything outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T: Clone> Grid<T> {
    /// Builds a grid as wide as its first row. Longer rows are cut to that width.
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let len = row.len().min(width);
            cells.extend(row.into_iter().take(width).map(Some));
            cells.extend((len..width).map(|_| None));
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Swaps rows and columns: row `c` of the result is column `c` of `self`.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(self.cells[y * self.width + x].clone());
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at (x, y), or `None` if it is absent or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x].as_ref()
    }

    pub fn row(&self, y: usize) -> impl Iterator<Item = Option<&T>> + '_ {
        (0..self.width).map(move |x| self.get(x, y))
    }
}

impl Grid<char> {
    /// Builds the operand grid from raw worksheet rows.
    pub fn from_lines(lines: &[&str]) -> Result<Self, WorksheetError> {
        match lines.first() {
            Some(first) if !first.is_empty() => {}
            _ => return Err(WorksheetError::EmptyGrid),
        }

        let grid = Self::from_rows(lines.iter().map(|line| line.chars()));
        tracing::debug!(width = grid.width, height = grid.height, "built operand grid");
        Ok(grid)
    }

    /// A row is blank when every present cell is a space.
    pub fn is_blank_row(&self, y: usize) -> bool {
        self.row(y).all(|cell| cell.map_or(true, |&c| c == ' '))
    }

    /// Concatenates the present cells of row `y` within `span`, left to right.
    pub fn text(&self, y: usize, span: Range<usize>) -> String {
        span.filter_map(|x| self.get(x, y)).collect()
    }
}
