use std::ops::Range;

use itertools::Itertools;

use crate::grid::Grid;

/// Half-open range of source column indices holding one problem.
pub type Segment = Range<usize>;

/// Finds the maximal runs of non-blank columns, left to right.
///
/// `columns` is the transposed operand grid, so each of its rows is one source column.
#[tracing::instrument(skip(columns))]
pub fn segments(columns: &Grid<char>) -> Vec<Segment> {
    let runs = (0..columns.height()).chunk_by(|&x| columns.is_blank_row(x));

    let segments: Vec<Segment> = runs
        .into_iter()
        .filter(|(blank, _)| !blank)
        .filter_map(|(_, mut run)| {
            let start = run.next()?;
            let end = run.last().unwrap_or(start) + 1;
            Some(start..end)
        })
        .collect();

    tracing::debug!(count = segments.len(), ?segments, "found segments");
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn segments_of(lines: &[&str]) -> Vec<Segment> {
        segments(&Grid::from_lines(lines).unwrap().transpose())
    }

    #[rstest]
    #[case(&["123", "456"], vec![0..3])]
    #[case(&["2 3", "4 5"], vec![0..1, 2..3])]
    #[case(&[" 12  3 ", "  4  56"], vec![1..3, 5..7])]
    #[case(&["123 328  51 64 ", " 45 64  387 23 ", "  6 98  215 314"], vec![0..3, 4..7, 8..11, 12..15])]
    #[case(&["1 ", "2 34"], vec![0..1])]
    fn splits_on_blank_columns(#[case] lines: &[&str], #[case] expected: Vec<Segment>) {
        assert_eq!(expected, segments_of(lines));
    }

    #[test]
    fn blank_grid_has_no_segments() {
        assert!(segments_of(&["    ", "  "]).is_empty());
    }

    #[test]
    fn zero_width_grid_has_no_segments() {
        let columns = Grid::<char>::from_rows(Vec::<Vec<char>>::new()).transpose();
        assert!(segments(&columns).is_empty());
    }

    #[test]
    fn segments_are_ordered_and_disjoint() {
        let found = segments_of(&["1 22  333 4", "5  6 7 8  9"]);
        assert!(found.iter().all(|s| s.start < s.end));
        assert!(found.windows(2).all(|pair| pair[0].end < pair[1].start));
    }
}
