use std::{fs::File, io, path::Path};

use crate::error::WorksheetError;

/// Loads the whole worksheet into memory. The file handle is released before returning.
#[tracing::instrument]
pub fn read_input(path: &Path) -> Result<String, WorksheetError> {
    let file = File::open(path).map_err(|source| WorksheetError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    io::read_to_string(file).map_err(|source| WorksheetError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// The non-empty lines of a worksheet, split into operand rows and the trailing operator row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetLines<'a> {
    pub operand_rows: Vec<&'a str>,
    pub operator_row: &'a str,
}

impl<'a> WorksheetLines<'a> {
    pub fn split(input: &'a str) -> Result<Self, WorksheetError> {
        // Whitespace-only lines are kept, they still occupy a row of the grid.
        let mut lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        let found = lines.len();

        let Some(operator_row) = lines.pop().filter(|_| found >= 2) else {
            return Err(WorksheetError::InsufficientInput { found });
        };

        tracing::debug!(operand_rows = lines.len(), "split worksheet lines");

        Ok(Self {
            operand_rows: lines,
            operator_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn splits_off_the_operator_row() {
        let lines = WorksheetLines::split("123\n456\n+\n").unwrap();
        assert_eq!(vec!["123", "456"], lines.operand_rows);
        assert_eq!("+", lines.operator_row);
    }

    #[test]
    fn drops_empty_lines_but_keeps_blank_ones() {
        let lines = WorksheetLines::split("\n12\n\n   \n34\n\n*  \n\n").unwrap();
        assert_eq!(vec!["12", "   ", "34"], lines.operand_rows);
        assert_eq!("*  ", lines.operator_row);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let lines = WorksheetLines::split("1 2\r\n3 4\r\n+ *\r\n").unwrap();
        assert_eq!(vec!["1 2", "3 4"], lines.operand_rows);
        assert_eq!("+ *", lines.operator_row);
    }

    #[rstest]
    #[case("", 0)]
    #[case("\n\n", 0)]
    #[case("+", 1)]
    #[case("\n123\n\n", 1)]
    fn rejects_too_few_lines(#[case] input: &str, #[case] expected: usize) {
        match WorksheetLines::split(input) {
            Err(WorksheetError::InsufficientInput { found }) => assert_eq!(expected, found),
            other => panic!("expected insufficient input, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("definitely/not/a/worksheet.txt");
        let err = read_input(path).unwrap_err();
        assert!(matches!(err, WorksheetError::FileOpen { .. }));
        assert_eq!(
            "Failed to open file: definitely/not/a/worksheet.txt",
            err.to_string()
        );
    }

    #[test]
    fn non_utf8_file_is_a_read_error() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/not_utf8.txt"
        ));
        let err = read_input(path).unwrap_err();
        assert!(matches!(err, WorksheetError::FileRead { .. }));
        assert!(err.to_string().starts_with("Failed to read file: "));
    }
}
