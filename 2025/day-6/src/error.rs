use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Every way a worksheet run can fail. All of them abort the run.
#[derive(Debug, Error, Diagnostic)]
pub enum WorksheetError {
    #[error("usage: {program} <input-file>")]
    #[diagnostic(code(aoc2025_day_6::usage))]
    Usage { program: String },

    #[error("Failed to open file: {}", path.display())]
    #[diagnostic(
        code(aoc2025_day_6::file_open),
        help("check that the path exists and is readable")
    )]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {}", path.display())]
    #[diagnostic(
        code(aoc2025_day_6::file_read),
        help("the worksheet must be UTF-8 text")
    )]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not enough lines in input: expected at least 2, found {found}")]
    #[diagnostic(
        code(aoc2025_day_6::insufficient_input),
        help("a worksheet needs at least one operand row followed by the operator row")
    )]
    InsufficientInput { found: usize },

    #[error("Empty grid")]
    #[diagnostic(code(aoc2025_day_6::empty_grid))]
    EmptyGrid,

    #[error("Failed to parse operand: '{text}'")]
    #[diagnostic(
        code(aoc2025_day_6::operand_parse),
        help("operands are unsigned decimal integers that fit in 64 bits")
    )]
    OperandParse { text: String },
}
