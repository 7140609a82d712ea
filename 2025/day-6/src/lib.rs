pub mod cli;
pub mod error;
pub mod grid;
pub mod input;
pub mod part1;
pub mod part2;
pub mod problem;
pub mod segment;
pub mod worksheet;

pub use error::WorksheetError;
pub use worksheet::{Reading, Worksheet};
