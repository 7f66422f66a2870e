// File: crates/csv-chart/src/error.rs
// Summary: Typed errors for table loading and chart construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` is 1-based and counts data rows only (the header is not a row).
    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NonNumeric { column: String, row: usize, value: String },

    #[error("need at least two columns to plot (one x, one y), found {found}")]
    TooFewColumns { found: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
