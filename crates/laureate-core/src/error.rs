// File: crates/laureate-core/src/error.rs
// Summary: Error taxonomy for loading, validation and scale construction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The input source could not be opened or read.
    #[error("failed to load '{path}'")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input (bad quoting, uneven rows, ...).
    #[error("invalid CSV input")]
    Csv(#[from] csv::Error),

    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    /// `row` is the 1-based data row (the header is not counted).
    #[error("row {row}: column '{column}' has non-integer value '{value}'")]
    MalformedRecord { row: usize, column: String, value: String },

    #[error("dataset is empty; no years or category groups to scale")]
    EmptyDataset,

    #[error("{groups} category groups but the palette only has {colors} colors")]
    PaletteExhausted { groups: usize, colors: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
