//! Error types for the extraction pipeline.

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the pipeline can produce. All of these are scoped to the
/// single parse or extraction that raised them; none is a process fault.
#[derive(Debug, Error)]
pub enum Error {
    /// A datamap CSV record does not have exactly 4 fields
    #[error("invalid datamap format: record {row} has {found} fields, expected 4")]
    MalformedRecord { row: usize, found: usize },

    /// A required field is empty or a cell reference fails the A1 pattern
    #[error("{0}")]
    Validation(String),

    /// The workbook file cannot be opened or decoded
    #[error("unable to open workbook {path}")]
    WorkbookOpen {
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// A datamap-referenced sheet is absent from the workbook
    #[error("sheet {0} not found in workbook")]
    SheetNotFound(String),

    /// A cell reference cannot be decoded into coordinates during extraction
    #[error("invalid cell reference: {0:?}")]
    InvalidCellReference(String),

    /// The decoder reported an error reading an otherwise-valid coordinate
    #[error("unable to read cell {cell_ref} on sheet {sheet}")]
    CellRead { sheet: String, cell_ref: String },

    /// CSV reader error (I/O or quoting)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
