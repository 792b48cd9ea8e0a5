use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Library error type
// ---------------------------------------------------------------------------

/// Everything that can go wrong in either tool.
///
/// Binaries wrap this in `anyhow::Error` and let it reach the process
/// boundary; only [`PrepError::Usage`] is handled explicitly.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("column '{column}' not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("{name} must be an integer, got '{value}'")]
    NumericParse {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Carries the full usage line to print.
    #[error("{0}")]
    Usage(String),

    #[error("CSV error in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: row has {found} fields, header has {expected}", .path.display())]
    LongRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render box plot to {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    #[error("viewer window failed: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
