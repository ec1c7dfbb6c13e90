//! CSV column loading.
//!
//! ## Purpose
//!
//! This module reads one column of a comma-separated file with a header row
//! and coerces every cell to `f64`, producing the sample set handed to the
//! engine.
//!
//! ## Design notes
//!
//! * **Strict**: Every cell of the column is parsed; a bad cell fails the
//!   whole load. Nothing is filtered.
//! * **Provenance**: Each value keeps the file line it came from so engine
//!   errors (which carry a sample index) can be reported by line.
//! * **Selection**: Columns are chosen by header name or zero-based index
//!   through an explicit [`ColumnSelector`].
//!
//! ## Invariants
//!
//! * `NumericSeries::values` and `NumericSeries::rows` have equal length.
//! * Values are in file order.
//!
//! ## Non-goals
//!
//! * This module does not check positivity or finiteness (the engine does).
//! * This module does not support files without a header row.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

// External dependencies
use log::debug;
use thiserror::Error;

// ============================================================================
// Column Selection
// ============================================================================

/// Which column of the input to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Column with this header name.
    Name(String),

    /// Column at this zero-based position.
    Index(usize),
}

impl Default for ColumnSelector {
    /// The first column.
    fn default() -> Self {
        ColumnSelector::Index(0)
    }
}

impl FromStr for ColumnSelector {
    type Err = Infallible;

    /// Unsigned integers select by index; anything else selects by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(name) => write!(f, "'{}'", name),
            ColumnSelector::Index(index) => write!(f, "index {}", index),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures while loading a numeric column.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// The input file exists but cannot be opened.
    #[error("Cannot read {}", path.display())]
    Unreadable {
        /// Requested path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input has no header row.
    #[error("Missing header: the input has no header row")]
    MissingHeader,

    /// The selected column is not in the header.
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnSelector),

    /// A cell of the selected column is not a decimal number.
    #[error("Non-numeric cell at row {row}: {raw:?}")]
    NonNumericCell {
        /// 1-based line of the record in the file.
        row: u64,
        /// Cell text after trimming.
        raw: String,
    },

    /// A record is too short to contain the selected column.
    #[error("Missing cell at row {row}")]
    MissingCell {
        /// 1-based line of the record in the file.
        row: u64,
    },

    /// The input is not well-formed CSV.
    #[error("Malformed CSV")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Numeric Series
// ============================================================================

/// A parsed numeric column with the file line of every value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSeries {
    /// Header name of the column.
    pub column: String,

    /// Parsed values in file order.
    pub values: Vec<f64>,

    /// 1-based file line of each value.
    pub rows: Vec<u64>,
}

impl NumericSeries {
    /// Parsed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// File line of the value at `position`.
    pub fn row_of(&self, position: usize) -> Option<u64> {
        self.rows.get(position).copied()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load one column of a CSV file as `f64` values.
pub fn load_numeric_series<P: AsRef<Path>>(
    path: P,
    column: &ColumnSelector,
) -> Result<NumericSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!("loading column {} from {}", column, path.display());
    read_numeric_series(file, column)
}

/// Read one column of CSV text as `f64` values.
pub fn read_numeric_series<R: Read>(
    reader: R,
    column: &ColumnSelector,
) -> Result<NumericSeries, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingHeader);
    }

    let index = match column {
        ColumnSelector::Name(name) => headers.iter().position(|h| h == name),
        ColumnSelector::Index(index) => Some(*index).filter(|&i| i < headers.len()),
    }
    .ok_or_else(|| LoadError::ColumnNotFound(column.clone()))?;

    let mut values = Vec::new();
    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        let cell = record.get(index).ok_or(LoadError::MissingCell { row })?;
        let value = cell
            .parse::<f64>()
            .map_err(|_| LoadError::NonNumericCell {
                row,
                raw: cell.to_string(),
            })?;
        values.push(value);
        rows.push(row);
    }

    let column = headers[index].to_string();
    debug!("read {} values from column '{}'", values.len(), column);

    Ok(NumericSeries {
        column,
        values,
        rows,
    })
}
