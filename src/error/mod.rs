//! Error handling for the claims audit pipeline.
//!
//! Only load-time failures are fatal: the pipeline cannot run without all
//! six input tables. Everything downstream recovers locally (unparseable
//! dates become `None`, missing join targets become left-join nulls).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized error type for the claims audit pipeline
#[derive(Debug, Error)]
pub enum ClaimAuditError {
    /// Error opening or reading an input file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path of the file or directory that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A required input table is absent from the data directory
    #[error("missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    /// Error decoding CSV records from an input table
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

impl ClaimAuditError {
    /// Wrap an IO error with the path it occurred on
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error with the path it occurred on
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type for claims audit operations
pub type Result<T> = std::result::Result<T, ClaimAuditError>;
