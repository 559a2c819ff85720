//! Configuration for the audit pipeline.

use std::fmt;
use std::path::PathBuf;

/// Number of rows retained in each ranked roll-up view for presentation.
pub const DEFAULT_RANKING_SIZE: usize = 10;

/// Configuration for a single audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Directory containing the six input tables
    pub data_dir: PathBuf,
    /// Directory receiving per-rule extracts and the report dump
    pub output_dir: PathBuf,
    /// Number of entries shown in ranked roll-ups (full tables are kept)
    pub ranking_size: usize,
}

impl AuditConfig {
    /// Create a configuration for the given data directory, writing
    /// outputs next to it
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let output_dir = data_dir.join("audit_output");
        Self {
            data_dir,
            output_dir,
            ranking_size: DEFAULT_RANKING_SIZE,
        }
    }

    /// Override the output directory
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl fmt::Display for AuditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Audit Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Ranking Size: {}", self.ranking_size)?;
        Ok(())
    }
}
