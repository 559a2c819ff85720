//! Export of audit results for the presentation layer.
//!
//! Two outputs per run: one single-column CSV extract per rule holding the
//! flagged claim identifiers, and a JSON dump of the full audit report
//! (master view with flags, roll-ups, exploratory statistics).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::AuditReport;
use crate::algorithm::{FlagSummary, Rule};
use crate::error::{ClaimAuditError, Result};

/// File name of the JSON report dump
pub const REPORT_FILE: &str = "audit_report.json";

/// Write one claim-ID extract per rule into `dir`, named
/// `<rule>_claims.csv`, each with a single `Claim ID` column.
pub fn write_rule_extracts(summary: &FlagSummary, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| ClaimAuditError::io(dir, e))?;

    let mut written = Vec::with_capacity(Rule::COUNT);
    for rule in Rule::ALL {
        let path = dir.join(format!("{}_claims.csv", rule.name()));
        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| ClaimAuditError::csv(&path, e))?;
        writer
            .write_record(["Claim ID"])
            .map_err(|e| ClaimAuditError::csv(&path, e))?;
        for claim_id in summary.claims_for(rule) {
            writer
                .write_record([claim_id.as_str()])
                .map_err(|e| ClaimAuditError::csv(&path, e))?;
        }
        writer
            .flush()
            .map_err(|e| ClaimAuditError::io(&path, e))?;
        written.push(path);
    }

    info!("Wrote {} rule extracts to {}", written.len(), dir.display());
    Ok(written)
}

/// Write the full audit report as JSON into `dir`
pub fn write_report(report: &AuditReport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ClaimAuditError::io(dir, e))?;
    let path = dir.join(REPORT_FILE);
    let file = File::create(&path).map_err(|e| ClaimAuditError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| ClaimAuditError::io(&path, e.into()))?;
    writer.flush().map_err(|e| ClaimAuditError::io(&path, e))?;

    info!("Wrote audit report to {}", path.display());
    Ok(path)
}
