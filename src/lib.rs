//! A Rust library for screening medical insurance claims: joins six
//! related tables into one denormalized master view, evaluates a fixed set
//! of heuristic anomaly rules, and rolls the flags up by claim, hospital,
//! doctor, and agent for reporting.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::AuditConfig;
pub use error::{ClaimAuditError, Result};
pub use loader::ClaimDataset;
pub use models::MasterRow;

// Pipeline stages
pub use algorithm::{
    ExplorationReport, FlagSet, FlagSummary, FlaggedRow, Rollup, Rule, aggregate, apply_rules,
    build_master, explore, preprocess,
};

use serde::Serialize;

/// Everything one audit run produces for the presentation layer
#[derive(Debug, Serialize)]
pub struct AuditReport {
    /// The master view with evaluated flags, one row per claim
    pub master: Vec<FlaggedRow>,
    /// Roll-ups by claim, hospital, doctor, and agent
    pub summary: FlagSummary,
    /// Exploratory statistics over the input tables
    pub exploration: ExplorationReport,
}

/// Run the full audit pipeline: load, preprocess, join, evaluate rules,
/// aggregate. Fails only when an input table is missing or unreadable.
pub fn run_audit(config: &AuditConfig) -> Result<AuditReport> {
    let mut dataset = ClaimDataset::load(&config.data_dir)?;
    preprocess(&mut dataset);

    let master = build_master(&dataset);
    let flagged = apply_rules(master);
    let summary = aggregate(&flagged, &dataset.assignments, dataset.has_agent);
    let exploration = explore(&dataset);

    Ok(AuditReport {
        master: flagged,
        summary,
        exploration,
    })
}
